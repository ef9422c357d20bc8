//! # Presenter Module
//!
//! Transport-agnostic descriptions of what the chat should show for a results
//! page or an item detail. The bot layer turns these into Telegram markup.

use tracing::warn;

use crate::localization::{t_args_lang, t_lang};
use crate::models::{ItemDetail, PageResult};
use crate::navigation::{encode_detail, encode_page, fits_callback_data};

/// Telegram's limit on photo captions, in characters
pub const MAX_CAPTION_CHARS: usize = 1024;

/// What pressing a button does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Send this navigation token back as callback data
    Callback(String),
    /// Open this URL
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDescriptor {
    pub label: String,
    pub action: ButtonAction,
}

impl ButtonDescriptor {
    fn callback(label: impl Into<String>, token: String) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(token),
        }
    }
}

/// A page of results: one row per entry, then an optional navigation row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub text: String,
    pub results: Vec<ButtonDescriptor>,
    pub navigation: Vec<ButtonDescriptor>,
}

/// Caption parts of a detail message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    /// Shown in bold
    pub title: String,
    pub body: String,
}

impl Caption {
    pub fn char_count(&self) -> usize {
        self.title.chars().count() + 2 + self.body.chars().count()
    }
}

/// An item detail: caption, optional cover and one download button per link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub caption: Caption,
    pub cover_url: Option<String>,
    pub downloads: Vec<ButtonDescriptor>,
}

/// Label of a result button: the title tagged with the id's last characters
pub fn result_label(title: &str, short_code: &str) -> String {
    format!("{title} /d_{short_code}")
}

/// Describe a page of results for `query`
pub fn results_view(
    query: &str,
    page: u32,
    result: &PageResult,
    language_code: Option<&str>,
) -> ResultsView {
    let results = result
        .items
        .iter()
        .filter_map(|item| {
            let token = encode_detail(&item.id);
            if !fits_callback_data(&token) {
                warn!(id = %item.id, "Identifier too long for callback data, skipping entry");
                return None;
            }
            Some(ButtonDescriptor::callback(
                result_label(&item.title, item.short_code()),
                token,
            ))
        })
        .collect();

    let mut navigation = Vec::new();
    let mut pages_hidden = false;
    if page > 1 {
        match page_token(query, page - 1) {
            Some(token) => navigation.push(ButtonDescriptor::callback(
                t_lang("nav-previous", language_code),
                token,
            )),
            None => pages_hidden = true,
        }
    }
    if result.has_next_page {
        match page_token(query, page.saturating_add(1)) {
            Some(token) => navigation.push(ButtonDescriptor::callback(
                t_lang("nav-next", language_code),
                token,
            )),
            None => pages_hidden = true,
        }
    }

    let mut text = t_lang("results-header", language_code);
    if pages_hidden {
        text = format!("{text}\n\n{}", t_lang("refine-query", language_code));
    }

    ResultsView {
        text,
        results,
        navigation,
    }
}

/// Page token for `query`, `None` when it does not fit in callback data
fn page_token(query: &str, page: u32) -> Option<String> {
    let token = encode_page(query, page);
    if fits_callback_data(&token) {
        return Some(token);
    }
    warn!(
        query = %query,
        page,
        bytes = token.len(),
        "Query too long for callback data, leaving out navigation button"
    );
    None
}

/// Describe an item detail
pub fn detail_view(detail: &ItemDetail, language_code: Option<&str>) -> DetailView {
    let downloads: Vec<ButtonDescriptor> = detail
        .download_links
        .iter()
        .map(|link| ButtonDescriptor {
            label: t_args_lang(
                "download-button",
                &[("format", link.format.as_str())],
                language_code,
            ),
            action: ButtonAction::Url(link.url.clone()),
        })
        .collect();

    // The note must survive caption shortening, so room is kept for it
    let note = if downloads.is_empty() {
        format!("\n\n{}", t_lang("no-download-links", language_code))
    } else {
        String::new()
    };

    let mut caption = fit_caption(
        Caption {
            title: detail.title.clone(),
            body: detail.description.clone(),
        },
        MAX_CAPTION_CHARS.saturating_sub(note.chars().count()),
    );
    caption.body.push_str(&note);

    DetailView {
        caption,
        cover_url: detail.has_cover().then(|| detail.cover_url.clone()),
        downloads,
    }
}

/// Shorten the body (then the title) so the caption fits `max_chars`
pub fn fit_caption(caption: Caption, max_chars: usize) -> Caption {
    if caption.char_count() <= max_chars {
        return caption;
    }

    let title = truncate_chars(&caption.title, max_chars / 4);
    let budget = max_chars.saturating_sub(title.chars().count() + 2);
    let body = truncate_chars(&caption.body, budget);
    Caption { title, body }
}

/// Truncate to at most `max_chars` characters, marking the cut with an ellipsis
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(max_chars - 1).collect();
    truncated.push('…');
    truncated
}
