//! UI Builder module for creating keyboards and formatting messages

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::utils::html;
use tracing::warn;
use url::Url;

use crate::presenter::{ButtonAction, ButtonDescriptor, Caption, DetailView, ResultsView};

fn to_button(descriptor: &ButtonDescriptor) -> Option<InlineKeyboardButton> {
    match &descriptor.action {
        ButtonAction::Callback(token) => Some(InlineKeyboardButton::callback(
            descriptor.label.clone(),
            token.clone(),
        )),
        ButtonAction::Url(url) => match Url::parse(url) {
            Ok(url) => Some(InlineKeyboardButton::url(descriptor.label.clone(), url)),
            Err(e) => {
                warn!(url = %url, error = %e, "Skipping button with an invalid URL");
                None
            }
        },
    }
}

/// One result per row, previous/next together on the last row
pub fn create_results_keyboard(view: &ResultsView) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = view
        .results
        .iter()
        .filter_map(to_button)
        .map(|button| vec![button])
        .collect();

    let navigation: Vec<InlineKeyboardButton> =
        view.navigation.iter().filter_map(to_button).collect();
    if !navigation.is_empty() {
        rows.push(navigation);
    }

    InlineKeyboardMarkup::new(rows)
}

/// One download button per row, `None` when there is nothing to download
pub fn create_download_keyboard(view: &DetailView) -> Option<InlineKeyboardMarkup> {
    let rows: Vec<Vec<InlineKeyboardButton>> = view
        .downloads
        .iter()
        .filter_map(to_button)
        .map(|button| vec![button])
        .collect();

    if rows.is_empty() {
        None
    } else {
        Some(InlineKeyboardMarkup::new(rows))
    }
}

/// HTML caption with a bold title
pub fn format_caption(caption: &Caption) -> String {
    format!(
        "<b>{}</b>\n\n{}",
        html::escape(&caption.title),
        html::escape(&caption.body)
    )
}
