//! # Listing Parser Module
//!
//! Extracts result summaries and the next-page signal from a search listing.
//!
//! All knowledge of the listing markup lives in [`ListingMarkup`], so a change
//! in the site's HTML only touches this module. Malformed entries are dropped,
//! never defaulted, and parsing itself never fails.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use crate::models::{PageResult, ResultSummary};

/// Selectors and labels describing one site's listing markup
#[derive(Debug, Clone)]
pub struct ListingMarkup {
    /// One match per result entry
    pub container: Selector,
    pub title: Selector,
    pub author: Selector,
    /// Links inside a container that may carry the identifier
    pub link: Selector,
    /// Candidate elements for the next-page control
    pub next_control: Selector,
    /// Text of the next-page control
    pub next_label: String,
}

impl Default for ListingMarkup {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.clone(),
            title: DEFAULT_TITLE.clone(),
            author: DEFAULT_AUTHOR.clone(),
            link: DEFAULT_LINK.clone(),
            next_control: DEFAULT_NEXT_CONTROL.clone(),
            next_label: "Next".to_string(),
        }
    }
}

lazy_static! {
    static ref DEFAULT_CONTAINER: Selector =
        Selector::parse("a[href^='/md5/']").expect("Container selector should be valid");
    static ref DEFAULT_TITLE: Selector =
        Selector::parse("div.text-lg").expect("Title selector should be valid");
    static ref DEFAULT_AUTHOR: Selector =
        Selector::parse("div.italic").expect("Author selector should be valid");
    static ref DEFAULT_LINK: Selector = Selector::parse("a[href]").expect("Link selector should be valid");
    static ref DEFAULT_NEXT_CONTROL: Selector =
        Selector::parse("a").expect("Next control selector should be valid");
    /// Item detail path, the captured group is the content identifier
    static ref DETAIL_PATH: Regex =
        Regex::new(r"/md5/([0-9A-Za-z]+)(?:[/?#]|$)").expect("Detail path pattern should be valid");
}

/// Parse a listing page with the default markup description
pub fn parse_listing(markup: &str) -> PageResult {
    parse_listing_with(markup, &ListingMarkup::default())
}

/// Parse a listing page with an explicit markup description
pub fn parse_listing_with(markup: &str, layout: &ListingMarkup) -> PageResult {
    let document = Html::parse_document(markup);

    let mut items = Vec::new();
    for (position, container) in document.select(&layout.container).enumerate() {
        match extract_summary(container, layout) {
            Some(summary) => items.push(summary),
            None => trace!(position, "Skipping malformed listing entry"),
        }
    }

    let has_next_page = document
        .select(&layout.next_control)
        .any(|control| element_text(control) == layout.next_label);

    debug!(
        items = items.len(),
        has_next_page, "Listing page parsed"
    );

    PageResult {
        items,
        has_next_page,
    }
}

fn extract_summary(container: ElementRef<'_>, layout: &ListingMarkup) -> Option<ResultSummary> {
    let title = non_empty(element_text(container.select(&layout.title).next()?))?;
    let author = non_empty(element_text(container.select(&layout.author).next()?))?;
    let id = extract_identifier(container, layout)?;

    Some(ResultSummary { title, author, id })
}

/// First identifier found on the container itself or any link inside it
fn extract_identifier(container: ElementRef<'_>, layout: &ListingMarkup) -> Option<String> {
    std::iter::once(container)
        .chain(container.select(&layout.link))
        .filter_map(|link| link.value().attr("href"))
        .find_map(identifier_from_href)
}

/// Extract the content identifier from a link target such as `/md5/<hash>`
pub fn identifier_from_href(href: &str) -> Option<String> {
    DETAIL_PATH
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Text content with each text node trimmed and whitespace-only nodes dropped
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
