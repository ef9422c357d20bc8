//! # Detail Parser Module
//!
//! Extracts title, cover, description and download links from an item's
//! detail page. Each field is an independent optional extraction; missing
//! fields fall back to the defaults of [`ItemDetail::from_parts`].

use lazy_static::lazy_static;
use scraper::{Html, Selector};
use tracing::{debug, trace};
use url::Url;

use crate::config::SiteConfig;
use crate::listing_parser::element_text;
use crate::models::{DownloadLink, ItemDetail};

lazy_static! {
    static ref TITLE: Selector = Selector::parse("h1").expect("Title selector should be valid");
    static ref COVER: Selector =
        Selector::parse("img.w-full").expect("Cover selector should be valid");
    static ref DESCRIPTION: Selector = Selector::parse("div.js-md5-search-result-description")
        .expect("Description selector should be valid");
    static ref DOWNLOAD: Selector =
        Selector::parse("a.js-download-link").expect("Download selector should be valid");
}

/// Parse a detail page
pub fn parse_detail(markup: &str, site: &SiteConfig) -> ItemDetail {
    let document = Html::parse_document(markup);

    let title = extract_title(&document);
    let cover_url = extract_cover(&document, &site.base_url);
    let description = extract_description(&document);
    let download_links = extract_download_links(&document, &site.download_host);

    debug!(
        has_title = title.is_some(),
        has_cover = cover_url.is_some(),
        has_description = description.is_some(),
        download_links = download_links.len(),
        "Detail page parsed"
    );

    ItemDetail::from_parts(title, cover_url, description, download_links)
}

fn extract_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty())
}

fn extract_cover(document: &Html, base_url: &Url) -> Option<String> {
    let src = document
        .select(&COVER)
        .next()?
        .value()
        .attr("src")
        .map(str::trim)
        .filter(|s| !s.is_empty())?;

    base_url.join(src).ok().map(String::from)
}

fn extract_description(document: &Html) -> Option<String> {
    document
        .select(&DESCRIPTION)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty())
}

fn extract_download_links(document: &Html, download_host: &str) -> Vec<DownloadLink> {
    document
        .select(&DOWNLOAD)
        .filter_map(|button| {
            let href = button.value().attr("href")?.trim();
            if !is_on_host(href, download_host) {
                trace!(href = %href, "Ignoring link outside the download host");
                return None;
            }
            Some(DownloadLink {
                format: format_label(&element_text(button)),
                url: href.to_string(),
            })
        })
        .collect()
}

/// Whether `href` is an absolute URL whose host is exactly `host`
pub fn is_on_host(href: &str, host: &str) -> bool {
    Url::parse(href)
        .ok()
        .and_then(|url| url.host_str().map(|h| h.eq_ignore_ascii_case(host)))
        .unwrap_or(false)
}

/// Format label: the button text before the first parenthesis
pub fn format_label(text: &str) -> String {
    text.split('(').next().unwrap_or_default().trim().to_string()
}
