//! # Catalog Data Model
//!
//! Value types produced by the listing and detail parsers. Every value is
//! rebuilt on each request and never cached.

use serde::{Deserialize, Serialize};

/// Title used when a detail page has no top-level heading
pub const TITLE_NOT_FOUND: &str = "Título no encontrado";

/// Description used when a detail page has no description container
pub const NO_DESCRIPTION: &str = "No hay descripción disponible.";

/// One entry of a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Entry title as shown on the listing
    pub title: String,
    /// Author line as shown on the listing
    pub author: String,
    /// Content hash addressing the catalog entry
    pub id: String,
}

impl ResultSummary {
    /// Last six characters of the identifier, used as a short visual tag
    pub fn short_code(&self) -> &str {
        let start = self
            .id
            .char_indices()
            .rev()
            .nth(5)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.id[start..]
    }
}

/// A page of search results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Entries in on-page (relevance) order
    pub items: Vec<ResultSummary>,
    /// Whether the listing shows a control to the following page
    pub has_next_page: bool,
}

impl PageResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A downloadable artifact of a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    /// Human readable format label (e.g. "EPUB")
    pub format: String,
    /// Absolute URL on the download host
    pub url: String,
}

/// Everything the detail page tells us about one catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub title: String,
    /// Absolute cover image URL, empty when the page has none
    pub cover_url: String,
    pub description: String,
    pub download_links: Vec<DownloadLink>,
}

impl ItemDetail {
    /// Build a detail record from independently extracted fields
    ///
    /// Missing fields get their documented defaults: [`TITLE_NOT_FOUND`],
    /// an empty cover URL and [`NO_DESCRIPTION`].
    pub fn from_parts(
        title: Option<String>,
        cover_url: Option<String>,
        description: Option<String>,
        download_links: Vec<DownloadLink>,
    ) -> Self {
        Self {
            title: title.unwrap_or_else(|| TITLE_NOT_FOUND.to_string()),
            cover_url: cover_url.unwrap_or_default(),
            description: description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            download_links,
        }
    }

    pub fn has_cover(&self) -> bool {
        !self.cover_url.is_empty()
    }
}
