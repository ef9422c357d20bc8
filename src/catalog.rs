//! # Catalog Module
//!
//! Search and detail orchestration: build the upstream URL, fetch it, parse it.
//!
//! `try_search`/`try_lookup` report the full [`CatalogError`]; `search` and
//! `lookup` collapse every failure into `None` for the chat layer, which shows
//! the same message for an empty and a failed search.

use tracing::{info, warn};
use url::Url;

use crate::config::{FetchConfig, SiteConfig};
use crate::detail_parser::parse_detail;
use crate::errors::{CatalogError, FetchError};
use crate::fetcher::Fetcher;
use crate::listing_parser::parse_listing;
use crate::models::{ItemDetail, PageResult};

/// Sort order requested from the listing endpoint
const SORT_ORDER: &str = "relevant";

/// Entry point to the book index
#[derive(Debug, Clone)]
pub struct Catalog {
    fetcher: Fetcher,
    site: SiteConfig,
}

impl Catalog {
    pub fn new(site: SiteConfig, fetch: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher: Fetcher::new(fetch)?,
            site,
        })
    }

    /// `{base}/search?q={query}&page={page}&sort=relevant`
    pub fn search_url(&self, query: &str, page: u32) -> Result<Url, FetchError> {
        let mut url = self.site.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.site.base_url.to_string()))?
            .pop_if_empty()
            .push("search");
        url.query_pairs_mut()
            .clear()
            .append_pair("q", query)
            .append_pair("page", &page.to_string())
            .append_pair("sort", SORT_ORDER);
        Ok(url)
    }

    /// `{base}/md5/{id}`
    pub fn detail_url(&self, id: &str) -> Result<Url, FetchError> {
        let mut url = self.site.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.site.base_url.to_string()))?
            .pop_if_empty()
            .extend(["md5", id]);
        url.set_query(None);
        Ok(url)
    }

    /// Search the index, reporting why nothing came back
    pub async fn try_search(&self, query: &str, page: u32) -> Result<PageResult, CatalogError> {
        let url = self.search_url(query, page)?;
        info!(query = %query, page, url = %url, "Searching catalog");

        let markup = self.fetcher.fetch(url.as_str()).await?;
        let result = tokio::task::spawn_blocking(move || parse_listing(&markup))
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        if result.is_empty() {
            return Err(CatalogError::EmptyResult {
                query: query.to_string(),
                page,
            });
        }

        info!(
            query = %query,
            page,
            results = result.items.len(),
            has_next_page = result.has_next_page,
            "Search completed"
        );
        Ok(result)
    }

    /// Search the index; any failure or an empty page is `None`
    pub async fn search(&self, query: &str, page: u32) -> Option<PageResult> {
        match self.try_search(query, page).await {
            Ok(result) => Some(result),
            Err(e) => {
                warn!(
                    query = %query,
                    page,
                    kind = %e.kind(),
                    timeout = e.is_timeout(),
                    error = %e,
                    "Search produced no result"
                );
                None
            }
        }
    }

    /// Fetch one entry's detail page, reporting failures
    pub async fn try_lookup(&self, id: &str) -> Result<ItemDetail, CatalogError> {
        let url = self.detail_url(id)?;
        info!(id = %id, url = %url, "Looking up catalog entry");

        let markup = self.fetcher.fetch(url.as_str()).await?;
        let site = self.site.clone();
        let detail = tokio::task::spawn_blocking(move || parse_detail(&markup, &site))
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        info!(
            id = %id,
            download_links = detail.download_links.len(),
            "Lookup completed"
        );
        Ok(detail)
    }

    /// Fetch one entry's detail page; any failure is `None`
    pub async fn lookup(&self, id: &str) -> Option<ItemDetail> {
        match self.try_lookup(id).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                warn!(
                    id = %id,
                    kind = %e.kind(),
                    timeout = e.is_timeout(),
                    error = %e,
                    "Lookup produced no result"
                );
                None
            }
        }
    }
}
