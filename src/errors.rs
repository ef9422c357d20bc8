//! # Error Types Module
//!
//! Failure taxonomy of the fetch/parse pipeline. Orchestrators collapse these
//! into a single "no result" outcome for the chat layer, but they are kept
//! distinct here so callers can tell a failed search from an empty one.

use thiserror::Error;

/// Errors raised by the HTTP fetcher
#[derive(Debug, Error)]
pub enum FetchError {
    /// Timeout, refused connection or interrupted body
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
    /// Upstream answered with a non-2xx status
    #[error("HTTP status error: {0}")]
    HttpStatus(u16),
    /// The URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The HTTP client could not be constructed
    #[error("Client initialization error: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Network(e) if e.is_timeout())
    }
}

/// Coarse classification used for logging and user feedback decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    HttpStatus,
    ParseShape,
    EmptyResult,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "network"),
            ErrorKind::HttpStatus => write!(f, "http_status"),
            ErrorKind::ParseShape => write!(f, "parse_shape"),
            ErrorKind::EmptyResult => write!(f, "empty_result"),
        }
    }
}

/// Errors raised by the search and detail orchestrators
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The parser could not run to completion
    #[error("Parse error: {0}")]
    Parse(String),
    /// The listing page held no usable entry
    #[error("No results for \"{query}\" on page {page}")]
    EmptyResult { query: String, page: u32 },
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Fetch(FetchError::HttpStatus(_)) => ErrorKind::HttpStatus,
            CatalogError::Fetch(_) => ErrorKind::Network,
            CatalogError::Parse(_) => ErrorKind::ParseShape,
            CatalogError::EmptyResult { .. } => ErrorKind::EmptyResult,
        }
    }

    /// Whether the upstream did not answer within the fetch timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, CatalogError::Fetch(e) if e.is_timeout())
    }
}
