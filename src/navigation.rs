//! # Navigation Codec Module
//!
//! Pagination and detail intents travel inside inline keyboard callback data,
//! so every navigation step carries its whole state:
//!
//! - `page_{page}_{query}` for [`Intent::ShowPage`]
//! - `detail_{id}` for [`Intent::ShowDetail`]
//!
//! The free-form field is always last and decoding splits with a bounded
//! count, so delimiters inside a query or identifier survive the round trip.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DELIMITER: char = '_';
pub const PAGE_PREFIX: &str = "page";
pub const DETAIL_PREFIX: &str = "detail";

/// Telegram rejects callback data longer than this many bytes
pub const MAX_CALLBACK_DATA_BYTES: usize = 64;

/// What a navigation button asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    ShowPage { query: String, page: u32 },
    ShowDetail { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Unknown navigation token kind: {0}")]
    UnknownKind(String),
    #[error("Navigation token is missing the {0} field")]
    MissingField(&'static str),
    #[error("Invalid page number: {0}")]
    InvalidPage(String),
}

pub fn encode_page(query: &str, page: u32) -> String {
    format!("{PAGE_PREFIX}{DELIMITER}{page}{DELIMITER}{query}")
}

pub fn encode_detail(id: &str) -> String {
    format!("{DETAIL_PREFIX}{DELIMITER}{id}")
}

impl Intent {
    pub fn encode(&self) -> String {
        match self {
            Intent::ShowPage { query, page } => encode_page(query, *page),
            Intent::ShowDetail { id } => encode_detail(id),
        }
    }
}

/// Decode a token produced by [`encode_page`] or [`encode_detail`]
pub fn decode(token: &str) -> Result<Intent, DecodeError> {
    let (kind, rest) = token
        .split_once(DELIMITER)
        .ok_or_else(|| DecodeError::UnknownKind(token.to_string()))?;

    match kind {
        PAGE_PREFIX => {
            let mut fields = rest.splitn(2, DELIMITER);
            let page = fields.next().ok_or(DecodeError::MissingField("page"))?;
            let query = fields.next().ok_or(DecodeError::MissingField("query"))?;
            let page = page
                .parse::<u32>()
                .map_err(|_| DecodeError::InvalidPage(page.to_string()))?;
            Ok(Intent::ShowPage {
                query: query.to_string(),
                page,
            })
        }
        DETAIL_PREFIX => Ok(Intent::ShowDetail { id: rest.to_string() }),
        other => Err(DecodeError::UnknownKind(other.to_string())),
    }
}

/// Whether a token can be used as Telegram callback data
pub fn fits_callback_data(token: &str) -> bool {
    token.len() <= MAX_CALLBACK_DATA_BYTES
}
