//! # Conversation Module
//!
//! Turns inbound chat events into catalog calls and describes the outcome.
//!
//! There is no session store: a results screen knows its query and page only
//! because the navigation tokens on its buttons carry them.
//!
//! ```text
//! Idle -> Searching -> ResultsShown -> ResultsShown (page navigation)
//!                                   -> DetailShown  (detail selection)
//!                                   -> Idle         (new query)
//! ```

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::models::{ItemDetail, PageResult};
use crate::navigation::{decode, DecodeError, Intent};

/// First page of every new search
pub const FIRST_PAGE: u32 = 1;

/// Something the user did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// Free text, treated as a new query
    Text(String),
    /// Callback data of a pressed navigation button
    Navigation(String),
}

/// Where a conversation stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationState {
    Idle,
    Searching { query: String, page: u32 },
    ResultsShown { query: String, page: u32 },
    DetailShown { id: String },
}

impl ConversationState {
    /// Whether the conversation may move from `self` to `next`
    pub fn can_transition_to(&self, next: &ConversationState) -> bool {
        use ConversationState::*;
        match (self, next) {
            (Idle, Searching { .. }) => true,
            // A search either lists results or falls back to idle
            (Searching { .. }, ResultsShown { .. }) | (Searching { .. }, Idle) => true,
            (ResultsShown { query, .. }, Searching { query: next_query, .. }) => {
                query == next_query
            }
            (ResultsShown { .. }, ResultsShown { .. }) => true,
            (ResultsShown { .. }, DetailShown { .. }) | (ResultsShown { .. }, Idle) => true,
            _ => false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ConversationState::DetailShown { .. })
    }
}

/// Outcome of handling one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Results {
        query: String,
        page: u32,
        result: PageResult,
    },
    /// The search failed or came back empty
    NoResults { query: String, page: u32 },
    Detail { id: String, detail: ItemDetail },
    DetailUnavailable { id: String },
    /// The callback data could not be decoded
    InvalidAction(DecodeError),
}

impl Screen {
    /// State the conversation is in once this screen is shown
    pub fn state(&self) -> ConversationState {
        match self {
            Screen::Results { query, page, .. } => ConversationState::ResultsShown {
                query: query.clone(),
                page: *page,
            },
            Screen::Detail { id, .. } => ConversationState::DetailShown { id: id.clone() },
            Screen::NoResults { .. } | Screen::DetailUnavailable { .. } | Screen::InvalidAction(_) => {
                ConversationState::Idle
            }
        }
    }
}

impl ChatEvent {
    /// Decode what the event asks for
    pub fn intent(&self) -> Result<Intent, DecodeError> {
        match self {
            ChatEvent::Text(text) => Ok(Intent::ShowPage {
                query: text.clone(),
                page: FIRST_PAGE,
            }),
            ChatEvent::Navigation(token) => decode(token),
        }
    }
}

/// Handle one chat event against the catalog
pub async fn handle_event(catalog: &Catalog, event: ChatEvent) -> Screen {
    match event.intent() {
        Ok(intent) => handle_intent(catalog, intent).await,
        Err(e) => {
            warn!(event = ?event, error = %e, "Discarding undecodable navigation token");
            Screen::InvalidAction(e)
        }
    }
}

/// Run the catalog call an intent asks for
pub async fn handle_intent(catalog: &Catalog, intent: Intent) -> Screen {
    let screen = match intent {
        Intent::ShowPage { query, page } => match catalog.search(&query, page).await {
            Some(result) => Screen::Results {
                query,
                page,
                result,
            },
            None => Screen::NoResults { query, page },
        },
        Intent::ShowDetail { id } => match catalog.lookup(&id).await {
            Some(detail) => Screen::Detail { id, detail },
            None => Screen::DetailUnavailable { id },
        },
    };
    let state = screen.state();
    debug!(state = ?state, terminal = state.is_terminal(), "Conversation moved");
    screen
}
