//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `message_handler`: Handles commands and search queries
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `responder`: Shows search results and book details in the chat
//! - `ui_builder`: Creates keyboards and formats captions

pub mod callback_handler;
pub mod message_handler;
pub mod responder;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;
