//! # Bookfinder Telegram Bot
//!
//! A Telegram bot that searches an online book index and hands out download
//! links. Search results are paginated with inline buttons whose callback
//! data carries the navigation state, so nothing is stored between updates.

pub mod bot;
pub mod catalog;
pub mod config;
pub mod conversation;
pub mod detail_parser;
pub mod errors;
pub mod fetcher;
pub mod keep_alive;
pub mod listing_parser;
pub mod localization;
pub mod models;
pub mod navigation;
pub mod presenter;
