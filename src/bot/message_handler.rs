//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::debug;

use crate::catalog::Catalog;
use crate::conversation::{handle_event, ChatEvent};
use crate::localization::{t_args_lang, t_lang};

use super::responder::show_screen;

/// Command name without the leading slash and any `@botname` suffix
fn command_name(text: &str) -> Option<&str> {
    let command = text.strip_prefix('/')?.split_whitespace().next()?;
    Some(command.split('@').next().unwrap_or(command))
}

async fn handle_command(bot: &Bot, msg: &Message, command: &str, language_code: Option<&str>) -> Result<()> {
    match command {
        "start" => {
            bot.send_message(msg.chat.id, t_lang("welcome", language_code))
                .parse_mode(ParseMode::Html)
                .await?;
        }
        "help" => {
            bot.send_message(msg.chat.id, t_lang("help", language_code))
                .parse_mode(ParseMode::Html)
                .await?;
        }
        other => {
            debug!(user_id = %msg.chat.id, command = %other, "Ignoring unknown command");
        }
    }
    Ok(())
}

async fn handle_search_text(
    bot: &Bot,
    msg: &Message,
    catalog: &Catalog,
    query: &str,
    language_code: Option<&str>,
) -> Result<()> {
    debug!(user_id = %msg.chat.id, query = %query, "Received search query from user");

    let status = bot
        .send_message(
            msg.chat.id,
            t_args_lang("searching", &[("query", query)], language_code),
        )
        .await?;

    let screen = handle_event(catalog, ChatEvent::Text(query.to_string())).await;
    show_screen(bot, msg.chat.id, status.id, screen, language_code).await
}

pub async fn message_handler(bot: Bot, msg: Message, catalog: Arc<Catalog>) -> Result<()> {
    // Extract user's language code from Telegram
    let language_code = msg
        .from
        .as_ref()
        .and_then(|user| user.language_code.as_deref());

    let Some(text) = msg.text() else {
        debug!(user_id = %msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    match command_name(text) {
        Some(command) => handle_command(&bot, &msg, command, language_code).await,
        None => handle_search_text(&bot, &msg, &catalog, text, language_code).await,
    }
}
