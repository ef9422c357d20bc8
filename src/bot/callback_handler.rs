//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::conversation::{handle_intent, Screen};
use crate::localization::{t_args_lang, t_lang};
use crate::navigation::{decode, Intent};

use super::responder::show_screen;

/// Handle callback queries from inline keyboards
pub async fn callback_handler(
    bot: Bot,
    q: teloxide::types::CallbackQuery,
    catalog: Arc<Catalog>,
) -> Result<()> {
    debug!(user_id = %q.from.id, data = ?q.data, "Received callback query from user");

    // Answer right away so the client stops showing the loading state
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(user_id = %q.from.id, error = %e, "Failed to answer callback query");
    }

    let Some(msg) = &q.message else {
        debug!(user_id = %q.from.id, "Callback query without an accessible message");
        return Ok(());
    };
    let chat_id = msg.chat().id;
    let message_id = msg.id();
    let language_code = q.from.language_code.as_deref();
    let data = q.data.as_deref().unwrap_or("");

    let intent = match decode(data) {
        Ok(intent) => intent,
        Err(e) => {
            warn!(user_id = %q.from.id, data = %data, error = %e, "Invalid navigation token");
            return show_screen(&bot, chat_id, message_id, Screen::InvalidAction(e), language_code)
                .await;
        }
    };

    let status = match &intent {
        Intent::ShowPage { query, page } => t_args_lang(
            "searching-page",
            &[("query", query.as_str()), ("page", &page.to_string())],
            language_code,
        ),
        Intent::ShowDetail { .. } => t_lang("fetching-details", language_code),
    };
    bot.edit_message_text(chat_id, message_id, status).await?;

    let screen = handle_intent(&catalog, intent).await;
    show_screen(&bot, chat_id, message_id, screen, language_code).await
}
