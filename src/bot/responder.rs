//! Responder module: shows a conversation [`Screen`] in a Telegram chat

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{InputFile, MessageId, ParseMode};
use tracing::{debug, warn};
use url::Url;

use crate::conversation::Screen;
use crate::localization::{t_args_lang, t_lang};
use crate::presenter::{detail_view, results_view};

use super::ui_builder::{create_download_keyboard, create_results_keyboard, format_caption};

/// Replace the status message `message_id` with `screen`
pub async fn show_screen(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    screen: Screen,
    language_code: Option<&str>,
) -> Result<()> {
    debug!(user_id = %chat_id, state = ?screen.state(), "Showing screen");

    match screen {
        Screen::Results {
            query,
            page,
            result,
        } => {
            let view = results_view(&query, page, &result, language_code);
            bot.edit_message_text(chat_id, message_id, view.text.clone())
                .reply_markup(create_results_keyboard(&view))
                .await?;
        }
        Screen::NoResults { query, .. } => {
            bot.edit_message_text(
                chat_id,
                message_id,
                t_args_lang("no-results", &[("query", query.as_str())], language_code),
            )
            .await?;
        }
        Screen::Detail { detail, .. } => {
            let view = detail_view(&detail, language_code);
            let caption = format_caption(&view.caption);
            let keyboard = create_download_keyboard(&view);

            // The detail replaces the results list, there is no way back
            if let Err(e) = bot.delete_message(chat_id, message_id).await {
                warn!(user_id = %chat_id, error = %e, "Failed to delete results message");
            }

            if let Some(cover) = view.cover_url.as_deref().and_then(|c| Url::parse(c).ok()) {
                let mut request = bot
                    .send_photo(chat_id, InputFile::url(cover))
                    .caption(caption.clone())
                    .parse_mode(ParseMode::Html);
                if let Some(keyboard) = keyboard.clone() {
                    request = request.reply_markup(keyboard);
                }
                match request.await {
                    Ok(_) => return Ok(()),
                    Err(e) => {
                        warn!(user_id = %chat_id, error = %e, "Failed to send cover, sending text only");
                    }
                }
            }

            let mut request = bot
                .send_message(chat_id, caption)
                .parse_mode(ParseMode::Html);
            if let Some(keyboard) = keyboard {
                request = request.reply_markup(keyboard);
            }
            request.await?;
        }
        Screen::DetailUnavailable { .. } => {
            bot.edit_message_text(chat_id, message_id, t_lang("details-failed", language_code))
                .await?;
        }
        Screen::InvalidAction(_) => {
            bot.edit_message_text(chat_id, message_id, t_lang("invalid-action", language_code))
                .await?;
        }
    }

    Ok(())
}
