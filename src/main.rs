use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bookfinder::bot;
use bookfinder::catalog::Catalog;
use bookfinder::config::BotConfig;
use bookfinder::keep_alive;
use bookfinder::localization::init_localization;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging, JSON lines when BOOKFINDER_LOG_JSON is set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var_os("BOOKFINDER_LOG_JSON").is_some() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Starting Bookfinder Telegram Bot");

    let config = BotConfig::from_env()?;
    init_localization(&config.default_language)?;

    info!(
        base_url = %config.site.base_url,
        download_host = %config.site.download_host,
        timeout_secs = config.fetch.timeout.as_secs(),
        "Catalog configured"
    );
    let catalog = Arc::new(Catalog::new(config.site.clone(), &config.fetch)?);

    if let Some(port) = config.keep_alive_port {
        tokio::spawn(async move {
            if let Err(e) = keep_alive::serve(port).await {
                error!(port, error = %e, "Keep-alive server stopped");
            }
        });
    }

    // Initialize the bot
    let bot = Bot::new(config.telegram_token);

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(bot::message_handler))
        .branch(Update::filter_callback_query().endpoint(bot::callback_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![catalog])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Bot stopped");
    Ok(())
}
