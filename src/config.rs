//! # Configuration Module
//!
//! Site, fetch and bot settings. Values come from the environment (a `.env`
//! file is honoured through `dotenv` in `main`), with defaults matching the
//! public Anna's Archive deployment.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://annas-archive.org";
pub const DEFAULT_DOWNLOAD_HOST: &str = "downloads.annas-archive.org";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_RESULTS_PER_PAGE: usize = 10;
pub const DEFAULT_LANGUAGE: &str = "es";
pub const DEFAULT_KEEP_ALIVE_PORT: u16 = 5000;

/// Browser identity sent with every request to avoid trivial bot blocking
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Where the book index lives
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Site root, used for listing/detail URLs and relative cover paths
    pub base_url: Url,
    /// Only download links on this host are kept
    pub download_host: String,
    /// Expected entries per listing page. Informational only, the parser
    /// takes whatever the page returns.
    pub results_per_page: usize,
}

impl SiteConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid site base URL: {base_url}"))?;
        Ok(Self {
            base_url,
            ..Default::default()
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("Default base URL should be valid"),
            download_host: DEFAULT_DOWNLOAD_HOST.to_string(),
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Everything the binary needs to start
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram_token: String,
    pub site: SiteConfig,
    pub fetch: FetchConfig,
    /// Reply language for users whose Telegram language is unsupported
    pub default_language: String,
    /// Port of the keep-alive endpoint, `None` disables it
    pub keep_alive_port: Option<u16>,
}

impl BotConfig {
    /// Read the configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let telegram_token = env::var("TELEGRAM_BOT_TOKEN")
            .or_else(|_| env::var("TELEGRAM_TOKEN"))
            .context("TELEGRAM_BOT_TOKEN must be set")?;

        let mut site = match env::var("BOOKFINDER_BASE_URL") {
            Ok(base_url) => SiteConfig::new(&base_url)?,
            Err(_) => SiteConfig::default(),
        };
        if let Ok(host) = env::var("BOOKFINDER_DOWNLOAD_HOST") {
            site.download_host = host;
        }
        if let Some(per_page) = parse_var::<usize>("BOOKFINDER_RESULTS_PER_PAGE")? {
            site.results_per_page = per_page;
        }

        let mut fetch = FetchConfig::default();
        if let Some(secs) = parse_var::<u64>("BOOKFINDER_FETCH_TIMEOUT_SECS")? {
            fetch.timeout = Duration::from_secs(secs);
        }

        let default_language =
            env::var("BOOKFINDER_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string());

        let keep_alive_port = match parse_var::<u16>("PORT")? {
            Some(0) => None,
            Some(port) => Some(port),
            None => Some(DEFAULT_KEEP_ALIVE_PORT),
        };

        Ok(Self {
            telegram_token,
            site,
            fetch,
            default_language,
            keep_alive_port,
        })
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{name} has an invalid value: {raw}")),
        Err(_) => Ok(None),
    }
}
