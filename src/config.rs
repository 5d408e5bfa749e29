//! Configuration module for the capitais bot.
//!
//! This module contains configuration structures and environment variable handling
//! for the countries API and the Twitter/X OAuth 1.0a credentials.

use log::{debug, info, warn};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Default location of the posted-countries ledger, relative to the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "data/TweetedCountries.txt";

/// Default Twitter API host used for account verification and status updates.
pub const DEFAULT_TWITTER_API_BASE_URL: &str = "https://api.twitter.com";

/// OAuth 1.0a User Context credentials for the Twitter/X account.
///
/// All four values are opaque secrets. They are loaded once per run and never
/// modified afterwards. `Debug` output is masked.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// The Consumer Key (API key) of the Twitter app
    pub consumer_key: String,
    /// The Consumer Secret (API secret) of the Twitter app
    pub consumer_secret: String,
    /// The Access Token of the posting account
    pub access_token: String,
    /// The Access Token Secret of the posting account
    pub access_token_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &mask_secret(&self.consumer_key))
            .field("consumer_secret", &mask_secret(&self.consumer_secret))
            .field("access_token", &mask_secret(&self.access_token))
            .field("access_token_secret", &mask_secret(&self.access_token_secret))
            .finish()
    }
}

impl Credentials {
    /// Loads the four credentials from `CONSUMER_KEY`, `CONSUMER_SECRET`,
    /// `ACCESS_TOKEN` and `ACCESS_TOKEN_SECRET`.
    ///
    /// Missing variables become empty strings; authentication reports the failure later.
    pub fn from_env() -> Self {
        info!("Getting Twitter credentials from environment");
        Self {
            consumer_key: read_secret("CONSUMER_KEY"),
            consumer_secret: read_secret("CONSUMER_SECRET"),
            access_token: read_secret("ACCESS_TOKEN"),
            access_token_secret: read_secret("ACCESS_TOKEN_SECRET"),
        }
    }
}

/// Full runtime configuration of the bot.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// OAuth 1.0a credentials of the posting account
    pub credentials: Credentials,
    /// URL returning the JSON array of countries
    pub country_api_url: String,
    /// Base URL of the Twitter API (no trailing slash)
    pub twitter_api_base_url: String,
    /// Path of the posted-countries ledger
    pub history_path: PathBuf,
    /// Cron expression for scheduled mode; `None` means a single run
    pub schedule: Option<String>,
}

impl BotConfig {
    /// Creates a new `BotConfig` from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ACCESS_TOKEN`, `ACCESS_TOKEN_SECRET`, `CONSUMER_KEY`, `CONSUMER_SECRET`: OAuth 1.0a credentials
    /// - `COUNTRY_API_URL`: countries endpoint (e.g. `https://restcountries.com/v3.1/all`)
    /// - `TWITTER_API_BASE_URL`: optional, defaults to `https://api.twitter.com`
    /// - `HISTORY_FILE`: optional, defaults to `data/TweetedCountries.txt`
    /// - `BOT_SCHEDULE`: optional cron expression enabling scheduled mode
    ///
    /// This never fails. Absent values are passed on as empty strings so that the
    /// HTTP request or the account verification is what reports them.
    pub fn from_env() -> Self {
        info!("Loading bot configuration from environment variables");

        let credentials = Credentials::from_env();

        let country_api_url = env::var("COUNTRY_API_URL").unwrap_or_else(|_| {
            warn!("COUNTRY_API_URL is not set, the countries request will fail");
            String::new()
        });
        debug!("Countries API URL: {}", country_api_url);

        let twitter_api_base_url = env::var("TWITTER_API_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_TWITTER_API_BASE_URL.to_string());

        let history_path = env::var("HISTORY_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE));

        let schedule = get_schedule();

        Self {
            credentials,
            country_api_url,
            twitter_api_base_url,
            history_path,
            schedule,
        }
    }
}

/// Reads the `BOT_SCHEDULE` cron expression, if any.
///
/// # Returns
///
/// - `Some(String)`: A non-empty schedule, e.g. `"0 0 12 * * * *"`
/// - `None`: The variable is unset or blank and the bot runs once
pub fn get_schedule() -> Option<String> {
    env::var("BOT_SCHEDULE")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn read_secret(name: &str) -> String {
    match env::var(name) {
        Ok(value) => {
            info!(
                "Found {} environment variable with length: {}",
                name,
                value.len()
            );
            debug!("{} (masked): {}", name, mask_secret(&value));
            if value.is_empty() {
                warn!("{} is empty", name);
            }
            value
        }
        Err(_) => {
            warn!("{} environment variable is not set", name);
            String::new()
        }
    }
}

/// Masks a secret for logging, keeping at most a short prefix and suffix.
///
/// Works on characters so that non-ASCII secrets never split a code point.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let len = chars.len();

    if len == 0 {
        return String::new();
    }

    let prefix: String = chars[..len.min(8)].iter().collect();
    if len > 16 {
        let suffix: String = chars[len - 8..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else if len > 8 {
        format!("{}...", prefix)
    } else {
        let short: String = chars[..len.min(2)].iter().collect();
        format!("{}...", short)
    }
}
