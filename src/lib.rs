//! # Capitais Bot Library
//!
//! A Rust bot that picks a random country from a REST countries API and posts
//! it, with its capital city, as a Twitter/X status update using OAuth 1.0a
//! User Context authentication. Posted countries are tracked in a local
//! ledger so the same country is not posted twice.
//!
//! ## Features
//!
//! - Countries fetch with a 2 second timeout and a custom User-Agent
//! - Uniform random selection that skips already posted countries
//! - OAuth 1.0a (HMAC-SHA1) signed account verification and status updates
//! - Append-only history file
//! - Optional in-process cron schedule
//!
//! ## Configuration
//!
//! - `ACCESS_TOKEN`, `ACCESS_TOKEN_SECRET`, `CONSUMER_KEY`, `CONSUMER_SECRET`: OAuth 1.0a credentials
//! - `COUNTRY_API_URL`: countries endpoint, e.g. `https://restcountries.com/v3.1/all`
//! - `TWITTER_API_BASE_URL`: Twitter API host (defaults to `https://api.twitter.com`)
//! - `HISTORY_FILE`: ledger path (defaults to `data/TweetedCountries.txt`)
//! - `BOT_SCHEDULE`: cron expression; when unset the bot runs once

pub mod bot;
pub mod config;
pub mod countries;
pub mod cronjob;
pub mod error;
pub mod history;
pub mod oauth;
pub mod selector;
pub mod twitter;

// Re-export commonly used types and functions
pub use bot::{run_bot, RunOutcome};
pub use config::{BotConfig, Credentials};
pub use countries::{decode_countries, fetch_countries, parse_countries, Country};
pub use cronjob::{run_capitals_cronjob, run_scheduled_post, start_capitals_cronjob};
pub use error::BotError;
pub use history::{record_posted, History};
pub use oauth::build_oauth1_secrets;
pub use selector::{pick_country, pick_unposted_country};
pub use twitter::{authenticate, compose_status, publish, StatusUpdate, TwitterClient};
