//! One complete bot run.
//!
//! `load history -> fetch -> parse -> select -> authenticate -> publish -> record`.
//! Each step only runs when the previous one succeeded; the first error ends
//! the run and is returned to the caller.

use log::info;
use rand::Rng;

use crate::config::BotConfig;
use crate::countries::{build_countries_client, fetch_countries, parse_countries, Country};
use crate::error::BotError;
use crate::history::{record_posted, History};
use crate::selector::pick_unposted_country;
use crate::twitter::{authenticate, publish, StatusUpdate};

/// What a successful run posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub country: Country,
    pub status: StatusUpdate,
}

/// Runs the bot once with the given configuration and random generator.
///
/// # Errors
///
/// Any [`BotError`]; nothing is published once an earlier step failed, and the
/// history is only appended to after a successful publish.
pub async fn run_bot<R: Rng + ?Sized>(
    config: &BotConfig,
    rng: &mut R,
) -> Result<RunOutcome, BotError> {
    info!("Starting CapitaisBot...");

    let history = History::load(&config.history_path)?;

    info!("Preparing request...");
    let countries_client = build_countries_client().map_err(|source| BotError::Fetch {
        url: config.country_api_url.clone(),
        source,
    })?;
    let response = fetch_countries(&countries_client, &config.country_api_url).await?;

    info!("Parsing data...");
    let countries = parse_countries(response).await?;

    let country = pick_unposted_country(&countries, &history, rng)?.clone();

    let client = authenticate(&config.credentials, &config.twitter_api_base_url).await?;
    let status = publish(&client, &country).await?;

    record_posted(&config.history_path, country.name())?;
    info!(
        "Recorded {} in {}",
        country.name(),
        config.history_path.display()
    );

    Ok(RunOutcome { country, status })
}
