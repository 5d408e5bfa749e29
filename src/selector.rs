//! Random country selection.
//!
//! Draws a country uniformly at random, skipping countries without a capital
//! and countries already present in the history ledger. The random generator
//! is owned by the caller and seeded once per process.

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::countries::Country;
use crate::error::BotError;
use crate::history::History;

/// Random draws allowed per eligible country before falling back to a scan.
pub const DRAWS_PER_CANDIDATE: usize = 3;

/// Picks one country uniformly at random, ignoring the history.
///
/// Countries without a capital are never returned.
pub fn pick_country<'a, R: Rng + ?Sized>(
    countries: &'a [Country],
    rng: &mut R,
) -> Result<&'a Country, BotError> {
    pick_unposted_country(countries, &History::default(), rng)
}

/// Picks a country with a capital whose name is not in `history`.
///
/// Redraws at most [`DRAWS_PER_CANDIDATE`] times the number of eligible
/// countries. If every draw hits the history, the remaining unposted countries
/// are collected and one of them is chosen uniformly, so the call succeeds
/// whenever an unposted country exists.
///
/// # Errors
///
/// - [`BotError::NoCandidates`]: no country has a capital
/// - [`BotError::Exhausted`]: every eligible country is in the history
pub fn pick_unposted_country<'a, R: Rng + ?Sized>(
    countries: &'a [Country],
    history: &History,
    rng: &mut R,
) -> Result<&'a Country, BotError> {
    let eligible: Vec<&Country> = countries
        .iter()
        .filter(|c| c.first_capital().is_some())
        .collect();

    let skipped = countries.len() - eligible.len();
    if skipped > 0 {
        debug!("Skipping {} countries without a capital city", skipped);
    }

    if eligible.is_empty() {
        return Err(BotError::NoCandidates);
    }

    let max_draws = eligible.len() * DRAWS_PER_CANDIDATE;
    for _ in 0..max_draws {
        let candidate = eligible[rng.gen_range(0..eligible.len())];
        if !history.contains(candidate.name()) {
            info!("Selected country: {}", candidate.name());
            return Ok(candidate);
        }
        info!(
            "Country {} already tweeted, getting another one",
            candidate.name()
        );
    }

    let remaining: Vec<&Country> = eligible
        .iter()
        .copied()
        .filter(|c| !history.contains(c.name()))
        .collect();

    match remaining.choose(rng) {
        Some(&country) => {
            info!(
                "Selected country {} from {} remaining after {} draws",
                country.name(),
                remaining.len(),
                max_draws
            );
            Ok(country)
        }
        None => Err(BotError::Exhausted {
            eligible: eligible.len(),
        }),
    }
}
