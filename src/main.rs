//! # Capitais Bot
//!
//! Posts a random country and its capital city to Twitter/X.
//!
//! The binary runs the bot once and exits, which suits an external scheduler
//! such as cron. Setting `BOT_SCHEDULE` keeps it running on an in-process
//! schedule instead.
//!
//! # Logging
//!
//! The application uses the `env_logger` crate. Log levels can be controlled
//! via the `RUST_LOG` environment variable and default to `info`.
//!
//! # Example Usage
//!
//! ```bash
//! # Post once
//! COUNTRY_API_URL=https://restcountries.com/v3.1/all cargo run
//!
//! # Post every day at noon
//! BOT_SCHEDULE="0 0 12 * * * *" cargo run
//!
//! # Run with debug logging
//! RUST_LOG=debug cargo run
//! ```
//!
//! # Exit Codes
//!
//! `0` on success, otherwise the code of the failure kind (see `BotError::exit_code`).

use std::process::ExitCode;

use capitais_bot::{run_bot, run_capitals_cronjob, BotConfig, BotError};
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logging system
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BotConfig::from_env();
    let mut rng = StdRng::from_entropy();

    let result = match config.schedule.clone() {
        Some(schedule) => run_capitals_cronjob(config, &schedule, rng).await,
        None => run_bot(&config, &mut rng).await.map(|outcome| {
            info!("Posted: {}", outcome.status.text);
        }),
    };

    match result {
        Ok(()) => {
            info!("CapitaisBot finished");
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(&e),
    }
}

/// Logs a failed run and maps it to its exit code.
fn report_failure(e: &BotError) -> ExitCode {
    if e.is_exhaustion() {
        warn!("Nothing left to post: {}", e);
    } else {
        error!("CapitaisBot failed: {}", e);
    }
    ExitCode::from(e.exit_code())
}
