//! Cronjob module for scheduled posting.
//!
//! The bot is normally started once per post by an external scheduler. When
//! `BOT_SCHEDULE` is set, this module keeps the process alive and runs the bot
//! on that cron expression instead.

use std::sync::Arc;

use log::{error, info, warn};
use rand::rngs::StdRng;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::bot::{run_bot, RunOutcome};
use crate::config::BotConfig;
use crate::error::BotError;

/// Runs one scheduled post and logs its outcome.
///
/// The generator lock is released when the run ends, whether it succeeded or
/// not, so a failed run never blocks the next tick.
pub async fn run_scheduled_post(
    config: &BotConfig,
    rng: &Mutex<StdRng>,
) -> Result<RunOutcome, BotError> {
    info!("Starting scheduled country post");
    let mut rng = rng.lock().await;
    let result = run_bot(config, &mut *rng).await;

    match &result {
        Ok(outcome) => {
            info!(
                "Scheduled post completed successfully: {}",
                outcome.status.text
            );
        }
        Err(e) if e.is_exhaustion() => {
            warn!("Scheduled post skipped: {}", e);
        }
        Err(e) => {
            error!("Scheduled post failed: {}", e);
        }
    }

    result
}

/// Creates a scheduler with one job that runs the bot on `schedule`.
///
/// The random generator is shared by every run of the job, so it is seeded
/// exactly once per process.
///
/// # Job Schedule
///
/// `schedule` uses the seven-field cron syntax of `tokio-cron-scheduler`:
/// seconds, minutes, hours, day of month, month, day of week, year.
/// For example `"0 0 12 * * * *"` posts every day at noon.
///
/// # Errors
///
/// [`BotError::Scheduler`] when the scheduler cannot be created or the cron
/// expression is invalid.
pub async fn start_capitals_cronjob(
    config: BotConfig,
    schedule: &str,
    rng: StdRng,
) -> Result<JobScheduler, BotError> {
    let sched = JobScheduler::new().await?;

    let config = Arc::new(config);
    let rng = Arc::new(Mutex::new(rng));

    sched
        .add(Job::new_async(schedule, move |_uuid, _l| {
            let config = Arc::clone(&config);
            let rng = Arc::clone(&rng);
            Box::pin(async move {
                // Errors are logged inside; the next tick runs regardless.
                let _ = run_scheduled_post(&config, &rng).await;
            })
        })?)
        .await?;

    info!("Cronjob scheduler configured to post a country on '{}'", schedule);
    Ok(sched)
}

/// Starts the scheduled posting and keeps it running until Ctrl+C.
pub async fn run_capitals_cronjob(
    config: BotConfig,
    schedule: &str,
    rng: StdRng,
) -> Result<(), BotError> {
    let mut sched = start_capitals_cronjob(config, schedule, rng).await?;
    sched.start().await?;

    info!("Cronjob scheduler started successfully");

    // Wait for Ctrl+C signal to gracefully shutdown
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| BotError::Scheduler(format!("failed to listen for Ctrl+C: {}", e)))?;
    info!("Received shutdown signal, stopping cronjob scheduler");

    sched.shutdown().await?;
    info!("Cronjob scheduler stopped");

    Ok(())
}
