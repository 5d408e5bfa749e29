//! Error types for the capitais bot.
//!
//! Every step of a run returns a [`BotError`]; the binary decides the log
//! level and the process exit code from the variant.

use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds of a single bot run.
#[derive(Debug, Error)]
pub enum BotError {
    /// The countries API could not be reached, answered with a non-2xx status,
    /// or its body could not be read.
    #[error("failed to fetch countries from '{url}': {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The countries body was not a well-formed JSON array of countries.
    #[error("failed to decode countries response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Nothing in the countries list has a capital city to post.
    #[error("no country with a capital city is available for posting")]
    NoCandidates,

    /// Every eligible country is already in the history ledger.
    #[error("all {eligible} eligible countries have already been posted")]
    Exhausted { eligible: usize },

    /// A status was composed for a country without a capital city.
    #[error("country '{0}' has no capital city")]
    MissingCapital(String),

    /// Account verification failed, so no client is available for posting.
    #[error("account verification failed: {0}")]
    Authentication(String),

    /// The status update could not be published.
    #[error("failed to publish status: {0}")]
    Publish(String),

    /// The history ledger could not be read or appended to.
    #[error("history file '{}' is not accessible: {source}", .path.display())]
    History {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The periodic scheduler could not be created or started.
    #[error("scheduler error: {0}")]
    Scheduler(String),
}

impl BotError {
    /// Process exit code for this failure kind. Success is always 0.
    pub fn exit_code(&self) -> u8 {
        match self {
            BotError::Fetch { .. } => 2,
            BotError::Decode(_) => 3,
            BotError::NoCandidates | BotError::Exhausted { .. } => 4,
            BotError::MissingCapital(_) => 5,
            BotError::Authentication(_) => 6,
            BotError::Publish(_) => 7,
            BotError::History { .. } => 8,
            BotError::Scheduler(_) => 9,
        }
    }

    /// Exhaustion is an expected end state once every country has been posted.
    pub fn is_exhaustion(&self) -> bool {
        matches!(self, BotError::Exhausted { .. })
    }
}

impl From<tokio_cron_scheduler::JobSchedulerError> for BotError {
    fn from(e: tokio_cron_scheduler::JobSchedulerError) -> Self {
        BotError::Scheduler(e.to_string())
    }
}
