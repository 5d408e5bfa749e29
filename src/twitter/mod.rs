//! Twitter/X API integration module.
//!
//! This module contains the publisher side of the bot: an OAuth 1.0a signed
//! client, account verification, and status composition and posting.

mod account;
mod api;
mod statuses;

// Re-export public API
pub use account::{authenticate, Account};
pub use api::TwitterClient;
pub use statuses::{compose_status, publish, PostedStatus, StatusUpdate, MAX_STATUS_CHARS};
