//! OAuth authentication module for Twitter/X API integration.
//!
//! Requests to the v1.1 account and status endpoints are signed with OAuth 1.0a
//! User Context credentials (HMAC-SHA1). Signing itself is done by
//! `reqwest-oauth1`; this module only maps the bot's credentials onto it.

use reqwest_oauth1::Secrets;

use crate::config::Credentials;

/// Builds the OAuth 1.0a secrets for one signed request.
///
/// # Parameters
///
/// - `credentials`: Consumer key/secret of the app and access token/secret of the account
///
/// # Returns
///
/// A `Secrets` value borrowing from `credentials`, ready for `Client::oauth1`.
///
/// # Example
///
/// ```rust
/// use capitais_bot::config::Credentials;
/// use capitais_bot::oauth::build_oauth1_secrets;
///
/// let credentials = Credentials {
///     consumer_key: "key".into(),
///     consumer_secret: "secret".into(),
///     access_token: "token".into(),
///     access_token_secret: "token-secret".into(),
/// };
/// let _secrets = build_oauth1_secrets(&credentials);
/// ```
pub fn build_oauth1_secrets(credentials: &Credentials) -> Secrets<'_> {
    Secrets::new(
        credentials.consumer_key.as_str(),
        credentials.consumer_secret.as_str(),
    )
    .token(
        credentials.access_token.as_str(),
        credentials.access_token_secret.as_str(),
    )
}
