//! Core Twitter API utilities.
//!
//! This module contains the OAuth 1.0a signed HTTP client shared by the
//! account and status operations. Query and form parameters are passed to
//! `reqwest-oauth1` separately so that both are covered by the signature.

use log::{debug, error, info};
use reqwest::{Client, Method};
use reqwest_oauth1::OAuthClientProvider;

use crate::config::Credentials;
use crate::oauth::build_oauth1_secrets;

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
///
/// Truncation counts characters, so multi-byte text such as "Brasília" is never split.
pub(crate) fn sanitize_for_logging(text: &str, max_chars: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_chars {
        let truncated: String = sanitized.chars().take(max_chars).collect();
        format!(
            "{}... [truncated, {} total bytes]",
            truncated,
            text.len()
        )
    } else {
        sanitized
    }
}

/// Twitter/X API client authenticated with OAuth 1.0a User Context credentials.
///
/// Requests carry no explicit timeout and rely on the transport defaults.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    http: Client,
    credentials: Credentials,
    base_url: String,
}

impl TwitterClient {
    /// Creates a client for `base_url` (e.g. `https://api.twitter.com`).
    pub fn new(credentials: &Credentials, base_url: &str) -> Self {
        Self {
            http: Client::new(),
            credentials: credentials.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL of an API path such as `/1.1/statuses/update.json`.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a signed request and returns the response body of a 2xx answer.
    ///
    /// # Parameters
    ///
    /// - `method`: `GET` or `POST`
    /// - `url`: Endpoint URL without query string
    /// - `query`: Query parameters (signed)
    /// - `form_params`: Form body parameters (signed); an empty slice sends no body
    /// - `operation_name`: Human-readable name for the operation (for logging)
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The API response body on success
    /// - `Err(Box<dyn std::error::Error + Send + Sync>)`: On signing, transport or API errors
    pub(crate) async fn send_signed(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, &str)],
        form_params: &[(&str, &str)],
        operation_name: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        info!("Making signed request for operation: {}", operation_name);
        debug!("Request: {} {}", method, url);
        debug!("Request headers: Authorization: OAuth [REDACTED]");

        let client = self
            .http
            .clone()
            .oauth1(build_oauth1_secrets(&self.credentials));

        let mut request_builder = if method == Method::GET {
            client.get(url)
        } else if method == Method::POST {
            client.post(url)
        } else {
            return Err(format!(
                "Unsupported method {} for operation '{}'",
                method, operation_name
            )
            .into());
        };

        if !query.is_empty() {
            request_builder = request_builder.query(&query);
        }
        if !form_params.is_empty() {
            request_builder = request_builder.form(&form_params);
        }

        let response = request_builder.send().await.map_err(|e| {
            format!(
                "Signed request for operation '{}' failed: {}",
                operation_name, e
            )
        })?;
        let status = response.status();
        info!(
            "Received response with status: {} for operation: {}",
            status, operation_name
        );

        let response_text = response.text().await?;

        if status.is_success() {
            debug!(
                "Response summary for '{}': {} bytes received",
                operation_name,
                response_text.len()
            );
            return Ok(response_text);
        }

        error!("Operation '{}' failed - Status: {}", operation_name, status);
        debug!(
            "Error response for '{}': {}",
            operation_name,
            sanitize_for_logging(&response_text, 200)
        );
        Err(format!(
            "Twitter API error for operation '{}' ({}): {}",
            operation_name,
            status,
            sanitize_for_logging(&response_text, 200)
        )
        .into())
    }
}
