//! Status operations for Twitter API.
//!
//! This module composes the country status text and posts it through the
//! v1.1 `statuses/update` endpoint.

use log::{debug, error, info};
use reqwest::Method;
use serde::Deserialize;

use crate::countries::Country;
use crate::error::BotError;

use super::api::{sanitize_for_logging, TwitterClient};

/// Twitter's status length limit, in characters.
pub const MAX_STATUS_CHARS: usize = 280;

/// The outbound status text for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub text: String,
}

/// The created status as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostedStatus {
    #[serde(default)]
    pub id_str: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Formats `"Country: {name}  -  Capital City: {first capital}"`.
///
/// # Errors
///
/// [`BotError::MissingCapital`] when the country lists no capital.
pub fn compose_status(country: &Country) -> Result<StatusUpdate, BotError> {
    let capital = country
        .first_capital()
        .ok_or_else(|| BotError::MissingCapital(country.name().to_string()))?;

    Ok(StatusUpdate {
        text: format!(
            "Country: {}  -  Capital City: {}",
            country.name(),
            capital
        ),
    })
}

impl TwitterClient {
    /// Posts `text` with `POST /1.1/statuses/update.json` and no extra options.
    ///
    /// # Errors
    ///
    /// Fails without sending anything when the text is empty or longer than
    /// [`MAX_STATUS_CHARS`]; otherwise on transport or API errors.
    pub async fn update_status(
        &self,
        text: &str,
    ) -> Result<PostedStatus, Box<dyn std::error::Error + Send + Sync>> {
        info!("Starting status update for text: '{}'", text);

        let length = text.chars().count();
        if length == 0 {
            return Err("Status text cannot be empty".into());
        }
        if length > MAX_STATUS_CHARS {
            return Err(format!(
                "Status is too long: {} characters (max {})",
                length, MAX_STATUS_CHARS
            )
            .into());
        }

        let url = self.endpoint("/1.1/statuses/update.json");
        let response_text = self
            .send_signed(Method::POST, &url, &[], &[("status", text)], "update_status")
            .await?;
        debug!(
            "Created status: {}",
            sanitize_for_logging(&response_text, 500)
        );

        let posted: PostedStatus = serde_json::from_str(&response_text)?;
        Ok(posted)
    }
}

/// Publishes the status for `country`.
pub async fn publish(client: &TwitterClient, country: &Country) -> Result<StatusUpdate, BotError> {
    let status = compose_status(country)?;

    match client.update_status(&status.text).await {
        Ok(posted) => {
            info!("Success tweeting!");
            info!("{:?}", posted);
            Ok(status)
        }
        Err(e) => {
            error!("Error tweeting!");
            Err(BotError::Publish(e.to_string()))
        }
    }
}
