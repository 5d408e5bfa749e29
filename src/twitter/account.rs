//! Account verification for Twitter API.

use log::{debug, error, info};
use reqwest::Method;
use serde::Deserialize;

use crate::config::Credentials;
use crate::error::BotError;

use super::api::TwitterClient;

/// The subset of the verified user object the bot logs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub name: String,
    #[serde(default)]
    pub screen_name: Option<String>,
    #[serde(default)]
    pub id_str: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl TwitterClient {
    /// Calls `GET /1.1/account/verify_credentials.json` with `include_email=true`
    /// and `skip_status=true`.
    pub async fn verify_credentials(
        &self,
    ) -> Result<Account, Box<dyn std::error::Error + Send + Sync>> {
        let url = self.endpoint("/1.1/account/verify_credentials.json");
        let query = [("include_email", "true"), ("skip_status", "true")];

        let response_text = self
            .send_signed(Method::GET, &url, &query, &[], "verify_credentials")
            .await?;
        let account: Account = serde_json::from_str(&response_text)?;
        Ok(account)
    }
}

/// Builds a signed client and confirms the credentials against the account endpoint.
///
/// # Errors
///
/// Returns [`BotError::Authentication`] when the verification request fails;
/// no client is handed out in that case.
pub async fn authenticate(
    credentials: &Credentials,
    base_url: &str,
) -> Result<TwitterClient, BotError> {
    info!("Getting Twitter client");
    debug!("Credentials: {:?}", credentials);

    let client = TwitterClient::new(credentials, base_url);

    match client.verify_credentials().await {
        Ok(account) => {
            match &account.screen_name {
                Some(screen_name) => {
                    info!("User's ACCOUNT: {} (@{})", account.name, screen_name)
                }
                None => info!("User's ACCOUNT: {}", account.name),
            }
            Ok(client)
        }
        Err(e) => {
            error!("Error getting Twitter client: {}", e);
            Err(BotError::Authentication(e.to_string()))
        }
    }
}
