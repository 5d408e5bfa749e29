//! Countries API access.
//!
//! This module fetches the list of countries from a REST endpoint shaped like
//! `https://restcountries.com/v3.1/all` and decodes it into [`Country`] records.

use std::time::Duration;

use log::{debug, info};
use reqwest::{Client, Response};
use serde::{Deserialize, Deserializer};

use crate::error::BotError;

/// Client-side timeout of the countries request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(2);

/// User-Agent sent to the countries API.
pub const USER_AGENT: &str = "capitaisBot";

/// The `name` object of a country record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryName {
    pub common: String,
}

/// A country and its capital cities as returned by the countries API.
///
/// Other fields in the payload are ignored. `capital` may be empty, `null` or
/// absent for territories without a capital; all three decode as empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub capital: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Country {
    /// Builds a country record, mostly useful for tests and stubs.
    pub fn new(name: &str, capitals: &[&str]) -> Self {
        Self {
            name: CountryName {
                common: name.to_string(),
            },
            capital: capitals.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Common name of the country.
    pub fn name(&self) -> &str {
        &self.name.common
    }

    /// First listed capital city, if any.
    pub fn first_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }
}

/// Builds the HTTP client used for the countries API.
pub fn build_countries_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
}

/// Issues the GET request for the countries list.
///
/// Transport failures and non-2xx statuses are both reported as [`BotError::Fetch`].
/// The returned response still holds its body; [`parse_countries`] consumes it.
pub async fn fetch_countries(client: &Client, url: &str) -> Result<Response, BotError> {
    info!("Calling countries API at {}", url);

    let fetch_error = |source: reqwest::Error| BotError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(fetch_error)?;
    info!("Countries API responded with status: {}", response.status());

    response.error_for_status().map_err(fetch_error)
}

/// Reads the whole response body and decodes it into countries.
pub async fn parse_countries(response: Response) -> Result<Vec<Country>, BotError> {
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .map_err(|source| BotError::Fetch { url, source })?;
    debug!("Countries response body: {} bytes", body.len());

    decode_countries(&body)
}

/// Decodes a JSON array of countries.
///
/// No schema validation happens beyond the structural decode, so records
/// without a capital pass through.
pub fn decode_countries(body: &str) -> Result<Vec<Country>, BotError> {
    let countries: Vec<Country> = serde_json::from_str(body)?;
    info!("Parsed {} countries", countries.len());
    Ok(countries)
}
