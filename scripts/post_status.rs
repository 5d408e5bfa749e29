//! Status Posting Script
//!
//! Posts a status by hand with the bot's OAuth 1.0a credentials. Useful to
//! check a fresh set of credentials before scheduling the bot.
//!
//! Reads `CONSUMER_KEY`, `CONSUMER_SECRET`, `ACCESS_TOKEN`, `ACCESS_TOKEN_SECRET`
//! and optionally `TWITTER_API_BASE_URL` from the environment.

use std::io::{self, Write};

use capitais_bot::config::{Credentials, DEFAULT_TWITTER_API_BASE_URL};
use capitais_bot::twitter::{authenticate, MAX_STATUS_CHARS};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    println!("🐦 Capitais Bot Status Posting Tool");
    println!("===================================");

    let credentials = Credentials::from_env();
    if credentials.consumer_key.is_empty() || credentials.access_token.is_empty() {
        println!("❌ CONSUMER_KEY and ACCESS_TOKEN must be set!");
        return Err("Missing OAuth credentials".into());
    }

    let base_url = std::env::var("TWITTER_API_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_TWITTER_API_BASE_URL.to_string());

    // Get status message from user
    print!("📝 Enter your status message: ");
    io::stdout().flush()?;
    let mut status_text = String::new();
    io::stdin().read_line(&mut status_text)?;
    let status_text = status_text.trim();

    if status_text.is_empty() {
        println!("❌ Status message cannot be empty!");
        return Err("Status message is required".into());
    }

    let length = status_text.chars().count();
    if length > MAX_STATUS_CHARS {
        println!(
            "❌ Status is too long! {} characters (max {})",
            length, MAX_STATUS_CHARS
        );
        return Err("Status exceeds character limit".into());
    }

    println!("📏 Status length: {} characters", length);

    println!("\n🔐 Verifying credentials...");
    let client = authenticate(&credentials, &base_url).await?;

    println!("🚀 Posting your status...");
    match client.update_status(status_text).await {
        Ok(posted) => {
            println!("\n🎉 Success! Your status has been posted.");
            if let Some(id) = posted.id_str {
                println!("🔗 https://twitter.com/i/status/{}", id);
            }
        }
        Err(e) => {
            println!("\n💥 Failed to post status: {}", e);
            return Err(e);
        }
    }

    Ok(())
}
