//! Basic dispatcher usage example
//!
//! Logs on every channel to the console and a file. Set `TELEGRAM_BOT_TOKEN`
//! and `TELEGRAM_CHAT_ID` to also forward each line to Telegram.
//!
//! Run with: cargo run --example basic_usage

use malalog::prelude::*;
use malalog::{c, template};

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Malalog - Basic Usage Example ===\n");

    let logger = malalog::init(DispatcherConfig {
        telegram_bot_token: std::env::var("TELEGRAM_BOT_TOKEN").ok(),
        telegram_chat_id: std::env::var("TELEGRAM_CHAT_ID").ok(),
        file_path: Some("logs/basic_usage.log".into()),
        enable_console: true,
    })?;

    println!("\n1. Canonical channels:");
    logger.m("Manja: yellow").await;
    logger.p("Pacha: green").await;
    logger.c("Chuvapp: red").await;
    logger.n("Neela: blue").await;

    println!("\n2. Aliases:");
    logger.log("log is manja").await;
    logger.info("info is pacha").await;
    logger.error("error is chuvapp").await;
    logger.debug("debug is neela").await;

    println!("\n3. Templates and format macros:");
    let user = "alice";
    logger.info(template!("User ", user, " signed in")).await;
    c!(logger, "Request failed with status {}", 503).await;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
