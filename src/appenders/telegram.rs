//! Telegram notification sender
//!
//! Posts each record line to the Bot API `sendMessage` method.

use crate::core::{LoggerError, NotificationSender, Result};
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, instrument};

/// Public Bot API endpoint
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Sends messages to one chat through a Telegram bot.
///
/// # Example
///
/// ```no_run
/// use malalog::appenders::TelegramSender;
/// use malalog::core::NotificationSender;
///
/// # async fn example() -> malalog::Result<()> {
/// let sender = TelegramSender::new("123456:ABC-DEF", "-1001234567890");
/// sender.send_message("*deploy* finished").await?;
/// # Ok(())
/// # }
/// ```
pub struct TelegramSender {
    client: reqwest::Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramSender {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: TELEGRAM_API_BASE.to_string(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Point the sender at a different API host, e.g. a local mock server
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Use a preconfigured HTTP client (proxy, timeouts, TLS settings)
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// `<api_base>/bot<token>/sendMessage`
    pub fn endpoint(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.bot_token
        )
    }
}

#[async_trait]
impl NotificationSender for TelegramSender {
    #[instrument(skip(self, text), fields(chat_id = %self.chat_id, len = text.len()))]
    async fn send_message(&self, text: &str) -> Result<()> {
        let payload = json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });

        let response = self
            .client
            .post(self.endpoint())
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request to Telegram failed");
                LoggerError::notification(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            debug!("Message delivered to Telegram");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, "Telegram rejected message");
        Err(LoggerError::notification(format!(
            "status {}, body: {}",
            status, body
        )))
    }

    fn name(&self) -> &str {
        "telegram"
    }
}
