//! Dispatcher configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options recognized at initialization.
///
/// Deserializes from both snake_case and camelCase field names, with every
/// field optional:
///
/// ```
/// use malalog::DispatcherConfig;
///
/// let config: DispatcherConfig = serde_json::from_str(
///     r#"{"telegramBotToken": "123:abc", "telegramChatId": "42", "enableConsole": false}"#,
/// ).unwrap();
///
/// assert!(config.telegram_enabled());
/// assert!(!config.file_enabled());
/// assert!(!config.enable_console);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    #[serde(alias = "telegramBotToken", skip_serializing_if = "Option::is_none")]
    pub telegram_bot_token: Option<String>,

    #[serde(alias = "telegramChatId", skip_serializing_if = "Option::is_none")]
    pub telegram_chat_id: Option<String>,

    #[serde(alias = "filePath", skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,

    #[serde(alias = "enableConsole")]
    pub enable_console: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            telegram_bot_token: None,
            telegram_chat_id: None,
            file_path: None,
            enable_console: true,
        }
    }
}

impl DispatcherConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Both credentials must be present and non-empty.
    pub fn telegram_enabled(&self) -> bool {
        self.telegram_credentials().is_some()
    }

    /// `(token, chat_id)` when the remote sink is active
    pub fn telegram_credentials(&self) -> Option<(&str, &str)> {
        match (&self.telegram_bot_token, &self.telegram_chat_id) {
            (Some(token), Some(chat_id)) if !token.is_empty() && !chat_id.is_empty() => {
                Some((token.as_str(), chat_id.as_str()))
            }
            _ => None,
        }
    }

    pub fn file_enabled(&self) -> bool {
        matches!(&self.file_path, Some(path) if !path.as_os_str().is_empty())
    }
}
