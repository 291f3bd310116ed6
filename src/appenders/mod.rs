//! Sink implementations

pub mod console;
pub mod file;
pub mod telegram;

pub use console::ConsoleAppender;
pub use file::FileAppender;
pub use telegram::{TelegramSender, TELEGRAM_API_BASE};

// Re-export traits for convenience
pub use crate::core::{Appender, AsyncAppender, NotificationSender};
