//! # Malalog
//!
//! A small multi-destination logger. Every message goes through one
//! dispatch pipeline: render, timestamp, then fan out to
//!
//! - **Console**: ANSI-colored lines on stdout, one color per channel
//! - **Telegram**: a bot `sendMessage` call with Markdown parsing
//! - **File**: one `[<timestamp>] <message>` line appended per call
//!
//! Sinks are picked once from the [`DispatcherConfig`]. Failures while
//! dispatching are reported on the console and never returned.
//!
//! ## Channels
//!
//! | Method             | Alias   | Color  |
//! |--------------------|---------|--------|
//! | `m` / `manja`      | `log`   | yellow |
//! | `p` / `pacha`      | `info`  | green  |
//! | `c` / `chuvapp`    | `error` | red    |
//! | `n` / `neela`      | `debug` | blue   |
//!
//! ```no_run
//! use malalog::prelude::*;
//!
//! # async fn example() -> malalog::Result<()> {
//! let logger = malalog::init(DispatcherConfig {
//!     telegram_bot_token: Some("123456:ABC-DEF".into()),
//!     telegram_chat_id: Some("-1001234567890".into()),
//!     file_path: Some("logs/app.log".into()),
//!     enable_console: true,
//! })?;
//!
//! logger.info("ready").await;
//! logger.error(malalog::template!("job ", 42, " failed")).await;
//! # Ok(())
//! # }
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, TelegramSender};
    pub use crate::core::{
        Channel, DispatcherBuilder, DispatcherConfig, DispatcherMetrics, LogDispatcher,
        LogRecord, LoggerError, Message, NotificationSender, Result, TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, FileAppender, TelegramSender};
pub use core::{
    Channel, DispatcherBuilder, DispatcherConfig, DispatcherMetrics, LogDispatcher, LogRecord,
    LoggerError, Message, NotificationSender, Result, TimestampFormat,
};

/// Create a dispatcher from `config`.
///
/// Equivalent to [`LogDispatcher::new`].
///
/// # Errors
///
/// Returns [`LoggerError::Filesystem`] if the log file or its directory
/// cannot be created.
pub fn init(config: DispatcherConfig) -> Result<LogDispatcher> {
    LogDispatcher::new(config)
}
