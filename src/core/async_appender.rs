//! Async collaborator traits for the remote and file sinks

use super::{error::Result, log_record::LogRecord};
use async_trait::async_trait;

/// Trait for asynchronous record appenders
///
/// Implementations take `&self` so one appender can serve overlapping
/// dispatches; any serialization is the implementation's concern.
///
/// # Example
///
/// ```no_run
/// use malalog::core::{AsyncAppender, LogRecord, Result};
/// use async_trait::async_trait;
///
/// struct MyAsyncAppender;
///
/// #[async_trait]
/// impl AsyncAppender for MyAsyncAppender {
///     async fn append(&self, line: &str, record: &LogRecord) -> Result<()> {
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "my_async_appender"
///     }
/// }
/// ```
#[async_trait]
pub trait AsyncAppender: Send + Sync {
    /// Append an already formatted line for `record`
    async fn append(&self, line: &str, record: &LogRecord) -> Result<()>;

    /// Get the appender name
    fn name(&self) -> &str;
}

/// Capability to deliver a text message to a remote chat.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Send `text` as a Markdown-flavored chat message
    async fn send_message(&self, text: &str) -> Result<()>;

    fn name(&self) -> &str;
}
