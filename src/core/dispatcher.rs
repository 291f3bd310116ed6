//! Main dispatcher implementation

use super::{
    appender::Appender,
    async_appender::{AsyncAppender, NotificationSender},
    channel::Channel,
    config::DispatcherConfig,
    error::Result,
    log_record::LogRecord,
    message::Message,
    metrics::DispatcherMetrics,
    timestamp::TimestampFormat,
};
use crate::appenders::{ConsoleAppender, FileAppender, TelegramSender};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Fans each message out to the console, Telegram and a log file.
///
/// Which sinks are active is decided once from the [`DispatcherConfig`] and
/// never changes afterwards. Sink failures during a dispatch are reported on
/// the console error stream and counted in [`DispatcherMetrics`], but never
/// returned to the caller.
///
/// # Example
///
/// ```no_run
/// use malalog::prelude::*;
///
/// # async fn example() -> malalog::Result<()> {
/// let logger = LogDispatcher::new(DispatcherConfig {
///     file_path: Some("logs/app.log".into()),
///     ..Default::default()
/// })?;
///
/// logger.info("service started").await;
/// logger.error(malalog::template!("request ", 42, " failed")).await;
/// # Ok(())
/// # }
/// ```
pub struct LogDispatcher {
    config: DispatcherConfig,
    timestamp_format: TimestampFormat,
    console: ConsoleAppender,
    notifier: Option<Arc<dyn NotificationSender>>,
    file: Option<FileAppender>,
    metrics: Arc<DispatcherMetrics>,
}

impl LogDispatcher {
    /// Initialize from a configuration, preparing the log file if one is set.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Filesystem`](super::LoggerError::Filesystem) if
    /// the log file or its directory cannot be created.
    pub fn new(config: DispatcherConfig) -> Result<Self> {
        DispatcherBuilder::new().config(config).build()
    }

    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    pub fn metrics(&self) -> &DispatcherMetrics {
        &self.metrics
    }

    pub fn is_console_enabled(&self) -> bool {
        self.config.enable_console
    }

    pub fn is_telegram_enabled(&self) -> bool {
        self.notifier.is_some()
    }

    pub fn is_file_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_ref().map(FileAppender::path)
    }

    /// Render, timestamp and fan out one message on `channel`.
    ///
    /// The console line is written first. The Telegram submission and the
    /// file append then run concurrently and are both awaited.
    pub async fn dispatch(&self, channel: Channel, message: impl Into<Message>) {
        let record = LogRecord::new(channel, message.into().render());
        let line = record.format_line(&self.timestamp_format);

        debug!(channel = %channel, "dispatching record");

        if self.config.enable_console {
            // Terminal write failures are not reported on the console.
            if let Err(e) = self.console.append(&line, &record) {
                trace!(appender = self.console.name(), error = %e, "console write failed");
            }
        }

        tokio::join!(self.notify(&line), self.append_to_file(&line, &record));

        self.metrics.record_dispatched();
    }

    /// Dispatch on the channel registered under `name`.
    ///
    /// Accepts short names, long names and aliases: `m`, `manja`, `log`,
    /// `p`, `pacha`, `info`, `c`, `chuvapp`, `error`, `n`, `neela`, `debug`.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::UnknownChannel`](super::LoggerError::UnknownChannel)
    /// for any other name. Sink failures are still never returned.
    pub async fn dispatch_named(&self, name: &str, message: impl Into<Message>) -> Result<()> {
        let channel: Channel = name.parse()?;
        self.dispatch(channel, message).await;
        Ok(())
    }

    async fn notify(&self, line: &str) {
        let Some(notifier) = &self.notifier else {
            return;
        };

        match notifier.send_message(line).await {
            Ok(()) => {
                self.metrics.record_notification_sent();
            }
            Err(e) => {
                self.metrics.record_notification_failed();
                warn!(sender = notifier.name(), error = %e, "notification delivery failed");
                self.console
                    .report_error(&format!("Failed to send message to Telegram: {}", e.reason()));
            }
        }
    }

    async fn append_to_file(&self, line: &str, record: &LogRecord) {
        let Some(file) = &self.file else {
            return;
        };

        match file.append(line, record).await {
            Ok(()) => {
                self.metrics.record_file_written();
            }
            Err(e) => {
                self.metrics.record_file_failed();
                warn!(
                    appender = file.name(),
                    path = %file.path().display(),
                    error = %e,
                    "file append failed"
                );
                self.console
                    .report_error(&format!("Failed to write to log file: {}", e.reason()));
            }
        }
    }

    /// Flush the console writers
    pub fn flush(&self) -> Result<()> {
        self.console.flush()
    }

    /// Manja (yellow)
    pub async fn m(&self, message: impl Into<Message>) {
        self.dispatch(Channel::Manja, message).await;
    }

    /// Pacha (green)
    pub async fn p(&self, message: impl Into<Message>) {
        self.dispatch(Channel::Pacha, message).await;
    }

    /// Chuvapp (red)
    pub async fn c(&self, message: impl Into<Message>) {
        self.dispatch(Channel::Chuvapp, message).await;
    }

    /// Neela (blue)
    pub async fn n(&self, message: impl Into<Message>) {
        self.dispatch(Channel::Neela, message).await;
    }

    #[inline]
    pub async fn manja(&self, message: impl Into<Message>) {
        self.m(message).await;
    }

    #[inline]
    pub async fn pacha(&self, message: impl Into<Message>) {
        self.p(message).await;
    }

    #[inline]
    pub async fn chuvapp(&self, message: impl Into<Message>) {
        self.c(message).await;
    }

    #[inline]
    pub async fn neela(&self, message: impl Into<Message>) {
        self.n(message).await;
    }

    /// Alias for [`m`](Self::m)
    #[inline]
    pub async fn log(&self, message: impl Into<Message>) {
        self.m(message).await;
    }

    /// Alias for [`p`](Self::p)
    #[inline]
    pub async fn info(&self, message: impl Into<Message>) {
        self.p(message).await;
    }

    /// Alias for [`c`](Self::c)
    #[inline]
    pub async fn error(&self, message: impl Into<Message>) {
        self.c(message).await;
    }

    /// Alias for [`n`](Self::n)
    #[inline]
    pub async fn debug(&self, message: impl Into<Message>) {
        self.n(message).await;
    }
}

/// Builder for constructing a LogDispatcher with a fluent API
///
/// # Example
/// ```no_run
/// use malalog::prelude::*;
///
/// let logger = LogDispatcher::builder()
///     .telegram("123456:ABC-DEF", "-1001234567890")
///     .file_path("logs/app.log")
///     .enable_console(true)
///     .timestamp_format(TimestampFormat::Iso8601Micros)
///     .build()
///     .expect("log file should be writable");
/// ```
pub struct DispatcherBuilder {
    config: DispatcherConfig,
    timestamp_format: TimestampFormat,
    console: Option<ConsoleAppender>,
    notifier: Option<Arc<dyn NotificationSender>>,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self {
            config: DispatcherConfig::default(),
            timestamp_format: TimestampFormat::default(),
            console: None,
            notifier: None,
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: DispatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Set both Telegram credentials
    #[must_use = "builder methods return a new value"]
    pub fn telegram(mut self, bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        self.config.telegram_bot_token = Some(bot_token.into());
        self.config.telegram_chat_id = Some(chat_id.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.file_path = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn enable_console(mut self, enable: bool) -> Self {
        self.config.enable_console = enable;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Use a custom console appender (colors off, captured writers)
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: ConsoleAppender) -> Self {
        self.console = Some(console);
        self
    }

    /// Replace the Telegram transport.
    ///
    /// The sender is only used when both credentials are configured.
    #[must_use = "builder methods return a new value"]
    pub fn notifier(mut self, notifier: Arc<dyn NotificationSender>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build the dispatcher, printing one status line per optional sink.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Filesystem`](super::LoggerError::Filesystem) if
    /// the log file cannot be prepared, or
    /// [`LoggerError::InvalidConfiguration`](super::LoggerError::InvalidConfiguration)
    /// for a custom timestamp pattern chrono cannot parse.
    pub fn build(self) -> Result<LogDispatcher> {
        self.timestamp_format.validate()?;

        let config = self.config;
        let console = self.console.unwrap_or_default();

        let notifier = match config.telegram_credentials() {
            Some((token, chat_id)) => Some(self.notifier.unwrap_or_else(|| {
                Arc::new(TelegramSender::new(token, chat_id)) as Arc<dyn NotificationSender>
            })),
            None => None,
        };

        if notifier.is_some() {
            console.status(true, "Telegram logging is enabled.");
        } else {
            console.status(false, "Telegram logging is disabled.");
        }

        let file = match &config.file_path {
            Some(path) if config.file_enabled() => {
                let appender = FileAppender::new(path)?;
                console.status(
                    true,
                    &format!(
                        "File logging is enabled. Logs will be written to {}",
                        path.display()
                    ),
                );
                Some(appender)
            }
            _ => {
                console.status(false, "File logging is disabled.");
                None
            }
        };

        debug!(
            console = config.enable_console,
            telegram = notifier.is_some(),
            file = file.is_some(),
            "dispatcher initialized"
        );

        Ok(LogDispatcher {
            config,
            timestamp_format: self.timestamp_format,
            console,
            notifier,
            file,
            metrics: Arc::new(DispatcherMetrics::new()),
        })
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
