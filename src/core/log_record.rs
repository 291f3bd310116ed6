//! Log record structure

use super::channel::Channel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};

/// One rendered dispatch: message text plus the time it was captured.
///
/// Records live only for the duration of a dispatch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub channel: Channel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    pub fn new(channel: Channel, message: impl Into<String>) -> Self {
        Self {
            channel,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// `[<timestamp>] <message>`, without a trailing newline
    pub fn format_line(&self, format: &TimestampFormat) -> String {
        format!("[{}] {}", format.format(&self.timestamp), self.message)
    }
}
