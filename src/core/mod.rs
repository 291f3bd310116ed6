//! Core dispatcher types and traits

pub mod appender;
pub mod async_appender;
pub mod channel;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod log_record;
pub mod message;
pub mod metrics;
pub mod timestamp;

pub use appender::Appender;
pub use async_appender::{AsyncAppender, NotificationSender};
pub use channel::Channel;
pub use config::DispatcherConfig;
pub use dispatcher::{DispatcherBuilder, LogDispatcher};
pub use error::{LoggerError, Result};
pub use log_record::LogRecord;
pub use message::Message;
pub use metrics::DispatcherMetrics;
pub use timestamp::TimestampFormat;
