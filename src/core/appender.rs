//! Appender trait for synchronous output destinations

use super::{error::Result, log_record::LogRecord};

pub trait Appender: Send + Sync {
    fn append(&self, line: &str, record: &LogRecord) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
