//! Error types for the logger system

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Log file or its directory could not be prepared at initialization
    #[error("Filesystem error for '{}': {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Remote notification could not be delivered
    #[error("Notification delivery failed: {message}")]
    NotificationDelivery { message: String },

    /// Appending a line to the log file failed
    #[error("Failed to append to '{}': {source}", .path.display())]
    FileAppend {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Channel name did not match any known channel or alias
    #[error("Unknown channel: '{name}'")]
    UnknownChannel { name: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error, e.g. a console writer failing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// Create a filesystem error for the given path
    pub fn filesystem(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::Filesystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a notification delivery error
    pub fn notification(message: impl Into<String>) -> Self {
        LoggerError::NotificationDelivery {
            message: message.into(),
        }
    }

    /// Create a file append error for the given path
    pub fn file_append(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::FileAppend {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an unknown channel error
    pub fn unknown_channel(name: impl Into<String>) -> Self {
        LoggerError::UnknownChannel { name: name.into() }
    }

    /// Short human-readable reason, used in console diagnostics
    pub fn reason(&self) -> String {
        match self {
            LoggerError::Filesystem { source, .. }
            | LoggerError::FileAppend { source, .. }
            | LoggerError::Io(source) => source.to_string(),
            LoggerError::NotificationDelivery { message } => message.clone(),
            LoggerError::InvalidConfiguration { message, .. } => message.clone(),
            LoggerError::UnknownChannel { .. } => self.to_string(),
        }
    }
}
