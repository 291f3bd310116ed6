//! Logging macros for ergonomic message formatting.
//!
//! The channel macros expand to a dispatch call, so the result still has to
//! be awaited, just like calling the channel method directly.
//!
//! # Examples
//!
//! ```no_run
//! use malalog::prelude::*;
//! use malalog::{p, template};
//!
//! # async fn example() -> malalog::Result<()> {
//! let logger = LogDispatcher::new(DispatcherConfig::default())?;
//!
//! // With format arguments
//! let port = 8080;
//! p!(logger, "Server listening on port {}", port).await;
//!
//! // Template form: literal fragments with values between them
//! let user = "alice";
//! logger.info(template!("User ", user, " logged in")).await;
//! # Ok(())
//! # }
//! ```

/// Build a template [`Message`](crate::Message) from alternating literal
/// fragments and values.
///
/// The call starts and ends with a string literal; every value in between
/// is rendered through `Display`.
///
/// # Examples
///
/// ```
/// use malalog::template;
///
/// let id = 7;
/// let msg = template!("job ", id, " done in ", 1.5, "s");
/// assert_eq!(msg.render(), "job 7 done in 1.5s");
/// ```
#[macro_export]
macro_rules! template {
    ($first:literal $(, $value:expr, $fragment:literal)*) => {
        $crate::Message::Template {
            fragments: ::std::vec![
                ::std::string::String::from($first)
                $(, ::std::string::String::from($fragment))*
            ],
            values: ::std::vec![
                $(::std::option::Option::Some(::std::string::ToString::to_string(&$value))),*
            ],
        }
    };
}

/// Dispatch a formatted message on an explicit channel.
///
/// # Examples
///
/// ```no_run
/// # use malalog::prelude::*;
/// # async fn example(logger: LogDispatcher) {
/// use malalog::dispatch;
/// dispatch!(logger, Channel::Neela, "cache size: {}", 512).await;
/// # }
/// ```
#[macro_export]
macro_rules! dispatch {
    ($logger:expr, $channel:expr, $($arg:tt)+) => {
        $logger.dispatch($channel, ::std::format!($($arg)+))
    };
}

/// Dispatch a formatted message on the manja (yellow) channel.
#[macro_export]
macro_rules! m {
    ($logger:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Channel::Manja, $($arg)+)
    };
}

/// Dispatch a formatted message on the pacha (green) channel.
#[macro_export]
macro_rules! p {
    ($logger:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Channel::Pacha, $($arg)+)
    };
}

/// Dispatch a formatted message on the chuvapp (red) channel.
///
/// # Examples
///
/// ```no_run
/// # use malalog::prelude::*;
/// # async fn example(logger: LogDispatcher) {
/// use malalog::c;
/// let code = 500;
/// c!(logger, "upstream returned {}", code).await;
/// # }
/// ```
#[macro_export]
macro_rules! c {
    ($logger:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Channel::Chuvapp, $($arg)+)
    };
}

/// Dispatch a formatted message on the neela (blue) channel.
#[macro_export]
macro_rules! n {
    ($logger:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Channel::Neela, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::Message;

    #[test]
    fn test_template_single_fragment() {
        let msg = template!("no values");
        assert_eq!(
            msg,
            Message::Template {
                fragments: vec!["no values".to_string()],
                values: vec![],
            }
        );
    }

    #[test]
    fn test_template_trailing_value() {
        let name = String::from("bob");
        let msg = template!("hi ", name, "");
        assert_eq!(msg.render(), "hi bob");
        // value is borrowed, not moved
        assert_eq!(name, "bob");
    }
}
