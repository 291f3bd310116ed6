//! Channel definitions

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LoggerError;

/// A named, color-coded logging stream.
///
/// Every channel is reachable under a short name, a long name and a
/// semantic alias:
///
/// | Channel   | Short | Long      | Alias   | Color  |
/// |-----------|-------|-----------|---------|--------|
/// | `Manja`   | `m`   | `manja`   | `log`   | yellow |
/// | `Pacha`   | `p`   | `pacha`   | `info`  | green  |
/// | `Chuvapp` | `c`   | `chuvapp` | `error` | red    |
/// | `Neela`   | `n`   | `neela`   | `debug` | blue   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Manja,
    Pacha,
    Chuvapp,
    Neela,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Manja,
        Channel::Pacha,
        Channel::Chuvapp,
        Channel::Neela,
    ];

    pub fn short_name(&self) -> &'static str {
        match self {
            Channel::Manja => "m",
            Channel::Pacha => "p",
            Channel::Chuvapp => "c",
            Channel::Neela => "n",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            Channel::Manja => "manja",
            Channel::Pacha => "pacha",
            Channel::Chuvapp => "chuvapp",
            Channel::Neela => "neela",
        }
    }

    pub fn alias(&self) -> &'static str {
        match self {
            Channel::Manja => "log",
            Channel::Pacha => "info",
            Channel::Chuvapp => "error",
            Channel::Neela => "debug",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Channel::Manja => Color::Yellow,
            Channel::Pacha => Color::Green,
            Channel::Chuvapp => Color::Red,
            Channel::Neela => Color::Blue,
        }
    }

    /// Resolve any of the twelve exposed names (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "m" | "manja" | "log" => Some(Channel::Manja),
            "p" | "pacha" | "info" => Some(Channel::Pacha),
            "c" | "chuvapp" | "error" => Some(Channel::Chuvapp),
            "n" | "neela" | "debug" => Some(Channel::Neela),
            _ => None,
        }
    }

    /// All names this channel answers to: short, long, alias.
    pub fn names(&self) -> [&'static str; 3] {
        [self.short_name(), self.long_name(), self.alias()]
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

impl FromStr for Channel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::from_name(s).ok_or_else(|| LoggerError::unknown_channel(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves_back() {
        for channel in Channel::ALL {
            for name in channel.names() {
                assert_eq!(Channel::from_name(name), Some(channel), "name {}", name);
            }
        }
    }

    #[test]
    fn test_aliases_map_to_canonical() {
        assert_eq!("log".parse::<Channel>().unwrap(), Channel::Manja);
        assert_eq!("info".parse::<Channel>().unwrap(), Channel::Pacha);
        assert_eq!("error".parse::<Channel>().unwrap(), Channel::Chuvapp);
        assert_eq!("debug".parse::<Channel>().unwrap(), Channel::Neela);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Channel::Manja.color(), Color::Yellow);
        assert_eq!(Channel::Pacha.color(), Color::Green);
        assert_eq!(Channel::Chuvapp.color(), Color::Red);
        assert_eq!(Channel::Neela.color(), Color::Blue);
    }

    #[test]
    fn test_unknown_name() {
        assert!(Channel::from_name("purple").is_none());
        assert!(Channel::from_name("M").is_none());

        let err = "warn".parse::<Channel>().unwrap_err();
        assert!(matches!(err, LoggerError::UnknownChannel { .. }));
    }

    #[test]
    fn test_display_uses_long_name() {
        assert_eq!(Channel::Chuvapp.to_string(), "chuvapp");
    }
}
