//! Console appender implementation
//!
//! Record lines go to stdout in the channel color. Status lines and sink
//! failure reports also flow through here so they share one writer pair.

use crate::core::{Appender, LogRecord, Result};
use colored::Color;
use parking_lot::Mutex;
use std::io::Write;

type Writer = Box<dyn Write + Send>;

/// Wrap `text` in the ANSI foreground escape for `color`.
///
/// Stateless: unlike `colored::Colorize`, this ignores terminal detection
/// and any global override.
///
/// # Examples
///
/// ```
/// use malalog::appenders::console::paint;
/// use colored::Color;
///
/// assert_eq!(paint(Color::Yellow, "hi"), "\x1b[33mhi\x1b[0m");
/// ```
#[must_use]
pub fn paint(color: Color, text: &str) -> String {
    format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
}

pub struct ConsoleAppender {
    use_colors: bool,
    out: Mutex<Writer>,
    err: Mutex<Writer>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            out: Mutex::new(Box::new(std::io::stdout())),
            err: Mutex::new(Box::new(std::io::stderr())),
        }
    }

    /// Redirect output, e.g. into an in-memory buffer
    ///
    /// `out` receives record and status lines, `err` receives failure reports.
    #[must_use]
    pub fn with_writers(
        mut self,
        out: impl Write + Send + 'static,
        err: impl Write + Send + 'static,
    ) -> Self {
        self.out = Mutex::new(Box::new(out));
        self.err = Mutex::new(Box::new(err));
        self
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    fn styled(&self, color: Color, text: &str) -> String {
        if self.use_colors {
            paint(color, text)
        } else {
            text.to_string()
        }
    }

    /// Print a sink status line: green when enabled, yellow when disabled
    pub fn status(&self, enabled: bool, text: &str) {
        let line = if enabled {
            self.styled(Color::Green, &format!("✅ {}", text))
        } else {
            self.styled(Color::Yellow, &format!("⚠️  {}", text))
        };
        let _ = writeln!(self.out.lock(), "{}", line);
    }

    /// Print an error-level diagnostic to the error writer
    pub fn report_error(&self, text: &str) {
        let line = self.styled(Color::Red, &format!("❌ {}", text));
        let _ = writeln!(self.err.lock(), "{}", line);
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, line: &str, record: &LogRecord) -> Result<()> {
        let output = self.styled(record.channel.color(), line);
        writeln!(self.out.lock(), "{}", output)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.out.lock().flush()?;
        self.err.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
