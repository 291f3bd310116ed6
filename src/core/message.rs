//! Message forms accepted by the dispatch entry points
//!
//! A message is either plain text or a template made of literal fragments
//! with interpolated values between them. Both forms render to one string.

/// A message as handed to a channel entry point.
///
/// Anything convertible to a `String` becomes [`Message::PlainText`], so
/// `dispatcher.info("ready")` and `dispatcher.info(template!("port ", port))`
/// both work without the caller naming the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    PlainText(String),
    Template {
        fragments: Vec<String>,
        values: Vec<Option<String>>,
    },
}

impl Message {
    /// Build a template message.
    ///
    /// `values[i]` is placed after `fragments[i]`. Absent values, and slots
    /// past the end of `values`, render as the empty string.
    pub fn template<F, S>(fragments: F, values: Vec<Option<String>>) -> Self
    where
        F: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Message::Template {
            fragments: fragments.into_iter().map(Into::into).collect(),
            values,
        }
    }

    /// Normalize into a single plain string.
    ///
    /// # Examples
    ///
    /// ```
    /// use malalog::Message;
    ///
    /// let msg = Message::template(["user ", " logged in"], vec![Some("alice".to_string())]);
    /// assert_eq!(msg.render(), "user alice logged in");
    ///
    /// let msg = Message::template(["a", "b"], vec![None]);
    /// assert_eq!(msg.render(), "ab");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Message::PlainText(text) => text.clone(),
            Message::Template { fragments, values } => {
                let mut out = String::new();
                for (i, fragment) in fragments.iter().enumerate() {
                    out.push_str(fragment);
                    if let Some(Some(value)) = values.get(i) {
                        out.push_str(value);
                    }
                }
                out
            }
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::PlainText(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::PlainText(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Message::PlainText(text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        let msg = Message::from("  keep *markdown* as is\t");
        assert_eq!(msg.render(), "  keep *markdown* as is\t");
    }

    #[test]
    fn test_template_interleaves_values() {
        let msg = Message::template(
            ["GET ", " took ", "ms"],
            vec![Some("/health".to_string()), Some("12".to_string())],
        );
        assert_eq!(msg.render(), "GET /health took 12ms");
    }

    #[test]
    fn test_template_absent_value_is_empty() {
        let msg = Message::template(["[", "]"], vec![None]);
        assert_eq!(msg.render(), "[]");
    }

    #[test]
    fn test_template_missing_slots() {
        let msg = Message::template(["a", "b", "c"], vec![Some("1".to_string())]);
        assert_eq!(msg.render(), "a1bc");
    }

    #[test]
    fn test_empty_template() {
        let msg = Message::template(Vec::<String>::new(), Vec::new());
        assert_eq!(msg.render(), "");
    }
}
