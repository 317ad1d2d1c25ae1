//! The value a command action returns.

/// What a command action produced.
///
/// A side-effecting action performs its effect inside the closure and
/// returns only the text to display; the dispatcher never sequences or
/// retries side effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Display text (also the substitution value in template resolution).
    Text(String),

    /// Nothing to display. Where a substitution string is required this
    /// surfaces as a `NoResult` error.
    Silent,

    /// The terminal loop should stop. Never splicable into a template.
    Exit,
}

impl Outcome {
    /// Returns the display text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Silent | Self::Exit => None,
        }
    }
}

impl From<String> for Outcome {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Outcome {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
