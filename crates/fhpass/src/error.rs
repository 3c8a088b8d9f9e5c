use thiserror::Error;

/// Input was not six colon-separated hex octets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid MAC format (expected XX:XX:XX:XX:XX:XX)")]
pub struct FormatError {
    input: String,
}

impl FormatError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The rejected input, as given
    pub fn input(&self) -> &str {
        &self.input
    }
}
