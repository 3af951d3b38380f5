use std::fmt;

/// Errors produced when parsing a positional encoding.
#[derive(Debug)]
pub struct EncodingError {
    message: String,
}

impl EncodingError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid positional encoding: {}", self.message)
    }
}

impl std::error::Error for EncodingError {}
