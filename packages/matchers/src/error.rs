// Типы ошибок

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatcherError {
    /// The matcher was misused (e.g. a non-string value passed to `toBeUuidV4`).
    /// The test should be reported as errored, not as failed.
    #[error("{0}")]
    InvalidReceived(String),

    /// Ordinary assertion failure carrying the rendered matcher message.
    #[error("{0}")]
    AssertionFailed(String),

    #[error("Unknown matcher: {0}")]
    UnknownMatcher(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MatcherError {
    /// Usage errors break the test itself rather than failing the assertion.
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, MatcherError::AssertionFailed(_))
    }
}

impl From<serde_json::Error> for MatcherError {
    fn from(error: serde_json::Error) -> Self {
        MatcherError::Serialization(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MatcherError>;
