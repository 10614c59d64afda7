//! Chat-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Request timed out")]
    TimedOut,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ChatError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::ServiceUnavailable(msg) => msg.clone(),
            Self::TimedOut => "The assistant took too long to answer.".to_string(),
            Self::InvalidResponse(_) => "The assistant sent an unreadable reply.".to_string(),
            Self::Network(_) => "Network error. Check your connection.".to_string(),
        }
    }
}
