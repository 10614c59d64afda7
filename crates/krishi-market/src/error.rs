//! Dataset fetch errors.
//!
//! These never cross the adapter boundary; `query` converts every one of
//! them into the fallback table. They exist so the degradation can be
//! logged with a cause.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Dataset unavailable (status {status})")]
    Unavailable { status: u16 },

    #[error("Request timed out")]
    TimedOut,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketError {
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::TimedOut
        } else {
            Self::Network(e)
        }
    }
}
