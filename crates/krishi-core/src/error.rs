//! Top-level error type for the session layer.
//!
//! Provider crates keep their own typed errors; by the time a failure
//! reaches the views it is one of these, carrying the provider's detail
//! text. `display_message` renders it in the session's language.

use thiserror::Error;

use crate::locale::{failure_notice, text, Locale, MessageKey};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(#[from] krishi_auth::AuthError),

    #[error("Chat service error: {0}")]
    Chat(String),

    #[error("Image analysis error: {0}")]
    Vision(String),

    #[error("Weather service error: {0}")]
    Weather(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn chat(detail: impl Into<String>) -> Self {
        Self::Chat(detail.into())
    }

    pub fn vision(detail: impl Into<String>) -> Self {
        Self::Vision(detail.into())
    }

    pub fn weather(detail: impl Into<String>) -> Self {
        Self::Weather(detail.into())
    }

    /// Localized, human-readable message for the active view.
    ///
    /// Prior view state is the caller's to keep; this only renders text.
    pub fn display_message(&self, locale: Locale) -> String {
        match self {
            Self::Auth(e) => e.user_message(),
            Self::Chat(detail) => failure_notice(locale, detail),
            Self::Vision(detail) => {
                format!("{}: {}", text(MessageKey::AnalysisFailed, locale), detail)
            }
            Self::Weather(_) => text(MessageKey::WeatherUnavailable, locale).to_string(),
            Self::Config(detail) => detail.clone(),
            Self::Other(_) => text(MessageKey::TryAgain, locale).to_string(),
        }
    }
}
