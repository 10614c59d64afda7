//! Weather-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Weather data unavailable (status {status})")]
    Unavailable { status: u16 },

    #[error("Request timed out")]
    TimedOut,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl WeatherError {
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::TimedOut
        } else {
            Self::Network(e)
        }
    }

    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unavailable { .. } => {
                "Could not fetch weather. Check city name or API key.".to_string()
            }
            Self::TimedOut => "The weather service took too long. Please try again.".to_string(),
            Self::Parse(_) => "Received unreadable weather data.".to_string(),
            Self::Network(_) => "Network error. Check your connection.".to_string(),
        }
    }
}
