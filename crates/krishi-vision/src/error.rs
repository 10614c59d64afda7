//! Vision-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Unsupported image type: {0}")]
    UnsupportedImage(String),

    #[error("Request timed out")]
    TimedOut,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl VisionError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::AnalysisFailed(msg) => msg.clone(),
            Self::UnsupportedImage(_) => "Please upload a photo (JPG or PNG).".to_string(),
            Self::TimedOut => "The analysis took too long. Please try again.".to_string(),
            Self::InvalidResponse(_) => "The analysis came back unreadable.".to_string(),
            Self::Network(_) => "Network error. Check your connection.".to_string(),
        }
    }
}
