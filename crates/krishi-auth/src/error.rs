//! Account and credential error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Phone number must be exactly 10 digits")]
    InvalidPhone,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("This mobile number is already registered")]
    DuplicatePhone,

    #[error("Invalid mobile number or password")]
    InvalidCredentials,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Password hash error: {0}")]
    Hash(String),
}

impl AuthError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField(_) => "Please fill all required fields".to_string(),
            Self::InvalidPhone => "Please enter a valid 10-digit mobile number".to_string(),
            Self::PasswordTooShort => "Password must be at least 6 characters".to_string(),
            Self::PasswordMismatch => "Passwords do not match".to_string(),
            Self::DuplicatePhone => "This mobile number is already registered".to_string(),
            Self::InvalidCredentials => "Invalid mobile number or password".to_string(),
            Self::Storage(_) => "Could not access saved accounts. Please try again.".to_string(),
            Self::Hash(_) => "Could not process the password. Please try again.".to_string(),
        }
    }

    /// Whether this error came from registration input validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_)
                | Self::InvalidPhone
                | Self::PasswordTooShort
                | Self::PasswordMismatch
        )
    }
}
