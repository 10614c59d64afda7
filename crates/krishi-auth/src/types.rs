//! Account and session identity types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account as persisted in the credential file.
///
/// `password_hash` is an Argon2id PHC string; the plaintext password is
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub name: String,
    pub phone: String,
    pub state: String,
    pub village: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registration form input, prior to validation.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: String,
    pub phone: String,
    pub state: String,
    pub village: String,
    pub password: String,
    pub confirm_password: String,
}

/// The non-secret slice of an account carried by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub phone: String,
    pub state: String,
    pub village: String,
}

impl From<&UserAccount> for Profile {
    fn from(account: &UserAccount) -> Self {
        Self {
            name: account.name.clone(),
            phone: account.phone.clone(),
            state: account.state.clone(),
            village: account.village.clone(),
        }
    }
}

/// The identity bound to a running session.
///
/// `Guest` is synthesized at the login screen and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Guest,
    User(Profile),
}

impl Identity {
    pub const GUEST_NAME: &'static str = "Guest Farmer";

    pub fn display_name(&self) -> &str {
        match self {
            Self::Guest => Self::GUEST_NAME,
            Self::User(profile) => &profile.name,
        }
    }

    pub fn phone(&self) -> &str {
        match self {
            Self::Guest => "",
            Self::User(profile) => &profile.phone,
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Self::Guest)
    }
}
