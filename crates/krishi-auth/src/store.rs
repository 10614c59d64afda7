//! File-backed credential store.
//!
//! All accounts are kept as one JSON array in `users.json` under the app
//! config directory. Registration is read-modify-write; login is read-only.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::instrument;

use crate::error::AuthError;
use crate::password::{hash_password, verify_password};
use crate::types::{Registration, UserAccount};

const USERS_FILE: &str = "users.json";

pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Open the store at the default location
    /// (`<config_dir>/krishisahay/users.json`).
    pub fn open_default() -> Result<Self, AuthError> {
        let dir = dirs::config_dir()
            .ok_or_else(|| AuthError::Storage("no config directory".to_string()))?
            .join("krishisahay");

        fs::create_dir_all(&dir).map_err(|e| AuthError::Storage(e.to_string()))?;

        Ok(Self {
            path: dir.join(USERS_FILE),
        })
    }

    /// Open the store at an explicit file path.
    pub fn at_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Register a new account.
    ///
    /// Validates the form, rejects duplicate phone numbers, hashes the
    /// password and appends the account to the stored collection. The
    /// collection is untouched on any failure.
    #[instrument(skip(self, registration), fields(phone = %registration.phone), level = "info")]
    pub fn register(&self, registration: Registration) -> Result<UserAccount, AuthError> {
        registration.validate()?;

        let mut accounts = self.load_accounts()?;
        if accounts.iter().any(|a| a.phone == registration.phone) {
            return Err(AuthError::DuplicatePhone);
        }

        let account = UserAccount {
            name: registration.name,
            phone: registration.phone,
            state: registration.state,
            village: registration.village,
            password_hash: hash_password(&registration.password)?,
            created_at: Utc::now(),
        };

        accounts.push(account.clone());
        self.save_accounts(&accounts)?;

        tracing::info!("Registered account for {}", account.phone);
        Ok(account)
    }

    /// Look up an account by phone number and verify the password.
    ///
    /// Unknown phone and wrong password both return `InvalidCredentials`.
    #[instrument(skip(self, password), level = "info")]
    pub fn authenticate(&self, phone: &str, password: &str) -> Result<UserAccount, AuthError> {
        let accounts = self.load_accounts()?;

        let account = accounts
            .iter()
            .find(|a| a.phone == phone)
            .ok_or(AuthError::InvalidCredentials)?;

        if verify_password(password, &account.password_hash)? {
            Ok(account.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    fn load_accounts(&self) -> Result<Vec<UserAccount>, AuthError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path).map_err(|e| AuthError::Storage(e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| AuthError::Storage(e.to_string()))
    }

    fn save_accounts(&self, accounts: &[UserAccount]) -> Result<(), AuthError> {
        let json = serde_json::to_string_pretty(accounts)
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| AuthError::Storage(e.to_string()))
    }
}

impl Registration {
    /// Check the form the way the signup screen does: required fields,
    /// 10-digit numeric phone, matching passwords of at least 6 characters.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.name.trim().is_empty() {
            return Err(AuthError::MissingField("name"));
        }
        if self.phone.is_empty() {
            return Err(AuthError::MissingField("phone"));
        }
        if self.state.trim().is_empty() {
            return Err(AuthError::MissingField("state"));
        }
        if self.password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }
        if self.phone.len() != 10 || !self.phone.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AuthError::InvalidPhone);
        }
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if self.password.chars().count() < 6 {
            return Err(AuthError::PasswordTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn test_store() -> (tempfile::TempDir, CredentialStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::at_path(dir.path().join("users.json"));
        (dir, store)
    }

    fn ravi() -> Registration {
        Registration {
            name: "Ravi".to_string(),
            phone: "9876543210".to_string(),
            state: "Telangana".to_string(),
            village: "Warangal".to_string(),
            password: "farm123".to_string(),
            confirm_password: "farm123".to_string(),
        }
    }

    #[test]
    fn test_register_then_authenticate() {
        let (_dir, store) = test_store();

        let account = store.register(ravi()).unwrap();
        assert_eq!(account.name, "Ravi");

        let found = store.authenticate("9876543210", "farm123").unwrap();
        assert_eq!(found.name, "Ravi");
        assert_eq!(found.state, "Telangana");
    }

    #[test]
    fn test_missing_fields_leave_store_untouched() {
        let (_dir, store) = test_store();

        for blank in ["name", "phone", "state", "password"] {
            let mut reg = ravi();
            match blank {
                "name" => reg.name.clear(),
                "phone" => reg.phone.clear(),
                "state" => reg.state.clear(),
                _ => {
                    reg.password.clear();
                    reg.confirm_password.clear();
                }
            }
            let err = store.register(reg).unwrap_err();
            assert!(matches!(err, AuthError::MissingField(_)), "field: {blank}");
        }

        assert_eq!(store.load_accounts().unwrap().len(), 0);
    }

    #[test]
    fn test_phone_must_be_ten_digits() {
        let (_dir, store) = test_store();

        for bad in ["98765", "98765432101", "98765abc10", "987654321 "] {
            let mut reg = ravi();
            reg.phone = bad.to_string();
            let err = store.register(reg).unwrap_err();
            assert!(matches!(err, AuthError::InvalidPhone), "phone: {bad:?}");
        }
    }

    #[test]
    fn test_password_rules() {
        let (_dir, store) = test_store();

        let mut reg = ravi();
        reg.confirm_password = "different".to_string();
        assert!(matches!(
            store.register(reg).unwrap_err(),
            AuthError::PasswordMismatch
        ));

        let mut reg = ravi();
        reg.password = "abc".to_string();
        reg.confirm_password = "abc".to_string();
        assert!(matches!(
            store.register(reg).unwrap_err(),
            AuthError::PasswordTooShort
        ));
    }

    #[test]
    fn test_duplicate_phone_keeps_first_record() {
        let (_dir, store) = test_store();

        store.register(ravi()).unwrap();

        let mut second = ravi();
        second.name = "Someone Else".to_string();
        assert!(matches!(
            store.register(second).unwrap_err(),
            AuthError::DuplicatePhone
        ));

        let accounts = store.load_accounts().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "Ravi");
    }

    #[test]
    fn test_authenticate_rejects_non_matching_pairs() {
        let (_dir, store) = test_store();
        store.register(ravi()).unwrap();

        for (phone, password) in [
            ("9876543210", "wrong"),
            ("0000000000", "farm123"),
            ("", ""),
        ] {
            assert!(matches!(
                store.authenticate(phone, password).unwrap_err(),
                AuthError::InvalidCredentials
            ));
        }
    }

    #[test]
    fn test_plaintext_password_never_stored() {
        let (dir, store) = test_store();
        store.register(ravi()).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("users.json")).unwrap();
        assert!(!raw.contains("farm123"));
        assert!(raw.contains("$argon2"));
    }

    #[test]
    fn test_empty_store_authenticates_nobody() {
        let (_dir, store) = test_store();
        assert!(matches!(
            store.authenticate("9876543210", "farm123").unwrap_err(),
            AuthError::InvalidCredentials
        ));
    }
}
