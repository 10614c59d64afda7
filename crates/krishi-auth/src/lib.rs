//! Local account management for KrishiSahay.
//!
//! Accounts live in a single JSON file in the user's config directory.
//! Registration hashes the password with Argon2id; login verifies against
//! the stored hash. Single-user local client, so no locking or migrations.

pub mod error;
pub mod password;
pub mod store;
pub mod types;

pub use error::AuthError;
pub use store::CredentialStore;
pub use types::{Identity, Profile, Registration, UserAccount};
