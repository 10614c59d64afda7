//! Chat assistant adapter for KrishiSahay.
//!
//! Talks to an OpenAI-compatible chat completions endpoint with a fixed
//! agronomy system instruction. The reply text is returned verbatim,
//! including its lightweight markup; rendering is the view's job.

pub mod client;
pub mod conversation;
pub mod error;
pub mod types;

pub use client::ChatClient;
pub use conversation::Conversation;
pub use error::ChatError;
pub use types::{ChatMessage, Role};
