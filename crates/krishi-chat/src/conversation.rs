//! Session conversation log.
//!
//! Append-only for the lifetime of the session; cleared on explicit reset
//! and on language change, reseeding the localized welcome message.

use krishi_core::{text, Locale, MessageKey};

use crate::types::ChatMessage;

/// How many trailing log entries go out with each request.
const REQUEST_WINDOW: usize = 10;

#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Start a conversation seeded with the localized welcome message.
    pub fn new(locale: Locale) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(text(MessageKey::ChatWelcome, locale))],
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    /// Clear the log and reseed the welcome message. Used by the clear
    /// button and whenever the session language changes.
    pub fn reset(&mut self, locale: Locale) {
        self.messages.clear();
        self.messages
            .push(ChatMessage::assistant(text(MessageKey::ChatWelcome, locale)));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The trailing slice sent to the provider.
    pub fn request_window(&self) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(REQUEST_WINDOW);
        &self.messages[start..]
    }
}
