//! Memory chat messages
//!
//! The chat is an append-only list. The assistant side is a fixed canned
//! reply; there is no model behind it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Greeting that opens every conversation
pub const WELCOME_MESSAGE: &str =
    "Welcome to Inkr! I'm here to help you remember everything. What's on your mind today?";

/// The assistant's reply to every user message
pub const CANNED_REPLY: &str = "I've saved that to your memory. Is there anything specific you'd like me to help you remember about this?";

/// Maximum length of a user message, in graphemes
pub const MAX_MESSAGE_LENGTH: usize = 500;

/// Id of the welcome message
pub const WELCOME_ID: &str = "1";

/// A chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier
    pub id: String,
    /// Body text
    pub text: String,
    /// Whether the user wrote it
    pub is_user: bool,
    /// When it was appended
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// A message from the user
    pub fn user(id: impl Into<String>, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_user: true,
            timestamp,
        }
    }

    /// A message from the assistant
    pub fn assistant(
        id: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_user: false,
            timestamp,
        }
    }

    /// The opening assistant message
    pub fn welcome(timestamp: DateTime<Utc>) -> Self {
        Self::assistant(WELCOME_ID, WELCOME_MESSAGE, timestamp)
    }

    /// The canned assistant reply
    pub fn canned_reply(id: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::assistant(id, CANNED_REPLY, timestamp)
    }
}

/// Turn raw input into sendable text
///
/// Trims surrounding whitespace and caps the length at
/// [`MAX_MESSAGE_LENGTH`] graphemes. Returns `None` when nothing is left.
pub fn prepare_outgoing(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.graphemes(true).count() <= MAX_MESSAGE_LENGTH {
        return Some(trimmed.to_string());
    }
    Some(trimmed.graphemes(true).take(MAX_MESSAGE_LENGTH).collect())
}
