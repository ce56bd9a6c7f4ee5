//! Message types for model prompts.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a model conversation.
///
/// # Examples
///
/// ```
/// use wikiquiz_core::{Message, Role};
///
/// let message = Message::user("Write a quiz.");
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The message text
    pub content: String,
}

impl Message {
    /// A system instruction.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// A user prompt.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}
