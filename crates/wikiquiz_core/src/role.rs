//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Who authored a message in a model conversation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// Instructions that frame the whole conversation
    System,
    /// The caller's prompt
    User,
}
