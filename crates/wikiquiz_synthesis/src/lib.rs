//! Quiz payload synthesis.
//!
//! Turns an extracted [`Article`](wikiquiz_core::Article) into the JSON object
//! holding `key_entities`, `quiz` and `related_topics`:
//!
//! 1. [`user_prompt`] renders the article into a fixed prompt template,
//!    clipping the body text to [`MAX_TEXT_CHARS`] characters.
//! 2. [`PayloadSynthesizer`] sends the prompt to an injected
//!    [`QuizDriver`](wikiquiz_interface::QuizDriver) exactly once.
//! 3. [`recover_json_object`] digs the first usable JSON object out of the
//!    free-form reply.
//!
//! No semantic checks on the quiz happen here; see
//! [`QuizContent::from_value`](wikiquiz_core::QuizContent::from_value).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod prompt;
mod recover;
mod synthesizer;

pub use prompt::{
    MAX_PROMPT_SECTIONS, MAX_TEXT_CHARS, SYSTEM_PROMPT, clip_chars, user_prompt,
};
pub use recover::{REQUIRED_KEYS, find_object_spans, recover_json_object, strip_code_fences};
pub use synthesizer::{DEFAULT_TEMPERATURE, PayloadSynthesizer};
