//! Request and response types for model generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A single generation request sent to a model driver.
///
/// # Examples
///
/// ```
/// use wikiquiz_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::system("Be precise."), Message::user("Hello!")])
///     .temperature(0.2)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 2);
/// assert_eq!(request.temperature, Some(0.2));
/// assert!(request.model.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Sampling temperature (0.0 to 1.0)
    #[builder(setter(strip_option))]
    pub temperature: Option<f32>,
    /// Model identifier overriding the driver default
    #[builder(setter(into, strip_option))]
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Start building a request.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The text a model driver returned for one request.
///
/// # Examples
///
/// ```
/// use wikiquiz_core::GenerateResponse;
///
/// let response = GenerateResponse::from_text("{\"quiz\": []}");
/// assert_eq!(response.text(), "{\"quiz\": []}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    text: String,
}

impl GenerateResponse {
    /// Wrap a plain text reply.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The reply text.
    pub fn text(&self) -> &str {
        &self.text
    }
}
