//! Google Gemini API implementation.
//!
//! [`GeminiClient`] is built once at startup from an explicit API key and model
//! name, then shared behind the [`QuizDriver`] trait. Each `generate` call is a
//! single non-streaming request with no retry.
//!
//! # Example
//!
//! ```no_run
//! use wikiquiz_core::{GenerateRequest, Message};
//! use wikiquiz_interface::QuizDriver;
//! use wikiquiz_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new("my-api-key", "gemini-3-flash-preview")?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Name three rivers in France.")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use gemini_rust::{Gemini, client::Model};
use tracing::{debug, instrument};
use wikiquiz_core::{GenerateRequest, GenerateResponse, Role};
use wikiquiz_error::{GeminiError, GeminiErrorKind, GeminiResult, WikiQuizResult};
use wikiquiz_interface::QuizDriver;

/// Model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Client for the Google Gemini API.
pub struct GeminiClient {
    client: Gemini,
    api_key: String,
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client for `model_name` authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` if the key is blank, or `ClientCreation` if the
    /// SDK rejects the configuration.
    #[instrument(name = "gemini_client_new", skip(api_key))]
    pub fn new(api_key: &str, model_name: &str) -> GeminiResult<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey));
        }

        let client = Self::build_client(api_key, model_name)?;
        debug!(model = model_name, "Created Gemini client");

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model_name: model_name.to_string(),
        })
    }

    /// Create a client reading the key from the `GEMINI_API_KEY` environment variable.
    pub fn from_env(model_name: &str) -> GeminiResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Self::new(&api_key, model_name)
    }

    fn build_client(api_key: &str, model_name: &str) -> GeminiResult<Gemini> {
        Gemini::with_model(api_key, Self::model_name_to_enum(model_name))
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Unrecognized names become `Model::Custom` with the "models/" prefix the
    /// API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other if other.starts_with("models/") => Model::Custom(other.to_string()),
            other => Model::Custom(format!("models/{}", other)),
        }
    }

    /// Internal generate method that returns Gemini-specific errors.
    #[instrument(
        skip(self, req),
        fields(model_override = ?req.model, messages = req.messages.len())
    )]
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let override_client = match req.model.as_deref() {
            Some(model) if model != self.model_name => {
                Some(Self::build_client(&self.api_key, model)?)
            }
            _ => None,
        };
        let client = override_client.as_ref().unwrap_or(&self.client);

        let mut builder = client.generate_content();

        for msg in &req.messages {
            match msg.role {
                // Gemini takes system instructions separately from the turns
                Role::System => builder = builder.with_system_prompt(&msg.content),
                Role::User => builder = builder.with_user_message(&msg.content),
            }
        }

        if let Some(temperature) = req.temperature {
            builder = builder.with_temperature(temperature);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;
        let text = response.text();
        if text.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
        }

        debug!(response_len = text.len(), "Gemini response received");
        Ok(GenerateResponse::from_text(text))
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();

        // Example: "bad response from server; code 503; description: ..."
        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
        }
    }

    fn extract_status_code(error_msg: &str) -> Option<u16> {
        let code_start = error_msg.find("code ")?;
        let digits: String = error_msg[code_start + 5..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }
}

#[async_trait]
impl QuizDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> WikiQuizResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
