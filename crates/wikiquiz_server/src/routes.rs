//! HTTP routes for quiz generation and history.

use crate::{ApiError, ApiResult, QuizService};
use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::debug;
use url::Url;
use wikiquiz_core::{QuizListItem, QuizPayload};

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    service: Arc<QuizService>,
}

impl AppState {
    /// Wrap a service for use as router state.
    pub fn new(service: QuizService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// The quiz service behind the routes.
    pub fn service(&self) -> &QuizService {
        &self.service
    }
}

/// Body of `POST /generate-quiz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateQuizRequest {
    /// Wikipedia article URL
    pub url: String,
}

/// Query string of `GET /quizzes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ListParams {
    /// Maximum number of rows
    pub limit: Option<u32>,
    /// Rows to skip
    pub offset: Option<u32>,
}

/// Build the API router.
///
/// Routes:
/// - `GET /health`
/// - `POST /generate-quiz`
/// - `GET /quizzes`
/// - `GET /quizzes/{id}`
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/generate-quiz", post(generate_quiz))
        .route("/quizzes", get(list_quizzes))
        .route("/quizzes/:quiz_id", get(get_quiz))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin, method and header; credentials are not allowed.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Check that `raw` is an absolute http(s) URL and return its normalized form.
///
/// # Examples
///
/// ```
/// use wikiquiz_server::normalize_url;
///
/// let url = normalize_url(" https://en.wikipedia.org/wiki/Alan_Turing ").unwrap();
/// assert_eq!(url, "https://en.wikipedia.org/wiki/Alan_Turing");
/// assert!(normalize_url("ftp://en.wikipedia.org/wiki/Alan_Turing").is_err());
/// ```
pub fn normalize_url(raw: &str) -> ApiResult<String> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ApiError::bad_request(format!("Invalid URL: {}", e)))?;

    let is_web = matches!(url.scheme(), "http" | "https") && url.has_host();
    if !is_web {
        return Err(ApiError::bad_request(
            "Invalid URL: only absolute http and https URLs are accepted",
        ));
    }

    Ok(url.into())
}

async fn health_check() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn generate_quiz(
    State(state): State<AppState>,
    body: Result<Json<GenerateQuizRequest>, JsonRejection>,
) -> ApiResult<Json<QuizPayload>> {
    let Json(request) = body.map_err(|r| ApiError::new(r.status(), r.body_text()))?;
    let url = normalize_url(&request.url)?;
    debug!(%url, "Generate request");

    Ok(Json(state.service.generate(&url).await?))
}

async fn list_quizzes(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<QuizListItem>>> {
    let Query(params) = params.map_err(|r| ApiError::new(r.status(), r.body_text()))?;
    let items = state
        .service
        .list(params.limit.map(i64::from), params.offset.map(i64::from))
        .await?;

    Ok(Json(items))
}

async fn get_quiz(
    State(state): State<AppState>,
    quiz_id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<QuizPayload>> {
    let Path(quiz_id) = quiz_id.map_err(|r| ApiError::new(r.status(), r.body_text()))?;

    Ok(Json(state.service.get(quiz_id).await?))
}
