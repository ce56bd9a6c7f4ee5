//! Production wiring of the quiz service.

use crate::{AppState, QuizService, Secrets, WikiQuizConfig};
use std::sync::Arc;
use tracing::{info, instrument};
use wikiquiz_database::{PostgresQuizRepository, create_pool, run_migrations};
use wikiquiz_error::WikiQuizResult;
use wikiquiz_extract::{ExtractorConfig, WikipediaExtractor};
use wikiquiz_models::GeminiClient;
use wikiquiz_synthesis::PayloadSynthesizer;

/// Connect to PostgreSQL and Gemini and assemble the router state.
///
/// Runs pending migrations first when `database.run_migrations` is set.
///
/// # Errors
///
/// Fails if the pool cannot be created, migrations fail, the API key is
/// rejected, or the HTTP client cannot be built.
#[instrument(skip_all, fields(model = %config.model.name))]
pub async fn connect(config: &WikiQuizConfig, secrets: &Secrets) -> WikiQuizResult<AppState> {
    let pool = create_pool(&secrets.database_url, config.database.max_connections)?;
    if config.database.run_migrations {
        run_migrations(&pool).await?;
    }
    info!(
        max_connections = config.database.max_connections,
        "Database ready"
    );

    let driver = GeminiClient::new(&secrets.gemini_api_key, &config.model.name)?;
    let extractor = WikipediaExtractor::with_config(&ExtractorConfig::from(&config.extractor))?;
    let synthesizer =
        PayloadSynthesizer::new(Arc::new(driver)).with_temperature(config.model.temperature);

    Ok(AppState::new(QuizService::new(
        Arc::new(PostgresQuizRepository::new(pool)),
        Arc::new(extractor),
        synthesizer,
    )))
}
