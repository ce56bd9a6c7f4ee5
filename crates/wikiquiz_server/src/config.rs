//! Server configuration.
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. Bundled defaults (`wikiquiz.toml` compiled into the binary)
//! 2. `~/.config/wikiquiz/wikiquiz.toml`
//! 3. `./wikiquiz.toml`
//! 4. An explicit file passed on the command line
//! 5. `WIKIQUIZ__<SECTION>__<KEY>` environment variables
//!
//! Secrets never come from files; see [`Secrets`].

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};
use wikiquiz_error::{ConfigError, WikiQuizResult};
use wikiquiz_extract::ExtractorConfig;

const DEFAULT_CONFIG: &str = include_str!("../wikiquiz.toml");

/// Listener address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSection {
    /// Interface to bind
    pub host: String,
    /// TCP port
    pub port: u16,
}

/// Outbound article fetching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorSection {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent to Wikipedia
    pub user_agent: String,
}

impl From<&ExtractorSection> for ExtractorConfig {
    fn from(section: &ExtractorSection) -> Self {
        Self {
            timeout: Duration::from_secs(section.timeout_secs),
            user_agent: section.user_agent.clone(),
        }
    }
}

/// Language model selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSection {
    /// Gemini model name
    pub name: String,
    /// Sampling temperature
    pub temperature: f32,
}

/// Connection pool and schema management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSection {
    /// Pool size
    pub max_connections: u32,
    /// Apply pending migrations at startup
    pub run_migrations: bool,
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON lines instead of human-readable text
    pub json_logs: bool,
}

/// All non-secret settings.
///
/// # Example
///
/// ```no_run
/// use wikiquiz_server::WikiQuizConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = WikiQuizConfig::load(None)?;
/// println!("listening on {}:{}", config.server.host, config.server.port);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiQuizConfig {
    /// Listener address
    pub server: ServerSection,
    /// Article fetching
    pub extractor: ExtractorSection,
    /// Language model
    pub model: ModelSection,
    /// Database pool
    pub database: DatabaseSection,
    /// Logging
    pub logging: LoggingSection,
}

impl WikiQuizConfig {
    /// The defaults shipped with the binary, with no overrides applied.
    pub fn bundled() -> WikiQuizResult<Self> {
        Self::build(
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)),
        )
    }

    /// Load configuration from every layer, with `explicit` as the last file.
    ///
    /// User config files are optional and silently skipped when absent. An
    /// explicit path must exist.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> WikiQuizResult<Self> {
        debug!("Loading configuration");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/wikiquiz/wikiquiz.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("wikiquiz").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("WIKIQUIZ")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> WikiQuizResult<Self> {
        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }
}

/// Deployment environment name used when `APP_ENV` is unset.
pub const DEFAULT_APP_ENV: &str = "development";

/// Values read only from the process environment.
#[derive(Clone)]
pub struct Secrets {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Gemini API key
    pub gemini_api_key: String,
    /// Deployment environment (`development`, `production`, ...)
    pub app_env: String,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("database_url", &"<redacted>")
            .field("gemini_api_key", &"<redacted>")
            .field("app_env", &self.app_env)
            .finish()
    }
}

impl Secrets {
    /// Read `DATABASE_URL`, `GEMINI_API_KEY` and `APP_ENV` from the environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first required variable that is
    /// missing or blank.
    pub fn from_env() -> WikiQuizResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use wikiquiz_server::Secrets;
    ///
    /// let secrets = Secrets::from_lookup(|key| match key {
    ///     "DATABASE_URL" => Some("postgres://localhost/wikiquiz".to_string()),
    ///     "GEMINI_API_KEY" => Some(" key ".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(secrets.gemini_api_key, "key");
    /// assert_eq!(secrets.app_env, "development");
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> WikiQuizResult<Self> {
        let required = |key: &str| -> WikiQuizResult<String> {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::new(format!("Missing {}", key)).into())
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            gemini_api_key: required("GEMINI_API_KEY")?,
            app_env: lookup("APP_ENV")
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_APP_ENV.to_string()),
        })
    }

    /// Whether this is a production deployment.
    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }
}
