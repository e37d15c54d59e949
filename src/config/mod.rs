use crate::core::{AppError, Result};
use crate::modules::taxes::models::Jurisdiction;
use std::env;
use std::time::Duration;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub drafts: DraftConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// `pretty` or `json`
    pub log_format: String,
}

#[derive(Debug, Clone)]
pub struct DraftConfig {
    /// Jurisdiction for drafts opened without one
    pub default_jurisdiction: Jurisdiction,
    /// Upper bound on concurrently open drafts
    pub max_sessions: usize,
    /// Drafts untouched for this long are evicted
    pub idle_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, applying defaults for absent keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_jurisdiction = match lookup("DEFAULT_JURISDICTION") {
            Some(code) => code.parse::<Jurisdiction>().map_err(|_| {
                AppError::Configuration(format!("Invalid DEFAULT_JURISDICTION: {}", code))
            })?,
            None => Jurisdiction::ON,
        };

        let max_sessions = match lookup("MAX_DRAFT_SESSIONS") {
            Some(value) => value.parse().map_err(|_| {
                AppError::Configuration(format!("Invalid MAX_DRAFT_SESSIONS: {}", value))
            })?,
            None => 1000,
        };

        let idle_timeout_secs: u64 = match lookup("DRAFT_IDLE_TIMEOUT_SECS") {
            Some(value) => value.parse().map_err(|_| {
                AppError::Configuration(format!("Invalid DRAFT_IDLE_TIMEOUT_SECS: {}", value))
            })?,
            None => 1800,
        };

        Ok(Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                log_format: lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
            },
            server: ServerConfig::from_lookup(&lookup)?,
            drafts: DraftConfig {
                default_jurisdiction,
                max_sessions,
                idle_timeout: Duration::from_secs(idle_timeout_secs),
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        if self.drafts.max_sessions == 0 {
            return Err(AppError::Configuration(
                "Max draft sessions must be greater than 0".to_string(),
            ));
        }

        if self.drafts.idle_timeout.is_zero() {
            return Err(AppError::Configuration(
                "Draft idle timeout must be greater than 0".to_string(),
            ));
        }

        if !matches!(self.app.log_format.as_str(), "pretty" | "json") {
            return Err(AppError::Configuration(format!(
                "LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                self.app.log_format
            )));
        }

        Ok(())
    }

    pub fn is_json_logging(&self) -> bool {
        self.app.log_format == "json"
    }
}
