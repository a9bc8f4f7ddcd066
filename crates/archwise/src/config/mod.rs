use std::env;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_REMOTE_MODEL: &str = "llama-3.1-8b-instant";

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Log level used when `ARCHWISE_LOG_LEVEL` is unset.
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Production => "warn",
            Self::Development | Self::Test => "info",
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub remote: RemoteConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("ARCHWISE_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("ARCHWISE_LOG_LEVEL")
            .unwrap_or_else(|_| environment.default_log_level().to_string());

        let model = match env::var("ARCHWISE_REMOTE_MODEL") {
            Ok(value) if value.trim().is_empty() => return Err(ConfigError::EmptyRemoteModel),
            Ok(value) => value.trim().to_string(),
            Err(_) => DEFAULT_REMOTE_MODEL.to_string(),
        };

        let recorded_response = env::var("ARCHWISE_REMOTE_RESPONSE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            remote: RemoteConfig {
                model,
                recorded_response,
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Settings for the optional remote recommendation source.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub model: String,
    /// Saved chat-completion body replayed instead of a live call.
    pub recorded_response: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyRemoteModel,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyRemoteModel => {
                write!(f, "ARCHWISE_REMOTE_MODEL must not be blank when set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
