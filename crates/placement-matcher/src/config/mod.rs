use rand::Rng;
use std::env;
use std::fmt;

pub const DEFAULT_CANDIDATE_COUNT: usize = 100;

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

    /// Filter used when neither `APP_LOG_LEVEL` nor `RUST_LOG` is set.
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Production => "error",
            Self::Development | Self::Test => "warn",
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub generation: GenerationConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let candidate_count = match env::var("APP_CANDIDATE_COUNT") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|count| *count > 0)
                .ok_or(ConfigError::InvalidCandidateCount { value: raw })?,
            Err(_) => DEFAULT_CANDIDATE_COUNT,
        };

        let seed = match env::var("APP_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidSeed { source })?,
            ),
            Err(_) => None,
        };

        let log_level = env::var("APP_LOG_LEVEL")
            .unwrap_or_else(|_| environment.default_log_level().to_string());

        Ok(Self {
            environment,
            generation: GenerationConfig {
                candidate_count,
                seed,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Controls how the candidate cohort is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub candidate_count: usize,
    pub seed: Option<u64>,
}

impl GenerationConfig {
    /// The configured seed, or a fresh one so the run can still be replayed.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::thread_rng().gen())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            candidate_count: DEFAULT_CANDIDATE_COUNT,
            seed: None,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCandidateCount { value: String },
    InvalidSeed { source: std::num::ParseIntError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCandidateCount { value } => write!(
                f,
                "APP_CANDIDATE_COUNT must be a positive integer (got '{}')",
                value
            ),
            ConfigError::InvalidSeed { .. } => write!(f, "APP_SEED must be a valid u64"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidCandidateCount { .. } => None,
            ConfigError::InvalidSeed { source } => Some(source),
        }
    }
}
