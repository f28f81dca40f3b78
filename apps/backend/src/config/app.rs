//! Centralized application configuration loaded from environment variables.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::error::AppError;

const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60;
const DEFAULT_SESSION_SWEEP_SECS: u64 = 60;

/// Deployment environment, from `ENVIRONMENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Unknown values fall back to development with a warning.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "development" => Environment::Development,
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            other => {
                warn!(environment = %other, "Unknown environment, using development settings");
                Environment::Development
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Centralized application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,
    pub environment: Environment,

    // Session store
    pub session_ttl: Duration,
    pub session_sweep_interval: Duration,

    // Leaderboard persistence; in-memory when unset
    pub leaderboard_file: Option<PathBuf>,

    /// Fixed seed for tile spawning; OS-seeded when unset
    pub rng_seed: Option<u64>,

    pub cors_allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            environment: Environment::Development,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
            session_sweep_interval: Duration::from_secs(DEFAULT_SESSION_SWEEP_SECS),
            leaderboard_file: None,
            rng_seed: None,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("BACKEND_HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let environment = lookup("ENVIRONMENT")
            .map(|raw| Environment::parse(&raw))
            .unwrap_or_default();

        let session_ttl = parse_var(&lookup, "SESSION_TTL_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.session_ttl);
        let session_sweep_interval = parse_var::<u64, _>(&lookup, "SESSION_SWEEP_SECS")?
            .map(|secs| Duration::from_secs(secs.max(1)))
            .unwrap_or(defaults.session_sweep_interval);

        let leaderboard_file = lookup("LEADERBOARD_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let rng_seed = parse_var(&lookup, "GAME_RNG_SEED")?;

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| raw.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            environment,
            session_ttl,
            session_sweep_interval,
            leaderboard_file,
            rng_seed,
            cors_allowed_origins,
        })
    }
}

/// Parse an optional variable; present-but-invalid is a config error.
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::config(format!("{key} must be a valid number, got '{raw}'"))
        }),
    }
}
