use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_PUBLIC_STATS_WINDOW_DAYS: i64 = 15;
const MAX_PUBLIC_STATS_WINDOW_DAYS: i64 = 3650;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_address: String,

    /// Length of the default public statistics window, starting today.
    pub public_stats_window_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let public_stats_window_days =
            parse_window_days(std::env::var("PUBLIC_STATS_WINDOW_DAYS").ok())?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            public_stats_window_days,
        })
    }
}

/// Parses the public statistics window length, accepting `0..=3650` days.
fn parse_window_days(value: Option<String>) -> Result<i64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_PUBLIC_STATS_WINDOW_DAYS);
    };

    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|days| (0..=MAX_PUBLIC_STATS_WINDOW_DAYS).contains(days))
        .ok_or(ConfigError::InvalidEnvVar {
            name: "PUBLIC_STATS_WINDOW_DAYS".to_string(),
            value,
        })
}
