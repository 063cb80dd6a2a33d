use std::env;
use chrono::Duration;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub app_env: AppEnv,
    pub log_level: String,
    pub request_timeout: std::time::Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "127.0.0.1".into(),
            app_env: AppEnv::Development,
            log_level: "info".into(),
            request_timeout: std::time::Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        // Server config
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse::<u16>()
            .map_err(|_| AppError::ConfigError("Invalid PORT".into()))?;

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());

        let app_env_str = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let app_env = parse_app_env(&app_env_str);

        // Logging
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());

        // Request handling
        let request_timeout_str = env::var("REQUEST_TIMEOUT").unwrap_or_else(|_| "30s".into());
        let request_timeout = parse_duration(&request_timeout_str)
            .map_err(|_| AppError::ConfigError("Invalid REQUEST_TIMEOUT format".into()))?
            .to_std()
            .map_err(|_| AppError::ConfigError("REQUEST_TIMEOUT must not be negative".into()))?;
        if request_timeout.is_zero() {
            return Err(AppError::ConfigError("REQUEST_TIMEOUT must be greater than zero".into()));
        }

        Ok(Self {
            port,
            host,
            app_env,
            log_level,
            request_timeout,
        })
    }
}

fn parse_app_env(app_env: &str) -> AppEnv {
    match app_env.to_lowercase().as_str() {
        "production" => AppEnv::Production,
        "test" => AppEnv::Test,
        _ => AppEnv::Development,
    }
}

fn parse_duration(duration_str: &str) -> Result<Duration, &'static str> {
    let duration_str = duration_str.trim();

    if duration_str.is_empty() {
        return Err("Duration string is empty");
    }

    // Extract the number and unit parts
    let len = duration_str.len();
    let (num_part, unit_part) = duration_str.split_at(
        duration_str
            .chars()
            .position(|c| !c.is_ascii_digit())
            .unwrap_or(len)
    );

    let num = num_part.parse::<i64>().map_err(|_| "Invalid number")?;

    match unit_part {
        "s" => Ok(Duration::seconds(num)),
        "m" => Ok(Duration::minutes(num)),
        "h" => Ok(Duration::hours(num)),
        "d" => Ok(Duration::days(num)),
        _ => Err("Unknown time unit, use s, m, h, or d"),
    }
}
