use std::{env, time::Duration};

use fast_market::{config::AppEnv, AppError, Config};

const VARS: [&str; 5] = ["PORT", "HOST", "APP_ENV", "LOG_LEVEL", "REQUEST_TIMEOUT"];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

// Environment is process-wide, so every case runs in one test
#[test]
fn from_env_reads_and_validates_variables() {
    clear_vars();
    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 5000);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.app_env, AppEnv::Development);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.request_timeout, Duration::from_secs(30));

    env::set_var("PORT", "8080");
    env::set_var("HOST", "0.0.0.0");
    env::set_var("APP_ENV", "production");
    env::set_var("LOG_LEVEL", "fast_market=debug");
    env::set_var("REQUEST_TIMEOUT", "2m");
    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.app_env, AppEnv::Production);
    assert_eq!(config.log_level, "fast_market=debug");
    assert_eq!(config.request_timeout, Duration::from_secs(120));

    clear_vars();
    env::set_var("PORT", "not-a-port");
    assert!(matches!(Config::from_env(), Err(AppError::ConfigError(_))));

    clear_vars();
    env::set_var("REQUEST_TIMEOUT", "10 fortnights");
    assert!(matches!(Config::from_env(), Err(AppError::ConfigError(_))));

    clear_vars();
    env::set_var("REQUEST_TIMEOUT", "0s");
    assert!(matches!(Config::from_env(), Err(AppError::ConfigError(_))));

    clear_vars();
}
