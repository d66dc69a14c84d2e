//! Config tests. Each test owns the env vars it touches, hence `#[serial]`.

use crate::config::BotConfig;
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "BOT_TOKEN",
    "TELEGRAM_BOT_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "LOG_FILE",
    "PORT",
    "POMODORO_DEFAULT_MINUTES",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    let config = BotConfig::load(None, None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.log_file(), "logs/productivity-bot.log");
    assert_eq!(config.port(), 3000);
    assert_eq!(config.pomodoro_default_minutes(), 25);
    assert!(config.validate().is_ok());
    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("PORT", "8080");
    env::set_var("LOG_FILE", "/tmp/bot.log");
    env::set_var("TELEGRAM_API_URL", "http://localhost:8081");
    env::set_var("POMODORO_DEFAULT_MINUTES", "50");

    let config = BotConfig::load(None, None).unwrap();

    assert_eq!(config.port(), 8080);
    assert_eq!(config.log_file(), "/tmp/bot.log");
    assert_eq!(config.telegram_api_url(), Some("http://localhost:8081"));
    assert_eq!(config.pomodoro_default_minutes(), 50);
    assert!(config.validate().is_ok());
    clear_env();
}

#[test]
#[serial]
fn test_alternate_token_is_used_when_primary_missing() {
    clear_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "alt_token");

    let config = BotConfig::load(None, None).unwrap();
    assert_eq!(config.bot_token(), "alt_token");
    clear_env();
}

#[test]
#[serial]
fn test_primary_token_wins_over_alternate() {
    clear_env();
    env::set_var("BOT_TOKEN", "primary");
    env::set_var("TELEGRAM_BOT_TOKEN", "alt_token");

    let config = BotConfig::load(None, None).unwrap();
    assert_eq!(config.bot_token(), "primary");
    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_win() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");
    env::set_var("PORT", "4000");

    let config = BotConfig::load(Some("override_token".to_string()), Some(9000)).unwrap();

    assert_eq!(config.bot_token(), "override_token");
    assert_eq!(config.port(), 9000);
    clear_env();
}

#[test]
#[serial]
fn test_missing_token_is_an_error() {
    clear_env();
    assert!(BotConfig::load(None, None).is_err());
}

#[test]
#[serial]
fn test_invalid_port_is_an_error() {
    clear_env();
    env::set_var("BOT_TOKEN", "t");
    env::set_var("PORT", "http");
    assert!(BotConfig::load(None, None).is_err());
    clear_env();
}

#[test]
#[serial]
fn test_validate_telegram_api_url_invalid() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

    let config = BotConfig::load(None, None).unwrap();
    assert!(config.validate().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_empty_token_and_zero_default() {
    clear_env();
    let config = BotConfig::load(Some("  ".to_string()), None).unwrap();
    assert!(config.validate().is_err());

    env::set_var("POMODORO_DEFAULT_MINUTES", "0");
    let config = BotConfig::load(Some("t".to_string()), None).unwrap();
    assert!(config.validate().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_unschedulable_pomodoro_default() {
    clear_env();
    env::set_var("POMODORO_DEFAULT_MINUTES", (u64::MAX / 30).to_string());
    let config = BotConfig::load(Some("t".to_string()), None).unwrap();
    assert!(config.validate().is_err());

    env::set_var("POMODORO_DEFAULT_MINUTES", (u64::MAX / 60).to_string());
    let config = BotConfig::load(Some("t".to_string()), None).unwrap();
    assert!(config.validate().is_ok());
    clear_env();
}
