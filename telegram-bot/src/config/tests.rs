//! Config tests.

use crate::config::bot_config::BotConfig;
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: &[&str] = &[
    "BOT_TOKEN",
    "TG_BOT_TOKEN",
    "DATABASE_URL",
    "LOG_FILE",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "RESTART_DELAY_SECS",
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

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.database_url(), "sqlite:./data/channel_signatures.db");
    assert_eq!(config.log_file(), "logs/signature-bot.log");
    assert_eq!(config.restart_delay(), Duration::from_secs(15));
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("DATABASE_URL", "sqlite:/tmp/custom.db");
    env::set_var("LOG_FILE", "/tmp/bot.log");
    env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
    env::set_var("RESTART_DELAY_SECS", "3");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "custom_token");
    assert_eq!(config.database_url(), "sqlite:/tmp/custom.db");
    assert_eq!(config.log_file(), "/tmp/bot.log");
    assert_eq!(config.telegram_api_url(), Some("http://127.0.0.1:8081"));
    assert_eq!(config.restart_delay_secs, 3);

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();

    assert_eq!(config.bot_token(), "override_token");
}

/// **Test: the legacy TG_BOT_TOKEN name is accepted when BOT_TOKEN is absent.**
#[test]
#[serial]
fn test_load_config_legacy_token_name() {
    clear_env();
    env::set_var("TG_BOT_TOKEN", "legacy_token");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "legacy_token");
    clear_env();
}

/// **Test: a missing token is an error, not a panic.**
#[test]
#[serial]
fn test_load_config_missing_token() {
    clear_env();

    let err = BotConfig::load(None).unwrap_err();
    assert!(err.to_string().contains("BOT_TOKEN"));
}

#[test]
#[serial]
fn test_unparsable_restart_delay_falls_back_to_default() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("RESTART_DELAY_SECS", "soon");

    let config = BotConfig::load(None).unwrap();
    assert_eq!(config.restart_delay_secs, 15);

    clear_env();
}

#[test]
#[serial]
fn test_validate_telegram_api_url_invalid() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_validate_blank_token() {
    clear_env();

    let config = BotConfig::load(Some("   ".to_string())).unwrap();
    assert!(config.validate().is_err());
}

/// **Test: a zero restart delay is rejected so a crashing bot cannot restart in a tight loop.**
#[test]
#[serial]
fn test_validate_zero_restart_delay() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("RESTART_DELAY_SECS", "0");

    let config = BotConfig::load(None).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("RESTART_DELAY_SECS"));

    clear_env();
}
