use super::data::{path_display, Config};
use super::defaults::ConfigKeyError;
use crate::core::constants::{DEFAULT_REPLY_DELAY, DEFAULT_SUBTITLE, DEFAULT_TITLE};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(config, Config::default());
    assert_eq!(config.reply_delay(), DEFAULT_REPLY_DELAY);
    assert_eq!(config.title(), DEFAULT_TITLE);
    assert_eq!(config.subtitle(), DEFAULT_SUBTITLE);
    assert_eq!(config.greeting(), None);
}

#[test]
fn test_save_and_load_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let config = Config {
        reply_delay_ms: Some(150),
        title: Some("Helpdesk".to_string()),
        subtitle: None,
        greeting: Some("Hi! Ask me anything.".to_string()),
    };
    config.save_to_path(&config_path).expect("Failed to save config");

    let loaded = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, config);
    assert_eq!(loaded.reply_delay(), Duration::from_millis(150));
    assert_eq!(loaded.title(), "Helpdesk");
    assert_eq!(loaded.subtitle(), DEFAULT_SUBTITLE);
}

#[test]
fn test_parse_error_names_the_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "reply_delay_ms = \"soon\"\n").expect("write config");

    let err = Config::load_from_path(&config_path).expect_err("parse should fail");
    let message = err.to_string();
    assert!(message.starts_with("Failed to parse config at "), "{message}");
    assert!(message.contains(&path_display(&config_path)), "{message}");
}

#[test]
fn test_set_and_unset_keys() {
    let mut config = Config::default();
    config.set_key("reply-delay-ms", " 500 ").expect("set delay");
    config.set_key("title", "Support").expect("set title");
    config.set_key("greeting", "Hello there").expect("set greeting");
    assert_eq!(config.reply_delay(), Duration::from_millis(500));
    assert_eq!(config.title(), "Support");
    assert_eq!(config.greeting(), Some("Hello there"));

    config.unset_key("reply-delay-ms").expect("unset delay");
    config.unset_key("greeting").expect("unset greeting");
    assert_eq!(config.reply_delay(), DEFAULT_REPLY_DELAY);
    assert_eq!(config.greeting(), None);
    assert_eq!(config.title(), "Support");
}

#[test]
fn test_invalid_keys_and_values_are_rejected() {
    let mut config = Config::default();
    assert_eq!(
        config.set_key("reply-delay-ms", "fast"),
        Err(ConfigKeyError::InvalidValue {
            key: "reply-delay-ms".to_string(),
            value: "fast".to_string(),
        })
    );
    assert_eq!(
        config.unset_key("theme"),
        Err(ConfigKeyError::UnknownKey("theme".to_string()))
    );
    assert_eq!(config, Config::default());
}

#[test]
fn test_blank_greeting_is_treated_as_unset() {
    let config = Config {
        greeting: Some("   ".to_string()),
        ..Default::default()
    };
    assert_eq!(config.greeting(), None);
}
