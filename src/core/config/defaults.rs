use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use crate::core::config::data::Config;
use crate::core::constants::{DEFAULT_REPLY_DELAY, DEFAULT_SUBTITLE, DEFAULT_TITLE};

/// Keys accepted by `chatshell set` / `chatshell unset`.
pub const CONFIG_KEYS: [&str; 4] = ["reply-delay-ms", "title", "subtitle", "greeting"];

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigKeyError {
    UnknownKey(String),
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKeyError::UnknownKey(key) => write!(
                f,
                "Unknown config key: {key} (expected one of: {})",
                CONFIG_KEYS.join(", ")
            ),
            ConfigKeyError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {key}: {value}")
            }
        }
    }
}

impl StdError for ConfigKeyError {}

impl Config {
    pub fn reply_delay(&self) -> Duration {
        self.reply_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REPLY_DELAY)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn subtitle(&self) -> &str {
        self.subtitle.as_deref().unwrap_or(DEFAULT_SUBTITLE)
    }

    pub fn greeting(&self) -> Option<&str> {
        self.greeting
            .as_deref()
            .map(str::trim)
            .filter(|greeting| !greeting.is_empty())
    }

    pub fn set_key(&mut self, key: &str, value: &str) -> Result<(), ConfigKeyError> {
        match key {
            "reply-delay-ms" => {
                let millis =
                    value
                        .trim()
                        .parse::<u64>()
                        .map_err(|_| ConfigKeyError::InvalidValue {
                            key: key.to_string(),
                            value: value.to_string(),
                        })?;
                self.reply_delay_ms = Some(millis);
            }
            "title" => self.title = Some(value.to_string()),
            "subtitle" => self.subtitle = Some(value.to_string()),
            "greeting" => self.greeting = Some(value.to_string()),
            _ => return Err(ConfigKeyError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn unset_key(&mut self, key: &str) -> Result<(), ConfigKeyError> {
        match key {
            "reply-delay-ms" => self.reply_delay_ms = None,
            "title" => self.title = None,
            "subtitle" => self.subtitle = None,
            "greeting" => self.greeting = None,
            _ => return Err(ConfigKeyError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}
