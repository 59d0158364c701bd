//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::book::DEFAULT_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use crate::repositories::DEFAULT_BOOK_PATH;
use std::env;
use std::path::PathBuf;

/// Largest accepted birthday window; one full year ahead.
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is loaded from and saved to
    pub book_path: PathBuf,

    /// Days ahead covered by `birthdays` (default: 7)
    pub birthday_window_days: u32,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Address book file (default: `addressbook.json`)
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming-birthday window, 0-365 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; dotenvy writes nothing to stdout.
        let _ = dotenvy::dotenv();

        let book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let birthday_window_days = Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 3] = ["ADDRESS_BOOK_PATH", "BIRTHDAY_WINDOW_DAYS", "LOG_LEVEL"];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.book_path, PathBuf::from("addressbook.json"));
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();
        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from(DEFAULT_BOOK_PATH));
        assert_eq!(config.birthday_window_days, DEFAULT_WINDOW_DAYS);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PATH", "/tmp/contacts.json");
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.birthday_window_days, 14);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_empty_book_path() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PATH", "  ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "ADDRESS_BOOK_PATH"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_window_out_of_range() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "400");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_WINDOW_DAYS")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u32_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32_INVALID", "-3");

        let result = Config::parse_env_u32("TEST_U32_INVALID", 7);
        assert!(result.is_err());

        let result = Config::parse_env_u32("NONEXISTENT_U32", 7);
        assert_eq!(result.unwrap(), 7);
    }
}
