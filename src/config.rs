//! Configuration management for the registration validator.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is honored if present.

use crate::error::{ConfigError, ConfigResult};
use chrono::{Datelike, Local};
use std::env;

/// Configuration for the registration validator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Year the age check is computed against (default: current local year)
    pub reference_year: Option<i32>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `FORM_REFERENCE_YEAR`: Year used for the age check (default: current year)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let reference_year = Self::parse_env_year("FORM_REFERENCE_YEAR")?;
        let log_level = Self::log_level_from_env();

        Ok(Config {
            reference_year,
            log_level,
        })
    }

    /// Read only `LOG_LEVEL` (default: "error").
    ///
    /// Never fails, so logging can be set up before the rest of the
    /// configuration is validated.
    pub fn log_level_from_env() -> String {
        let _ = dotenvy::dotenv();
        env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string())
    }

    /// The year the age check should use.
    pub fn current_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }

    /// Parse an optional environment variable as a four-digit year.
    fn parse_env_year(var_name: &str) -> ConfigResult<Option<i32>> {
        match env::var(var_name) {
            Ok(val) => match val.trim().parse::<i32>() {
                Ok(year) if (1000..=9999).contains(&year) => Ok(Some(year)),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a year between 1000 and 9999, got: {}", val),
                }),
            },
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            reference_year: None,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
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
        assert_eq!(config.reference_year, None);
        assert_eq!(config.log_level, "error");
        assert_eq!(config.current_year(), Local::now().year());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("FORM_REFERENCE_YEAR", "2030");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.reference_year, Some(2030));
        assert_eq!(config.current_year(), 2030);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_year() {
        let mut guard = EnvGuard::new();
        guard.set("FORM_REFERENCE_YEAR", "next year");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "FORM_REFERENCE_YEAR");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_log_level_ignores_invalid_year() {
        let mut guard = EnvGuard::new();
        guard.set("FORM_REFERENCE_YEAR", "next year");
        guard.set("LOG_LEVEL", "warn");

        assert_eq!(Config::log_level_from_env(), "warn");
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_year_bounds() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_YEAR_SHORT", "999");
        guard.set("TEST_YEAR_OK", " 2024 ");

        assert!(Config::parse_env_year("TEST_YEAR_SHORT").is_err());
        assert_eq!(Config::parse_env_year("TEST_YEAR_OK").unwrap(), Some(2024));
        assert_eq!(Config::parse_env_year("TEST_YEAR_NONEXISTENT").unwrap(), None);
    }
}
