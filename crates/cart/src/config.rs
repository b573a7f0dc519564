//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ATELIER_CART_DIR` - Directory for file-backed cart storage (default: `.atelier`)
//! - `ATELIER_LOG` - Tracing filter directive, read by the binary's
//!   subscriber setup rather than here (default: `info`)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_CART_DIR: &str = ".atelier";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart application configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory holding the persisted cart file.
    pub storage_dir: PathBuf,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// The caller is expected to have loaded any `.env` file already
    /// (the binary calls `dotenvy::dotenv()` before this).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_dir = get_nonempty_or_default("ATELIER_CART_DIR", DEFAULT_CART_DIR)?;

        Ok(Self {
            storage_dir: PathBuf::from(storage_dir),
        })
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_CART_DIR),
        }
    }
}

/// Get an environment variable with a default, rejecting empty values.
fn get_nonempty_or_default(key: &str, default: &str) -> Result<String, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        )),
        Ok(value) => Ok(value),
        Err(_) => Ok(default.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CartConfig::default();
        assert_eq!(config.storage_dir, PathBuf::from(".atelier"));
    }

    #[test]
    fn test_get_nonempty_or_default_missing() {
        let value = get_nonempty_or_default("ATELIER_TEST_UNSET_VAR", "fallback").unwrap();
        assert_eq!(value, "fallback");
    }
}
