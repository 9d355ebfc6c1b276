//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//! - `PATHNAME_COPY_BACKEND`: `command` or `native`
//! - `PATHNAME_DIR_MODE`: octal mode for created directories
//! - `PATHNAME_FILE_MODE`: octal mode for written files

use std::env;

use crate::config::schema::{parse_mode, Config};
use crate::error::Result;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathname::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `PATHNAME_*` environment variables on top of `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(backend) = env::var("PATHNAME_COPY_BACKEND") {
            config.copy_backend = backend.parse()?;
        }

        if let Ok(mode) = env::var("PATHNAME_DIR_MODE") {
            config.dir_mode = parse_mode("PATHNAME_DIR_MODE", &mode)?;
        }

        if let Ok(mode) = env::var("PATHNAME_FILE_MODE") {
            config.file_mode = parse_mode("PATHNAME_FILE_MODE", &mode)?;
        }

        Ok(())
    }
}
