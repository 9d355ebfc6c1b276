//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Highest value a permission mode may take (setuid, setgid, sticky, rwx).
const MAX_MODE: u32 = 0o7777;

/// Owner write and execute bits; without them `mkpath` cannot create
/// anything beneath the directories it just made.
const OWNER_WX: u32 = 0o300;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathname::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { dir_mode: 0o644, ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range modes, or a directory mode
    /// that does not let the owner create entries inside it.
    pub fn validate(config: &Config) -> Result<()> {
        Self::validate_mode("dir_mode", config.dir_mode)?;
        Self::validate_mode("file_mode", config.file_mode)?;

        if config.dir_mode & OWNER_WX != OWNER_WX {
            return Err(Error::Validation {
                field: "dir_mode".into(),
                message: format!(
                    "Mode 0o{:o} must grant the owner write and execute permission",
                    config.dir_mode
                ),
            });
        }

        Ok(())
    }

    fn validate_mode(field: &str, mode: u32) -> Result<()> {
        if mode > MAX_MODE {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Mode 0o{mode:o} exceeds 0o{MAX_MODE:o}"),
            });
        }
        Ok(())
    }
}
