//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::config::schema::Config;
use crate::error::Result;

/// Loads configuration from YAML documents.
///
/// # Examples
///
/// ```
/// use pathname::config::ConfigLoader;
///
/// let config = ConfigLoader::from_yaml_str("file_mode: \"0o600\"\n").unwrap();
/// assert_eq!(config.file_mode, 0o600);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read and
    /// [`Error::Configuration`](crate::Error::Configuration) if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        log::debug!("Parsing configuration file {}", path.display());
        Self::from_yaml_str(&contents)
    }

    /// Parse a YAML configuration document.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if the YAML is
    /// invalid.
    pub fn from_yaml_str(contents: &str) -> Result<Config> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}
