//! Configuration for the pathname library.
//!
//! A [`Config`] carries the defaults that the `*_with` operations apply:
//! the mode for created directories, the mode for written files and the
//! backend used to copy directory trees. It can be built in three layers,
//! later layers winning:
//!
//! 1. Built-in defaults (`0o755`, `0o644`, [`CopyBackend::Command`])
//! 2. A YAML file
//! 3. Environment variables (`PATHNAME_*`)
//!
//! # Examples
//!
//! ```
//! use pathname::config::{ConfigLoader, CopyBackend};
//!
//! let config = ConfigLoader::from_yaml_str("copy_backend: native\ndir_mode: \"0o700\"\n").unwrap();
//! assert_eq!(config.copy_backend, CopyBackend::Native);
//! assert_eq!(config.dir_mode, 0o700);
//! assert_eq!(config.file_mode, 0o644);
//! ```

pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

use std::path::Path;

pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{Config, CopyBackend, DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};
pub use validator::ConfigValidator;

use crate::error::Result;

impl Config {
    /// Build a configuration from defaults, an optional YAML file and the
    /// environment, then validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if an
    /// environment variable holds an invalid value, or if validation fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pathname::Config;
    /// use std::path::Path;
    ///
    /// let config = Config::load(Some(Path::new("pathname.yaml"))).unwrap();
    /// ```
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => ConfigLoader::load_file(path)?,
            None => Config::default(),
        };
        EnvironmentConfig::apply_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;
        log::debug!("Loaded configuration: {config:?}");
        Ok(config)
    }
}
