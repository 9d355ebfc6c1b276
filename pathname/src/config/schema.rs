//! Configuration schema definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Mode for directories created by `mkpath`.
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// Mode for files created by `write`.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// How directory trees are copied.
///
/// # Examples
///
/// ```
/// use pathname::CopyBackend;
///
/// assert_eq!(CopyBackend::default(), CopyBackend::Command);
/// assert_eq!("native".parse::<CopyBackend>().unwrap(), CopyBackend::Native);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyBackend {
    /// Run the host's recursive copy tool (`cp -r` or `xcopy`).
    #[default]
    Command,
    /// Walk the source tree and copy entry by entry in-process.
    Native,
}

impl fmt::Display for CopyBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command => write!(f, "command"),
            Self::Native => write!(f, "native"),
        }
    }
}

impl FromStr for CopyBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "command" => Ok(Self::Command),
            "native" => Ok(Self::Native),
            _ => Err(Error::Validation {
                field: "copy_backend".into(),
                message: format!("Invalid copy backend: '{s}' (expected command or native)"),
            }),
        }
    }
}

/// Complete configuration structure.
///
/// Modes are written in YAML either as plain integers or as octal strings
/// (`"755"`, `"0755"` or `"0o755"`).
///
/// # Examples
///
/// ```
/// use pathname::{Config, CopyBackend};
///
/// let config = Config {
///     copy_backend: CopyBackend::Native,
///     ..Default::default()
/// };
/// assert_eq!(config.dir_mode, 0o755);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Backend used by `copy_dir_to_with_config`.
    pub copy_backend: CopyBackend,

    /// Mode for directories created by `mkpath_with`.
    #[serde(
        serialize_with = "serialize_mode",
        deserialize_with = "deserialize_mode"
    )]
    pub dir_mode: u32,

    /// Mode for files created by `write_with`.
    #[serde(
        serialize_with = "serialize_mode",
        deserialize_with = "deserialize_mode"
    )]
    pub file_mode: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            copy_backend: CopyBackend::default(),
            dir_mode: DEFAULT_DIR_MODE,
            file_mode: DEFAULT_FILE_MODE,
        }
    }
}

/// Parse an octal permission mode such as `755`, `0755` or `0o755`.
///
/// # Errors
///
/// Returns a validation error naming `field` if `s` is not octal.
///
/// # Examples
///
/// ```
/// use pathname::config::schema::parse_mode;
///
/// assert_eq!(parse_mode("dir_mode", "0o755").unwrap(), 0o755);
/// assert_eq!(parse_mode("dir_mode", "0700").unwrap(), 0o700);
/// assert!(parse_mode("dir_mode", "789").is_err());
/// ```
pub fn parse_mode(field: &str, s: &str) -> Result<u32, Error> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0o")
        .or_else(|| trimmed.strip_prefix("0O"))
        .unwrap_or(trimmed);
    u32::from_str_radix(digits, 8).map_err(|_| Error::Validation {
        field: field.into(),
        message: format!("Invalid octal mode: '{s}'"),
    })
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_mode<S>(mode: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("0o{mode:o}"))
}

fn deserialize_mode<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Helper {
        Integer(u32),
        String(String),
    }

    match Helper::deserialize(deserializer)? {
        Helper::Integer(mode) => Ok(mode),
        Helper::String(s) => parse_mode("mode", &s).map_err(|e| D::Error::custom(e.to_string())),
    }
}
