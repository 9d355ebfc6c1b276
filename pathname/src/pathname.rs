//! The `Pathname` value type and its lexical operations.
//!
//! Filesystem operations live in sibling modules as further `impl` blocks;
//! everything here is pure string manipulation.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::lexical;

/// An immutable path string with convenience operations.
///
/// Two values are equal iff their strings are equal, character for
/// character. `Pathname::new("a/./b")` and `Pathname::raw("a/./b")` therefore
/// compare unequal even though they name the same entry.
///
/// # Examples
///
/// ```
/// use pathname::Pathname;
///
/// let p = Pathname::new("demo/b/c/./");
/// assert_eq!(p.as_str(), "demo/b/c");
/// assert_eq!(p.parent().as_str(), "demo/b");
/// assert_eq!(p.append("file.txt").extension(), ".txt");
///
/// assert_ne!(Pathname::raw("demo/b/c/./"), p);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pathname {
    path: String,
}

impl Pathname {
    /// Create a pathname from the lexically cleaned form of `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// assert_eq!(Pathname::new("./").as_str(), ".");
    /// assert_eq!(Pathname::new("demo/b/c/.").as_str(), "demo/b/c");
    /// ```
    #[must_use]
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: lexical::clean(path.as_ref()),
        }
    }

    /// Create a pathname holding `path` exactly as given.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// assert_eq!(Pathname::raw("demo/b/c/./").as_str(), "demo/b/c/./");
    /// ```
    #[must_use]
    pub fn raw(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Create a raw pathname from a platform path, replacing any invalid
    /// UTF-8 sequences.
    pub(crate) fn from_path(path: &Path) -> Self {
        Self::raw(path.to_string_lossy().into_owned())
    }

    /// The wrapped string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The wrapped string as a platform path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// Join `segment` under this path and clean the result.
    ///
    /// A rooted `segment` is joined under this path rather than replacing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// let root = Pathname::new("/");
    /// assert_eq!(root.append("bbb").as_str(), "/bbb");
    /// assert_eq!(root.append("/bbb/ccc").as_str(), "/bbb/ccc");
    /// ```
    #[must_use]
    pub fn append(&self, segment: &str) -> Self {
        Self::raw(lexical::join(&[&self.path, segment]))
    }

    /// The directory containing this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// assert_eq!(Pathname::new("demo/b/c").parent().as_str(), "demo/b");
    /// assert_eq!(Pathname::new(".").parent().as_str(), ".");
    /// assert_eq!(Pathname::new("/").parent().as_str(), "/");
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        Self::raw(lexical::dir(&self.path))
    }

    /// The final path element.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// assert_eq!(Pathname::new("/abc/efg").basename(), "efg");
    /// assert_eq!(Pathname::new(".").basename(), ".");
    /// ```
    #[must_use]
    pub fn basename(&self) -> String {
        lexical::base(&self.path)
    }

    /// The extension of the final element including its dot, or `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// assert_eq!(Pathname::new("demo.123").extension(), ".123");
    /// assert_eq!(Pathname::new("/demo").extension(), "");
    /// ```
    #[must_use]
    pub fn extension(&self) -> &str {
        lexical::ext(&self.path)
    }

    /// True if the path is rooted.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        lexical::is_absolute(&self.path)
    }
}

impl Default for Pathname {
    fn default() -> Self {
        Self::raw(".")
    }
}

impl fmt::Display for Pathname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<Path> for Pathname {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<str> for Pathname {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl From<Pathname> for PathBuf {
    fn from(pathname: Pathname) -> Self {
        PathBuf::from(pathname.path)
    }
}

impl From<Pathname> for String {
    fn from(pathname: Pathname) -> Self {
        pathname.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cleans() {
        assert_eq!(Pathname::new("./"), Pathname::raw("."));
        assert_eq!(Pathname::new("demo/b/c/.").as_str(), "demo/b/c");
        assert_eq!(Pathname::new("demo/b/c/./").as_str(), "demo/b/c");
        assert_eq!(Pathname::new("").as_str(), ".");
    }

    #[test]
    fn test_raw_preserves() {
        assert_eq!(Pathname::raw("demo/b/c/./").as_str(), "demo/b/c/./");
        assert_eq!(Pathname::raw("").as_str(), "");
    }

    #[test]
    fn test_equality_is_string_equality() {
        assert_ne!(Pathname::new("a/b/"), Pathname::raw("a/b/"));
        assert_eq!(Pathname::new("a/b/"), Pathname::raw("a/b"));
    }

    #[test]
    fn test_display_matches_as_str() {
        let p = Pathname::new("demo/b/c");
        assert_eq!(p.to_string(), "demo/b/c");
        assert_eq!(format!("{p}"), p.as_str());
    }

    #[test]
    fn test_append() {
        let p = Pathname::new("/");
        assert_eq!(p.append("bbb"), Pathname::raw("/bbb"));
        assert_eq!(p.append("/bbb/ccc"), Pathname::raw("/bbb/ccc"));
        assert_eq!(Pathname::new("a").append("../b"), Pathname::raw("b"));
    }

    #[test]
    fn test_parent() {
        assert_eq!(Pathname::new("demo/b/c").parent().as_str(), "demo/b");
        assert_eq!(Pathname::new(".").parent().as_str(), ".");
        assert_eq!(Pathname::new("/").parent().as_str(), "/");
    }

    #[test]
    fn test_append_then_parent_round_trips() {
        let base = Pathname::new("demo/b");
        assert_eq!(base.append("child").parent(), base);
    }

    #[test]
    fn test_basename() {
        assert_eq!(Pathname::new("/abc/efg").basename(), "efg");
        assert_eq!(Pathname::new("/abc/efg/demo.123").basename(), "demo.123");
        assert_eq!(Pathname::new(".").basename(), ".");
    }

    #[test]
    fn test_extension() {
        assert_eq!(Pathname::new("demo.123").extension(), ".123");
        assert_eq!(Pathname::new("/demo").extension(), "");
    }

    #[test]
    #[cfg(unix)]
    fn test_is_absolute() {
        assert!(Pathname::new("/abc").is_absolute());
        assert!(!Pathname::new("../abc").is_absolute());
        assert!(!Pathname::new(".123").is_absolute());
    }

    #[test]
    fn test_conversions() {
        let p = Pathname::new("a/b");
        let as_path: &Path = p.as_ref();
        assert_eq!(as_path, Path::new("a/b"));
        assert_eq!(PathBuf::from(p.clone()), PathBuf::from("a/b"));
        assert_eq!(String::from(p), "a/b");
        assert_eq!(Pathname::default().as_str(), ".");
    }

    #[test]
    fn test_serde_is_transparent_and_raw() {
        let p = Pathname::new("/tmp/x");
        let yaml = serde_yaml::to_string(&p).unwrap();
        assert_eq!(yaml.trim(), "/tmp/x");

        let back: Pathname = serde_yaml::from_str("a/./b/").unwrap();
        assert_eq!(back.as_str(), "a/./b/");
    }
}
