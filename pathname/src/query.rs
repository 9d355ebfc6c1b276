//! Read-only filesystem operations.
//!
//! Predicates collapse every `stat` failure, permission errors included, to
//! `false`. Enumeration helpers either propagate the error ([`Pathname::children`])
//! or swallow it ([`Pathname::children_names`], [`Pathname::glob`]).

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use glob::{MatchOptions, Pattern};
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;
use crate::lexical;
use crate::pattern;
use crate::pathname::Pathname;

/// What [`Pathname::walk`] should do after the visitor returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkControl {
    /// Keep walking.
    #[default]
    Continue,
    /// On a directory, do not descend into it. On any other entry, skip the
    /// remaining entries of its parent directory.
    SkipDir,
    /// Stop the walk. [`Pathname::walk`] returns `Ok(())`.
    SkipAll,
}

impl Pathname {
    /// True if an entry resolves at this path (symlinks followed).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// assert!(!Pathname::new("/definitely/not/here").exist());
    /// ```
    #[must_use]
    pub fn exist(&self) -> bool {
        fs::metadata(self.as_path()).is_ok()
    }

    /// True if the path resolves to a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        fs::metadata(self.as_path()).is_ok_and(|m| m.is_dir())
    }

    /// True if the path resolves to anything other than a directory.
    #[must_use]
    pub fn is_file(&self) -> bool {
        fs::metadata(self.as_path()).is_ok_and(|m| !m.is_dir())
    }

    /// True if the entry itself (not followed) is a regular file.
    #[must_use]
    pub fn is_regular_file(&self) -> bool {
        fs::symlink_metadata(self.as_path()).is_ok_and(|m| m.file_type().is_file())
    }

    /// True if the entry itself (not followed) is a symbolic link.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        fs::symlink_metadata(self.as_path()).is_ok_and(|m| m.file_type().is_symlink())
    }

    /// Permission bits of the resolved entry, or `0` if it cannot be read.
    #[must_use]
    pub fn perm(&self) -> u32 {
        fs::metadata(self.as_path()).map_or(0, |m| permission_bits(&m))
    }

    /// Resolve to an absolute, cleaned path against the current directory.
    ///
    /// Returns an empty pathname if the current directory cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// let p = Pathname::new("/demo/b/c");
    /// assert_eq!(p.absolute_path(), p);
    /// ```
    #[must_use]
    pub fn absolute_path(&self) -> Pathname {
        if self.is_absolute() {
            return Pathname::new(self.as_str());
        }
        match std::env::current_dir() {
            Ok(cwd) => Pathname::raw(lexical::join(&[&cwd.to_string_lossy(), self.as_str()])),
            Err(e) => {
                log::debug!("Cannot resolve {self} against current directory: {e}");
                Pathname::raw("")
            }
        }
    }

    /// Immediate entries of this directory, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the path is not a readable directory.
    pub fn children(&self) -> Result<Vec<Pathname>> {
        let names = self.sorted_entry_names()?;
        Ok(names.iter().map(|name| self.append(name)).collect())
    }

    /// Names of the immediate entries of this directory, sorted.
    ///
    /// Returns an empty vector if the directory cannot be read.
    #[must_use]
    pub fn children_names(&self) -> Vec<String> {
        self.sorted_entry_names().unwrap_or_else(|e| {
            log::debug!("Cannot list {self}: {e}");
            Vec::new()
        })
    }

    fn sorted_entry_names(&self) -> io::Result<Vec<String>> {
        let mut names = fs::read_dir(self.as_path())?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    /// Walk the tree rooted at this path depth-first, root included.
    ///
    /// Entries of a directory are visited in lexical order and symlinks are
    /// not followed. The visitor gets the entry's pathname together with its
    /// directory entry, or the error met while reaching it, and decides via
    /// [`WalkControl`] how to go on.
    ///
    /// # Errors
    ///
    /// Returns the first error the visitor returns. Errors reaching entries
    /// are handed to the visitor rather than returned.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pathname::{Pathname, WalkControl};
    ///
    /// let mut files = Vec::new();
    /// Pathname::new("src").walk(|path, entry| {
    ///     if entry.is_ok_and(|e| e.file_type().is_file()) {
    ///         files.push(path.clone());
    ///     }
    ///     Ok(WalkControl::Continue)
    /// }).unwrap();
    /// ```
    pub fn walk<F>(&self, mut visitor: F) -> Result<()>
    where
        F: FnMut(&Pathname, std::result::Result<&DirEntry, &walkdir::Error>) -> Result<WalkControl>,
    {
        let mut entries = WalkDir::new(self.as_path())
            .follow_links(false)
            .follow_root_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(item) = entries.next() {
            let control = match &item {
                Ok(entry) => visitor(&self.walked(entry.path()), Ok(entry))?,
                Err(err) => {
                    let path = err.path().map_or_else(|| self.clone(), |p| self.walked(p));
                    visitor(&path, Err(err))?
                }
            };
            match control {
                WalkControl::Continue => {}
                WalkControl::SkipDir => entries.skip_current_dir(),
                WalkControl::SkipAll => break,
            }
        }
        Ok(())
    }

    /// Rebuild a walked path on top of this one so that walking `.` yields
    /// `a/b` rather than `./a/b`.
    fn walked(&self, path: &Path) -> Pathname {
        match path.strip_prefix(self.as_path()) {
            Ok(rel) if rel.as_os_str().is_empty() => self.clone(),
            Ok(rel) => self.append(&rel.to_string_lossy()),
            Err(_) => Pathname::from_path(path),
        }
    }

    /// Match a shell-style pattern against entries under this path.
    ///
    /// `*`, `?` and `[...]` match within a single path element; none of them
    /// crosses a separator, and `**` is the same as `*`. `[^...]` negates a
    /// class and, except on Windows, `\` escapes the next character.
    /// Results come back in lexical order. A malformed pattern yields no
    /// matches.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pathname::Pathname;
    ///
    /// for source in Pathname::new("src").glob("*/[^_]*.rs") {
    ///     println!("{source}");
    /// }
    /// ```
    #[must_use]
    pub fn glob(&self, pattern: &str) -> Vec<Pathname> {
        let translated = match pattern::translate(pattern) {
            Ok(Some(translated)) => translated,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::debug!("{e}");
                return Vec::new();
            }
        };
        let full = lexical::join(&[&Pattern::escape(self.as_str()), &translated]);
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        match glob::glob_with(&full, options) {
            Ok(paths) => paths
                .filter_map(|entry| match entry {
                    Ok(path) => Some(Pathname::from_path(&path)),
                    Err(e) => {
                        log::debug!("Skipping unreadable glob entry: {e}");
                        None
                    }
                })
                .collect(),
            Err(e) => {
                log::debug!("Invalid glob pattern {pattern:?}: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(unix)]
pub(crate) fn permission_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o777
}

#[cfg(not(unix))]
pub(crate) fn permission_bits(metadata: &Metadata) -> u32 {
    let base = if metadata.permissions().readonly() {
        0o444
    } else {
        0o666
    };
    if metadata.is_dir() {
        base | 0o111
    } else {
        base
    }
}
