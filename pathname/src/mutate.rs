//! Filesystem operations that create, change or remove entries.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::config::{Config, DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};
use crate::error::{Error, Result};
use crate::pathname::Pathname;

impl Pathname {
    /// Create this directory and any missing parents with mode `0o755`.
    ///
    /// Succeeds without doing anything if the directory already exists.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a component exists but is not a directory, or
    /// if the directory cannot be created.
    pub fn mkpath(&self) -> Result<()> {
        self.mkpath_with_mode(DEFAULT_DIR_MODE)
    }

    /// Create this directory and any missing parents with `mode`.
    ///
    /// The mode is subject to the process umask and only applies to
    /// directories that did not exist yet.
    ///
    /// # Errors
    ///
    /// See [`Pathname::mkpath`].
    pub fn mkpath_with_mode(&self, mode: u32) -> Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        builder.create(self.as_path())?;
        Ok(())
    }

    /// [`Pathname::mkpath_with_mode`] using `config.dir_mode`.
    ///
    /// # Errors
    ///
    /// See [`Pathname::mkpath`].
    pub fn mkpath_with(&self, config: &Config) -> Result<()> {
        self.mkpath_with_mode(config.dir_mode)
    }

    /// Remove this path and everything beneath it.
    ///
    /// A missing path is not an error. Symlinks are removed, never followed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if an entry cannot be removed.
    pub fn rmtree(&self) -> Result<()> {
        let metadata = match fs::symlink_metadata(self.as_path()) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        log::debug!("Removing {self}");
        let removed = if metadata.is_dir() {
            fs::remove_dir_all(self.as_path())
        } else {
            fs::remove_file(self.as_path())
        };

        match removed {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    /// Replace the file's contents with `text`, creating it with mode
    /// `0o644` if needed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened or written, for
    /// example because the path is a directory.
    pub fn write(&self, text: &str) -> Result<()> {
        self.write_bytes_with_mode(text.as_bytes(), DEFAULT_FILE_MODE)
    }

    /// Byte-oriented [`Pathname::write`].
    ///
    /// # Errors
    ///
    /// See [`Pathname::write`].
    pub fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.write_bytes_with_mode(bytes, DEFAULT_FILE_MODE)
    }

    /// [`Pathname::write`] creating new files with `config.file_mode`.
    ///
    /// # Errors
    ///
    /// See [`Pathname::write`].
    pub fn write_with(&self, config: &Config, text: &str) -> Result<()> {
        self.write_bytes_with_mode(text.as_bytes(), config.file_mode)
    }

    fn write_bytes_with_mode(&self, bytes: &[u8], mode: u32) -> Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let mut file = options.open(self.as_path())?;
        file.write_all(bytes)?;
        Ok(())
    }

    /// The whole file as text.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file is missing, unreadable or not UTF-8.
    pub fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(self.as_path())?)
    }

    /// The whole file as bytes.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file is missing or unreadable.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(fs::read(self.as_path())?)
    }

    /// Rename this entry to `target`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the rename fails, for example because the
    /// target's parent is missing or the target is on another filesystem.
    pub fn move_to(&self, target: &Pathname) -> Result<()> {
        log::debug!("Moving {self} to {target}");
        fs::rename(self.as_path(), target.as_path())?;
        Ok(())
    }

    /// Copy to `target` as a directory tree if `target` is currently a
    /// directory, otherwise as a single file.
    ///
    /// # Errors
    ///
    /// See [`Pathname::copy_dir_to`] and [`Pathname::copy_file_to`].
    pub fn copy_to(&self, target: &Pathname) -> Result<()> {
        if target.is_directory() {
            self.copy_dir_to(target)
        } else {
            self.copy_file_to(target)
        }
    }

    /// Copy this regular file's contents and permission bits to `target`.
    ///
    /// Never overwrites: the target must not exist.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the source cannot be read
    /// - [`Error::SourceIsDirectory`] if the source is a directory
    /// - [`Error::SourceNotRegularFile`] if the source is some other
    ///   non-regular entry
    /// - [`Error::TargetExists`] if the target exists
    ///
    /// A failure while streaming the contents may leave a truncated target.
    pub fn copy_file_to(&self, target: &Pathname) -> Result<()> {
        let metadata = fs::metadata(self.as_path())?;
        if !metadata.is_file() {
            if metadata.is_dir() {
                return Err(Error::SourceIsDirectory {
                    path: self.as_path().to_path_buf(),
                });
            }
            return Err(Error::SourceNotRegularFile {
                path: self.as_path().to_path_buf(),
            });
        }
        if target.exist() {
            return Err(Error::TargetExists {
                path: target.as_path().to_path_buf(),
            });
        }

        log::debug!("Copying file {self} to {target}");
        let mut source = File::open(self.as_path())?;

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(crate::query::permission_bits(&metadata));
        }
        let mut destination = options.open(target.as_path())?;

        io::copy(&mut source, &mut destination)?;
        destination.set_permissions(metadata.permissions())?;
        Ok(())
    }

    /// Create a symbolic link at `target` that points at this path.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if `target` exists or the link cannot be made.
    pub fn symlink_to(&self, target: &Pathname) -> Result<()> {
        create_symlink(self.as_path(), target.as_path(), self.is_directory())?;
        Ok(())
    }

    /// Set the permission bits of the entry.
    ///
    /// Outside Unix only the owner-write bit is honored, as a read-only
    /// toggle.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the entry is missing or the caller lacks
    /// privilege.
    #[cfg(unix)]
    pub fn chmod(&self, mode: u32) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(self.as_path(), fs::Permissions::from_mode(mode))?;
        Ok(())
    }

    /// Set the permission bits of the entry.
    ///
    /// Outside Unix only the owner-write bit is honored, as a read-only
    /// toggle.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the entry is missing or the caller lacks
    /// privilege.
    #[cfg(not(unix))]
    pub fn chmod(&self, mode: u32) -> Result<()> {
        let mut permissions = fs::metadata(self.as_path())?.permissions();
        permissions.set_readonly(mode & 0o200 == 0);
        fs::set_permissions(self.as_path(), permissions)?;
        Ok(())
    }

    /// Set the owning user of the entry, leaving the group unchanged.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the entry is missing or the caller lacks
    /// privilege.
    #[cfg(unix)]
    pub fn chown(&self, uid: u32) -> Result<()> {
        std::os::unix::fs::chown(self.as_path(), Some(uid), None)?;
        Ok(())
    }

    /// Set the owning user of the entry, leaving the group unchanged.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::Unsupported`] on this platform.
    #[cfg(not(unix))]
    pub fn chown(&self, _uid: u32) -> Result<()> {
        Err(Error::Unsupported { operation: "chown" })
    }
}

/// Create a symlink at `link` pointing at `original`.
///
/// `original_is_dir` picks the link flavor on Windows and is ignored
/// elsewhere.
#[cfg(unix)]
pub(crate) fn create_symlink(original: &Path, link: &Path, _original_is_dir: bool) -> io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
pub(crate) fn create_symlink(original: &Path, link: &Path, original_is_dir: bool) -> io::Result<()> {
    if original_is_dir {
        std::os::windows::fs::symlink_dir(original, link)
    } else {
        std::os::windows::fs::symlink_file(original, link)
    }
}

#[cfg(not(any(unix, windows)))]
pub(crate) fn create_symlink(_original: &Path, _link: &Path, _original_is_dir: bool) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}
