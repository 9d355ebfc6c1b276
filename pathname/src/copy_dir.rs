//! Recursive directory copy.
//!
//! [`CopyBackend::Command`] hands the work to the host's copy tool (`cp -r`
//! on Unix, `xcopy` on Windows) and reports its stderr on failure.
//! [`CopyBackend::Native`] walks the tree in-process and recreates
//! directories, regular files and symlinks.

use std::fs::{self, Permissions};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use walkdir::WalkDir;

use crate::config::{Config, CopyBackend};
use crate::error::{Error, Result};
use crate::mutate::create_symlink;
use crate::pathname::Pathname;

impl Pathname {
    /// Copy this directory tree to `target` with the default backend.
    ///
    /// `target` must not exist; its parent must.
    ///
    /// # Errors
    ///
    /// - [`Error::SourceNotDirectory`] if this path is not a directory
    /// - [`Error::TargetExists`] if `target` exists
    /// - [`Error::TargetInsideSource`] if `target` would land inside this
    ///   directory
    /// - [`Error::CopyCommandFailed`] if the copy tool exits unsuccessfully
    /// - [`Error::Io`] for any other failure
    pub fn copy_dir_to(&self, target: &Pathname) -> Result<()> {
        self.copy_dir_to_with(target, CopyBackend::default())
    }

    /// [`Pathname::copy_dir_to`] using `config.copy_backend`.
    ///
    /// # Errors
    ///
    /// See [`Pathname::copy_dir_to`].
    pub fn copy_dir_to_with_config(&self, target: &Pathname, config: &Config) -> Result<()> {
        self.copy_dir_to_with(target, config.copy_backend)
    }

    /// [`Pathname::copy_dir_to`] with an explicit backend.
    ///
    /// # Errors
    ///
    /// See [`Pathname::copy_dir_to`].
    pub fn copy_dir_to_with(&self, target: &Pathname, backend: CopyBackend) -> Result<()> {
        if !self.is_directory() {
            return Err(Error::SourceNotDirectory {
                path: self.as_path().to_path_buf(),
            });
        }
        if target.exist() {
            return Err(Error::TargetExists {
                path: target.as_path().to_path_buf(),
            });
        }
        if let Some(source_dir) = self.contains_target(target) {
            return Err(Error::TargetInsideSource {
                source_dir,
                target: target.as_path().to_path_buf(),
            });
        }

        log::debug!("Copying directory {self} to {target} ({backend})");
        match backend {
            CopyBackend::Command => copy_with_command(self.as_path(), target.as_path()),
            CopyBackend::Native => copy_tree(self.as_path(), target.as_path()),
        }
    }

    /// The resolved source directory if `target` would be created inside it.
    ///
    /// Both sides are resolved through symlinks. A target whose parent does
    /// not resolve is left for the copy itself to reject.
    fn contains_target(&self, target: &Pathname) -> Option<PathBuf> {
        let source = fs::canonicalize(self.as_path()).ok()?;
        let parent = fs::canonicalize(target.parent().as_path()).ok()?;
        parent
            .join(target.basename())
            .starts_with(&source)
            .then_some(source)
    }
}

#[cfg(unix)]
#[allow(clippy::unnecessary_wraps)]
fn recursive_copy_command(source: &Path, target: &Path) -> Result<Command> {
    let mut command = Command::new("cp");
    command.arg("-r").arg(source).arg(target);
    Ok(command)
}

#[cfg(windows)]
#[allow(clippy::unnecessary_wraps)]
fn recursive_copy_command(source: &Path, target: &Path) -> Result<Command> {
    let mut command = Command::new(r"C:\Windows\System32\cmd.exe");
    command
        .args(["/C", "xcopy"])
        .arg(source)
        .arg(target)
        .arg("/E/H/C/I");
    Ok(command)
}

#[cfg(not(any(unix, windows)))]
fn recursive_copy_command(_source: &Path, _target: &Path) -> Result<Command> {
    Err(Error::Unsupported {
        operation: "command-based directory copy",
    })
}

fn copy_with_command(source: &Path, target: &Path) -> Result<()> {
    let output = recursive_copy_command(source, target)?
        .stdin(Stdio::null())
        .output()?;

    if !output.status.success() {
        return Err(Error::CopyCommandFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

/// Recreate the tree at `source` under `target`.
///
/// Directory permissions are applied after their contents are written so a
/// read-only source directory can still be populated.
fn copy_tree(source: &Path, target: &Path) -> Result<()> {
    let mut directories: Vec<(PathBuf, Permissions)> = Vec::new();

    for entry in WalkDir::new(source).follow_links(false) {
        let entry = entry.map_err(io::Error::from)?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let destination = target.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir(&destination)?;
            directories.push((destination, entry.metadata().map_err(io::Error::from)?.permissions()));
        } else if file_type.is_symlink() {
            let link_target = fs::read_link(entry.path())?;
            create_symlink(&link_target, &destination, entry.path().is_dir())?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &destination)?;
        } else {
            log::debug!("Skipping special entry {}", entry.path().display());
        }
    }

    for (directory, permissions) in directories.into_iter().rev() {
        fs::set_permissions(&directory, permissions)?;
    }
    Ok(())
}
