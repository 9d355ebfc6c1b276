//! Process-wide locations and working-directory changes.
//!
//! The current working directory belongs to the whole process. [`Pathname::chdir`]
//! and [`Pathname::chdir_within`] change it for every thread, so callers must
//! serialize them against anything else that resolves relative paths.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pathname::Pathname;

impl Pathname {
    /// The process's current working directory, cleaned.
    ///
    /// Returns `.` if the working directory cannot be read.
    #[must_use]
    pub fn current() -> Pathname {
        match env::current_dir() {
            Ok(cwd) => Pathname::new(cwd.to_string_lossy()),
            Err(e) => {
                log::debug!("Cannot read current directory: {e}");
                Pathname::new("")
            }
        }
    }

    /// The platform's temporary directory, as reported.
    #[must_use]
    pub fn temp_dir() -> Pathname {
        Pathname::from_path(&env::temp_dir())
    }

    /// The invoking user's home directory, or an empty pathname if unknown.
    #[must_use]
    pub fn home_dir() -> Pathname {
        home::home_dir().map_or_else(|| Pathname::raw(""), |home| Pathname::from_path(&home))
    }

    /// Make this path the process's working directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the path is missing or not a directory.
    pub fn chdir(&self) -> Result<()> {
        env::set_current_dir(self.as_path())?;
        Ok(())
    }

    /// Run `block` with this path as the working directory, then change back.
    ///
    /// The original directory is restored even if `block` panics. If the
    /// change itself fails, `block` is not called and nothing is restored.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the current directory cannot be read, the
    /// change fails, or the original directory cannot be restored.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pathname::Pathname;
    ///
    /// let listing = Pathname::new("/tmp")
    ///     .chdir_within(|_| Pathname::new(".").children_names())
    ///     .unwrap();
    /// ```
    pub fn chdir_within<F, R>(&self, block: F) -> Result<R>
    where
        F: FnOnce(&Pathname) -> R,
    {
        let guard = WorkdirGuard::enter(self.as_path())?;
        let value = block(self);
        guard.restore()?;
        Ok(value)
    }

    /// A child of this path with a random hexadecimal name that does not
    /// exist yet.
    ///
    /// Another process may still create the same name before it is used.
    #[must_use]
    pub fn append_random(&self) -> Pathname {
        loop {
            let candidate = self.append(&format!("{:016x}", rand::random::<u64>()));
            if !candidate.exist() {
                return candidate;
            }
            log::trace!("Random child {candidate} already exists, retrying");
        }
    }
}

/// Restores the recorded working directory when dropped.
struct WorkdirGuard {
    original: Option<PathBuf>,
}

impl WorkdirGuard {
    fn enter(target: &Path) -> io::Result<Self> {
        let original = env::current_dir()?;
        env::set_current_dir(target)?;
        Ok(Self {
            original: Some(original),
        })
    }

    fn restore(mut self) -> io::Result<()> {
        match self.original.take() {
            Some(original) => env::set_current_dir(original),
            None => Ok(()),
        }
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            if let Err(e) = env::set_current_dir(&original) {
                log::warn!(
                    "Failed to restore working directory {}: {e}",
                    original.display()
                );
            }
        }
    }
}
