//! Common test utilities for integration tests.

use pathname::Pathname;
use tempfile::TempDir;

/// An isolated scratch directory removed when the value is dropped.
pub struct Scratch {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// The scratch directory as a pathname
    pub base: Pathname,
}

#[allow(dead_code)]
impl Scratch {
    /// Create a new empty scratch directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let base = Pathname::new(temp_dir.path().to_string_lossy());
        Self { temp_dir, base }
    }

    /// Create empty files (and their parent directories) under the base.
    pub fn with_files(files: &[&str]) -> Self {
        let scratch = Self::new();
        for file in files {
            let f = scratch.base.append(file);
            f.parent().mkpath().expect("Failed to create parent");
            f.write("").expect("Failed to create file");
        }
        scratch
    }
}

/// Render pathnames as strings for comparisons.
#[allow(dead_code)]
pub fn to_strings(paths: &[Pathname]) -> Vec<String> {
    paths.iter().map(ToString::to_string).collect()
}
