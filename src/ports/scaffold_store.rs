//! Write access to the generated scaffold tree.

use std::path::Path;

use crate::domain::AppError;

/// Port for materializing generated files.
///
/// `path` arguments are relative to the store's output root. `source`
/// arguments name directories on the host, outside the output tree.
pub trait ScaffoldStore {
    /// The output root, for reporting.
    fn root(&self) -> &Path;

    /// Create a directory and its parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;

    /// Write UTF-8 content to a file, replacing any previous content.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Whether a file or directory exists at `path`.
    fn file_exists(&self, path: &str) -> bool;

    /// Set the executable bit on a file (Unix-only).
    fn set_executable(&self, path: &str) -> Result<(), AppError>;

    /// Whether `source` is an existing directory on the host.
    fn source_dir_exists(&self, source: &Path) -> bool;

    /// Recursively copy `source` into `path`. Returns the number of files copied.
    fn copy_dir(&self, source: &Path, path: &str) -> Result<usize, AppError>;
}
