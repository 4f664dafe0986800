use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ScaffoldStore;

/// Filesystem-backed scaffold store rooted at the output directory.
#[derive(Debug, Clone)]
pub struct FilesystemScaffoldStore {
    root: PathBuf,
}

impl FilesystemScaffoldStore {
    /// Create a store for the given output root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl ScaffoldStore for FilesystemScaffoldStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        fs::create_dir_all(self.resolve_path(path))?;
        Ok(())
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content)?;
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.resolve_path(path).exists()
    }

    fn set_executable(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&full_path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&full_path, perms)?;
        }
        #[cfg(not(unix))]
        let _ = full_path;
        Ok(())
    }

    fn source_dir_exists(&self, source: &Path) -> bool {
        source.is_dir()
    }

    fn copy_dir(&self, source: &Path, path: &str) -> Result<usize, AppError> {
        let dest = self.resolve_path(path);
        let source_real = source.canonicalize()?;
        if canonical_target(&dest)?.starts_with(&source_real) {
            return Err(AppError::config_error(format!(
                "Cannot copy {} into {}: the destination is inside the source",
                source.display(),
                dest.display()
            )));
        }
        copy_dir_recursive(source, &dest)
    }
}

/// Canonicalize the nearest existing ancestor of `path` and re-append the
/// components that do not exist yet.
fn canonical_target(path: &Path) -> io::Result<PathBuf> {
    let mut pending: Vec<OsString> = Vec::new();
    let mut current = path;
    loop {
        let existing = if current.as_os_str().is_empty() { Path::new(".") } else { current };
        if existing.exists() {
            let mut resolved = existing.canonicalize()?;
            resolved.extend(pending.iter().rev());
            return Ok(resolved);
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(name)) => {
                pending.push(name.to_os_string());
                current = parent;
            }
            _ => return Ok(path.to_path_buf()),
        }
    }
}

fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<usize, AppError> {
    fs::create_dir_all(dest)?;

    let mut copied = 0;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += copy_dir_recursive(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
            copied += 1;
        }
    }
    Ok(copied)
}
