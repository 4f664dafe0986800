//! Test double for `ScaffoldStore`.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ScaffoldStore;

/// In-memory scaffold store recording every write.
#[derive(Debug, Default)]
pub struct MemoryScaffoldStore {
    root: PathBuf,
    pub files: RefCell<BTreeMap<String, String>>,
    pub dirs: RefCell<BTreeSet<String>>,
    pub executables: RefCell<BTreeSet<String>>,
    /// Host directories that "exist", with the number of files each holds.
    pub source_dirs: RefCell<BTreeMap<PathBuf, usize>>,
    pub copies: RefCell<Vec<(PathBuf, String)>>,
}

#[allow(dead_code)]
impl MemoryScaffoldStore {
    pub fn new() -> Self {
        Self { root: PathBuf::from("/out"), ..Self::default() }
    }

    pub fn with_source_dir(self, path: impl Into<PathBuf>, file_count: usize) -> Self {
        self.source_dirs.borrow_mut().insert(path.into(), file_count);
        self
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.borrow_mut().insert(path.to_string(), content.to_string());
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn file_names(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }

    pub fn is_executable(&self, path: &str) -> bool {
        self.executables.borrow().contains(path)
    }

    pub fn has_dir(&self, path: &str) -> bool {
        self.dirs.borrow().contains(path)
    }
}

impl ScaffoldStore for MemoryScaffoldStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        self.dirs.borrow_mut().insert(path.to_string());
        Ok(())
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.files.borrow_mut().insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn set_executable(&self, path: &str) -> Result<(), AppError> {
        if !self.files.borrow().contains_key(path) {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Mock file not found",
            )));
        }
        self.executables.borrow_mut().insert(path.to_string());
        Ok(())
    }

    fn source_dir_exists(&self, source: &Path) -> bool {
        self.source_dirs.borrow().contains_key(source)
    }

    fn copy_dir(&self, source: &Path, path: &str) -> Result<usize, AppError> {
        let count = self.source_dirs.borrow().get(source).copied().ok_or_else(|| {
            AppError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Mock source dir not found",
            ))
        })?;
        self.dirs.borrow_mut().insert(path.to_string());
        self.copies.borrow_mut().push((source.to_path_buf(), path.to_string()));
        Ok(count)
    }
}
