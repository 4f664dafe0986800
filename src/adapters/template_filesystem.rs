use std::fs;
use std::io;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::TemplateStore;

/// Templates read from a directory on disk.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateStore {
    dir: PathBuf,
}

impl FilesystemTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateStore for FilesystemTemplateStore {
    fn read_template(&self, name: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.dir.join(name)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn list_templates(&self) -> Result<Vec<String>, AppError> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
