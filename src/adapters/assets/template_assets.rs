use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::AppError;
use crate::ports::TemplateStore;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn read_template(&self, name: &str) -> Result<Option<String>, AppError> {
        let Some(file) = TEMPLATES_DIR.get_file(name) else {
            return Ok(None);
        };
        let content = file.contents_utf8().ok_or_else(|| {
            AppError::config_error(format!("Embedded template '{}' is not valid UTF-8", name))
        })?;
        Ok(Some(content.to_string()))
    }

    fn list_templates(&self) -> Result<Vec<String>, AppError> {
        let mut names: Vec<String> = TEMPLATES_DIR
            .entries()
            .iter()
            .filter_map(|entry| match entry {
                DirEntry::File(file) => {
                    file.path().file_name().map(|name| name.to_string_lossy().to_string())
                }
                DirEntry::Dir(_) => None,
            })
            .collect();
        names.sort();
        Ok(names)
    }
}
