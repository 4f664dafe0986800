//! Test double for `TemplateStore`.

use std::collections::BTreeMap;

use crate::domain::AppError;
use crate::ports::TemplateStore;

/// In-memory template store seeded by the test.
#[derive(Clone, Debug, Default)]
pub struct MemoryTemplateStore {
    templates: BTreeMap<String, String>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a template.
    pub fn with(mut self, name: &str, content: &str) -> Self {
        self.templates.insert(name.to_string(), content.to_string());
        self
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn read_template(&self, name: &str) -> Result<Option<String>, AppError> {
        Ok(self.templates.get(name).cloned())
    }

    fn list_templates(&self) -> Result<Vec<String>, AppError> {
        Ok(self.templates.keys().cloned().collect())
    }
}
