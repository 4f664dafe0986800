use std::collections::BTreeSet;

use crate::domain::AppError;
use crate::ports::TemplateStore;

/// Looks in `primary` first and falls back to `fallback`.
///
/// Lets a local `templates/` directory override individual bundled templates.
#[derive(Debug, Clone)]
pub struct LayeredTemplateStore<P, F> {
    primary: P,
    fallback: F,
}

impl<P: TemplateStore, F: TemplateStore> LayeredTemplateStore<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: TemplateStore, F: TemplateStore> TemplateStore for LayeredTemplateStore<P, F> {
    fn read_template(&self, name: &str) -> Result<Option<String>, AppError> {
        match self.primary.read_template(name)? {
            Some(content) => Ok(Some(content)),
            None => self.fallback.read_template(name),
        }
    }

    fn list_templates(&self) -> Result<Vec<String>, AppError> {
        let mut names: BTreeSet<String> = self.primary.list_templates()?.into_iter().collect();
        names.extend(self.fallback.list_templates()?);
        Ok(names.into_iter().collect())
    }
}
