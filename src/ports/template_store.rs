//! Read access to deployment templates.

use crate::domain::AppError;

/// Port for looking up templates by file name (e.g. `nullclaw.fly.toml`).
pub trait TemplateStore {
    /// Read a template as UTF-8 text. `Ok(None)` means the template does not exist.
    fn read_template(&self, name: &str) -> Result<Option<String>, AppError>;

    /// Names of all templates this store can serve, sorted.
    fn list_templates(&self) -> Result<Vec<String>, AppError>;
}
