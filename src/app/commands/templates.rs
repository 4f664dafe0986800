//! Templates commands - inspect and eject the template set.

use tracing::debug;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ScaffoldStore, TemplateStore};

/// Result of ejecting templates into a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EjectOutcome {
    pub written: Vec<String>,
    /// Existing files left alone because `force` was not set.
    pub kept: Vec<String>,
}

/// Names of every template the store can serve.
pub fn list(templates: &impl TemplateStore) -> Result<Vec<String>, AppError> {
    templates.list_templates()
}

/// Copy every template into the store root so it can be edited locally.
pub fn eject<T: TemplateStore, S: ScaffoldStore>(
    ctx: &AppContext<T, S>,
    force: bool,
) -> Result<EjectOutcome, AppError> {
    ctx.store().create_dir_all("")?;

    let mut outcome = EjectOutcome::default();
    for name in ctx.templates().list_templates()? {
        if !force && ctx.store().file_exists(&name) {
            outcome.kept.push(name);
            continue;
        }
        let content = ctx
            .templates()
            .read_template(&name)?
            .ok_or_else(|| AppError::template_missing(name.as_str()))?;
        ctx.store().write_file(&name, &content)?;
        debug!(template = %name, "ejected");
        outcome.written.push(name);
    }
    Ok(outcome)
}
