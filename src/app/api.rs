//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{
    EmbeddedTemplateStore, FilesystemScaffoldStore, FilesystemTemplateStore, LayeredTemplateStore,
};
use crate::app::{AppContext, commands};
use crate::ports::TemplateStore;

pub use crate::app::commands::templates::EjectOutcome;
pub use crate::domain::{AppError, DeploymentRequest, Flavor, GenerateOutcome, Skip, Target};

/// Local template directory consulted before the bundled templates.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Local skills library side-loaded into docker deployments.
pub const DEFAULT_SKILLS_DIR: &str = "skills";

/// Where templates are read from and where the scaffold is written.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Use only this template directory. `None` layers `templates/` over
    /// the bundled set.
    pub templates_dir: Option<PathBuf>,
    pub skills_dir: PathBuf,
    /// Parent of the `deploy_<app>` directory.
    pub out_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            templates_dir: None,
            skills_dir: PathBuf::from(DEFAULT_SKILLS_DIR),
            out_dir: PathBuf::from("."),
        }
    }
}

// =============================================================================
// Generate Command API
// =============================================================================

/// Generate the deployment scaffold for `request`.
///
/// Returns what was written, what was skipped, and the follow-up command.
pub fn generate(
    request: &DeploymentRequest,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    match &options.templates_dir {
        Some(dir) => generate_with(FilesystemTemplateStore::new(dir), request, options),
        None => generate_with(
            LayeredTemplateStore::new(
                FilesystemTemplateStore::new(DEFAULT_TEMPLATES_DIR),
                EmbeddedTemplateStore::new(),
            ),
            request,
            options,
        ),
    }
}

fn generate_with<T: TemplateStore>(
    templates: T,
    request: &DeploymentRequest,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let ctx = AppContext::new(templates, FilesystemScaffoldStore::new(&options.out_dir));
    commands::generate::execute(&ctx, request, &options.skills_dir)
}

// =============================================================================
// Templates Command API
// =============================================================================

/// Names of the templates bundled into the binary.
pub fn list_templates() -> Result<Vec<String>, AppError> {
    commands::templates::list(&EmbeddedTemplateStore::new())
}

/// Write the bundled templates into `dest` for local editing.
pub fn eject_templates(dest: &Path, force: bool) -> Result<EjectOutcome, AppError> {
    let ctx = AppContext::new(EmbeddedTemplateStore::new(), FilesystemScaffoldStore::new(dest));
    commands::templates::eject(&ctx, force)
}
