//! Templates command implementation.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::app::api::DEFAULT_TEMPLATES_DIR;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum TemplatesCommands {
    /// List the bundled templates
    #[clap(visible_alias = "ls")]
    List,
    /// Write the bundled templates to a directory for local editing
    Eject {
        /// Destination directory
        #[arg(long, default_value = DEFAULT_TEMPLATES_DIR)]
        dest: PathBuf,
        /// Overwrite files that already exist
        #[arg(short, long)]
        force: bool,
    },
}

pub fn run_templates_list() -> Result<(), AppError> {
    let names = crate::app::api::list_templates()?;
    println!("Bundled templates:");
    for name in names {
        println!("  {}", name);
    }
    Ok(())
}

pub fn run_templates_eject(dest: &Path, force: bool) -> Result<(), AppError> {
    let outcome = crate::app::api::eject_templates(dest, force)?;
    println!("✅ Ejected {} template(s) to {}/", outcome.written.len(), dest.display());
    if !outcome.kept.is_empty() {
        println!("ℹ️  Kept {} existing file(s) (use --force to overwrite):", outcome.kept.len());
        for name in &outcome.kept {
            println!("  • {}", name);
        }
    }
    Ok(())
}
