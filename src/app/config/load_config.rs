//! Deployment configuration loading from disk.

use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::domain::config::{self, CONFIG_FILE, DeployConfig};

/// Load `clawdeploy.toml`.
///
/// An explicit path must exist. Without one, `clawdeploy.toml` in `base_dir`
/// is used when present, otherwise no config applies.
pub fn load_config(
    base_dir: &Path,
    explicit: Option<&Path>,
) -> Result<Option<DeployConfig>, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigFileMissing(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = base_dir.join(CONFIG_FILE);
            if !candidate.is_file() {
                return Ok(None);
            }
            candidate
        }
    };

    debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(&path)?;
    config::parse_config_content(&content).map(Some)
}
