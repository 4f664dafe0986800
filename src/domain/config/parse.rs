//! Pure parse for deployment configuration (`clawdeploy.toml`).

use super::DeployConfig;
use crate::domain::AppError;

/// Parse deployment configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<DeployConfig, AppError> {
    let config: DeployConfig = toml::from_str(content)?;
    Ok(config)
}
