//! Deployment defaults read from `clawdeploy.toml`.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{Flavor, Target};

/// File name picked up from the current directory when `--config` is absent.
pub const CONFIG_FILE: &str = "clawdeploy.toml";

/// Root of `clawdeploy.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployConfig {
    #[serde(default)]
    pub deploy: DeployDefaults,
    #[serde(default)]
    pub paths: PathDefaults,
}

/// `[deploy]` - request defaults. The API key is intentionally absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployDefaults {
    pub name: Option<String>,
    pub region: Option<String>,
    #[serde(rename = "type")]
    pub flavor: Option<Flavor>,
    pub target: Option<Target>,
    pub port: Option<u16>,
    pub bot_token: Option<String>,
    pub model: Option<String>,
}

/// `[paths]` - where templates come from and where output goes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathDefaults {
    pub templates: Option<PathBuf>,
    pub skills: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
}
