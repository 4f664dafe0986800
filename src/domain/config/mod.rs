mod deploy_config;
pub mod parse;

pub use deploy_config::{CONFIG_FILE, DeployConfig, DeployDefaults, PathDefaults};
pub use parse::parse_config_content;
