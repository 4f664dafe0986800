//! Lookup table from (flavor, target) to the templates that drive generation.

use super::{Flavor, Target};

/// Templates consulted for one (flavor, target) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    /// Container image definition, copied verbatim when present.
    pub image_definition: String,
    /// Fly.io app config. Required: generation fails without it.
    pub platform_config: Option<String>,
    /// Compose file. Optional: the docker branch is skipped without it.
    pub compose: Option<String>,
}

impl TemplateSet {
    /// Select the template set for a flavor and target.
    pub fn select(flavor: Flavor, target: Target) -> Self {
        let name = flavor.as_str();
        let image_definition = format!("{name}.Dockerfile");
        match target {
            Target::Fly => Self {
                image_definition,
                platform_config: Some(format!("{name}.fly.toml")),
                compose: None,
            },
            Target::Docker => Self {
                image_definition,
                platform_config: None,
                compose: Some(format!("{name}.docker-compose.yml")),
            },
        }
    }
}
