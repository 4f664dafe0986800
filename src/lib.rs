//! clawdeploy: Generate Fly.io and Docker Compose deployment scaffolding for claw agents.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DEFAULT_SKILLS_DIR, DEFAULT_TEMPLATES_DIR, EjectOutcome, GenerateOptions, eject_templates,
    generate, list_templates,
};
pub use domain::{
    AppError, DeploymentRequest, Flavor, GenerateOutcome, Skip, Target, UnmatchedPlaceholders,
};
