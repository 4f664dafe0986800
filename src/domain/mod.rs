pub mod artifacts;
pub mod compose;
pub mod config;
pub mod error;
pub mod outcome;
pub mod request;
pub mod substitution;
pub mod template_set;

pub use error::AppError;
pub use outcome::{GenerateOutcome, Skip, UnmatchedPlaceholders};
pub use request::{ApiKey, DEFAULT_PORT, DEFAULT_REGION, DeploymentRequest, Flavor, Target};
pub use substitution::{Placeholder, Substitution, substitute};
pub use template_set::TemplateSet;
