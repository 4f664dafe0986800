use std::fmt;
use std::path::PathBuf;

use super::Target;

/// An optional piece of the scaffold that was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// No image definition template for this flavor.
    ImageDefinition { template: String },
    /// No compose template for this flavor; the docker branch did nothing.
    Compose { template: String },
    /// No skills library on disk, so nothing was side-loaded.
    SkillsLibrary { path: PathBuf },
    /// Skills library exists but the compose template has no volumes section.
    VolumesSection { template: String },
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::ImageDefinition { template } => {
                write!(f, "no image definition ({template} not found)")
            }
            Skip::Compose { template } => {
                write!(f, "docker target not available for this type ({template} not found)")
            }
            Skip::SkillsLibrary { path } => {
                write!(f, "no skills library at {}", path.display())
            }
            Skip::VolumesSection { template } => {
                write!(f, "skills not mounted ({template} has no volumes section)")
            }
        }
    }
}

/// Placeholders that did not occur in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedPlaceholders {
    pub template: String,
    pub labels: Vec<&'static str>,
}

/// What a generate run produced.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub work_dir: PathBuf,
    pub target: Target,
    /// Files written, relative to `work_dir`, in write order.
    pub written: Vec<String>,
    pub skipped: Vec<Skip>,
    pub unmatched: Vec<UnmatchedPlaceholders>,
    /// Files side-loaded from the skills library, when it was mounted.
    pub skills_copied: Option<usize>,
}

impl GenerateOutcome {
    pub fn new(work_dir: PathBuf, target: Target) -> Self {
        Self {
            work_dir,
            target,
            written: Vec::new(),
            skipped: Vec::new(),
            unmatched: Vec::new(),
            skills_copied: None,
        }
    }

    /// Command the user runs next, if the target produced a launcher.
    pub fn next_step(&self) -> Option<String> {
        let script = match self.target {
            Target::Fly => super::artifacts::SETUP_SCRIPT,
            Target::Docker => super::artifacts::RUN_SCRIPT,
        };
        self.written
            .iter()
            .any(|name| name == script)
            .then(|| format!("cd {} && ./{}", self.work_dir.display(), script))
    }
}
