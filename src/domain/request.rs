use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::AppError;

/// Application variant being deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// OpenClaw gateway, built from its own upstream image.
    OpenClaw,
    /// NullClaw agent, built from the bundled Dockerfile.
    #[default]
    NullClaw,
}

impl Flavor {
    pub const ALL: [Flavor; 2] = [Flavor::OpenClaw, Flavor::NullClaw];

    /// Name used in template file names and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::OpenClaw => "openclaw",
            Flavor::NullClaw => "nullclaw",
        }
    }

    /// Environment variable carrying the primary secret in `.env`.
    pub fn primary_secret_var(&self) -> &'static str {
        match self {
            Flavor::OpenClaw => "OPENCLAW_GATEWAY_TOKEN",
            Flavor::NullClaw => "NULLCLAW_API_KEY",
        }
    }

    /// Environment variable overriding the model the agent talks to.
    pub fn model_var(&self) -> &'static str {
        match self {
            Flavor::OpenClaw => "OPENCLAW_MODEL",
            Flavor::NullClaw => "NULLCLAW_MODEL",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openclaw" => Ok(Flavor::OpenClaw),
            "nullclaw" => Ok(Flavor::NullClaw),
            _ => Err(AppError::InvalidFlavor(s.to_string())),
        }
    }
}

/// Destination environment for the scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Managed hosting on Fly.io.
    #[default]
    Fly,
    /// Local Docker Compose stack.
    Docker,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::Fly, Target::Docker];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Fly => "fly",
            Target::Docker => "docker",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fly" => Ok(Target::Fly),
            "docker" => Ok(Target::Docker),
            _ => Err(AppError::InvalidTarget(s.to_string())),
        }
    }
}

/// Secret value that never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw secret, for writing into generated artifacts only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

pub const DEFAULT_REGION: &str = "ams";
pub const DEFAULT_PORT: u16 = 3000;

/// Everything the generator needs for one invocation.
#[derive(Debug, Clone)]
pub struct DeploymentRequest {
    pub app_name: String,
    pub region: String,
    pub api_key: ApiKey,
    pub flavor: Flavor,
    pub target: Target,
    pub port: u16,
    pub bot_token: Option<String>,
    pub model: Option<String>,
}

impl DeploymentRequest {
    /// Request with default region, flavor, target and port.
    pub fn new(app_name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            region: DEFAULT_REGION.to_string(),
            api_key: ApiKey::new(api_key),
            flavor: Flavor::default(),
            target: Target::default(),
            port: DEFAULT_PORT,
            bot_token: None,
            model: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_bot_token(mut self, token: Option<String>) -> Self {
        self.bot_token = token;
        self
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    /// Name of the per-application output directory.
    pub fn work_dir_name(&self) -> String {
        format!("deploy_{}", self.app_name)
    }

    /// Bot token, treating an empty string as absent.
    pub fn bot_token(&self) -> Option<&str> {
        self.bot_token.as_deref().filter(|token| !token.is_empty())
    }

    /// Model override, treating an empty string as absent.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref().filter(|model| !model.is_empty())
    }
}
