use std::io;

use thiserror::Error;

/// Library-wide error type for clawdeploy operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A template the selected flavor/target requires is not available.
    #[error("Required template '{name}' not found")]
    TemplateMissing { name: String },

    /// Config file passed with --config does not exist.
    #[error("Config file not found: {0}")]
    ConfigFileMissing(String),

    /// Flavor name is not recognized.
    #[error("Invalid deployment type '{0}': must be one of openclaw, nullclaw")]
    InvalidFlavor(String),

    /// Target name is not recognized.
    #[error("Invalid deployment target '{0}': must be one of fly, docker")]
    InvalidTarget(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn template_missing<S: Into<String>>(name: S) -> Self {
        AppError::TemplateMissing { name: name.into() }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidFlavor(_)
            | AppError::InvalidTarget(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateMissing { .. } | AppError::ConfigFileMissing(_) => {
                io::ErrorKind::NotFound
            }
        }
    }
}
