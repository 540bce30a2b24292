use std::path::PathBuf;

use drillpipe_core::CalcError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Calculation(#[from] CalcError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file {path} could not be parsed: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CliError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Process exit code: 2 for bad input, 1 for everything else
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Calculation(_) | CliError::InvalidArgument { .. } | CliError::ConfigParse { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
