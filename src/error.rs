use std::{path::PathBuf, process::ExitCode};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecommendError>;

/// Errors raised while building the recommender.
///
/// Query time never fails: empty or unmatched queries are reported through
/// [`Resolution`](crate::Resolution) instead.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// corpus file missing or unreadable
    #[error("recipe data unavailable at {}: {source}", .path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    /// required column absent from the csv header
    #[error("column `{column}` not found in csv header")]
    MissingColumn { column: String },

    #[error("invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RecommendError {
    /// process exit code for the binary
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::DataUnavailable { .. } => ExitCode::from(3),
            Self::Csv(_) | Self::MissingColumn { .. } => ExitCode::from(4),
            Self::Config { .. } | Self::InvalidConfig(_) => ExitCode::from(5),
        }
    }
}
