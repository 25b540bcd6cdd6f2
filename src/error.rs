use std::path::PathBuf;

use thiserror::Error;

/// Every way a solver run can fail. All of them abort the run.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("missing output path")]
    MissingOutputPath,

    #[error("failed to create output file {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load words from {}: {source}", path.display())]
    ReadWordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load board from {}: {source}", path.display())]
    ReadBoard {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{key} has an invalid value '{value}'")]
    InvalidConfig { key: &'static str, value: String },

    #[error("search task failed: {0}")]
    Search(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, SolverError>;
