//! Error types for the command-line front end.

use std::path::PathBuf;

use ag_graph::GraphError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}")]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to encode JSON output")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("{failed} of {total} diagrams failed to compile")]
    CheckFailed { failed: usize, total: usize },
}
