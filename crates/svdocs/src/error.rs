//! CLI error types.

use std::path::PathBuf;

use svdocs_config::ConfigError;
use svdocs_nav::{NavError, ValidationReport};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Nav(#[from] NavError),

    #[error("{0}")]
    Validation(#[from] ValidationReport),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read documentation directory {}: {source}", path.display())]
    DocsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
