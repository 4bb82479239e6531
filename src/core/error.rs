//! Error type for site generation

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, SiteError>;

/// Everything that can abort a generation run
#[derive(Error, Debug)]
pub enum SiteError {
    /// Reading input or resetting/writing the output location failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The visualization payload could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A page template failed to render
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),

    /// The graph file is not valid TOML or does not match the expected layout
    #[error("Invalid graph file: {0}")]
    GraphFile(#[from] toml::de::Error),

    /// A configuration value cannot be turned into site options
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Two distinct graph keys share one canonical string
    #[error("Two nodes share the canonical id '{0}'")]
    DuplicateCanonicalId(String),

    /// A graph key cannot be used as a page name
    #[error("Node id '{0}' cannot be used as a page name")]
    InvalidNodeId(String),
}

impl SiteError {
    /// Wrap an I/O error with the path it happened at
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
