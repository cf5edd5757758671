use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking and rendering a tree
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Cannot open directory '{path}': {source}")]
    DirectoryOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read entries of '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot stat '{path}': {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot resolve owner (uid {uid}) of '{path}': {reason}")]
    OwnerLookup {
        uid: u32,
        path: PathBuf,
        reason: String,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreeError>;
