//! Error type shared by every pipeline stage.

use std::io;
use std::path::PathBuf;

use crate::artifact::ArtifactError;

/// Error type for reading, filtering and compiling hide rules.
#[derive(Debug, thiserror::Error)]
pub enum ClarityError {
    #[error("Rule source '{}' not found and artifact '{}' was absent or bypassed", source_path.display(), artifact.display())]
    MissingSource {
        source_path: PathBuf,
        artifact: PathBuf,
    },
    #[error("Failed to read '{}': {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write '{}': {source}", path.display())]
    FilesystemWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed artifact '{}': {source}; run 'clarity build' to regenerate it", path.display())]
    MalformedArtifact {
        path: PathBuf,
        #[source]
        source: ArtifactError,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ClarityError>;
