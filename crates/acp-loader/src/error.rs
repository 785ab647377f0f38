//! Error types for acp-loader

use std::path::PathBuf;

/// Result type for acp-loader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a manifest or resolving its
/// runtime environment.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No file exists at the given manifest path.
    #[error("agent manifest not found at {0}")]
    ManifestNotFound(PathBuf),

    /// The manifest file exceeds the size cap.
    #[error("agent manifest at {path} is {size} bytes (limit: {max})")]
    ManifestTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An env file could not be read or parsed.
    #[error("failed to read env file at {path}: {reason}")]
    EnvFile { path: PathBuf, reason: String },

    #[error("lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    /// One or more environment variables the manifest marks as required
    /// are not set. Every missing variable is named.
    #[error("missing required environment variables: {}", names.join(", "))]
    MissingEnvVars { names: Vec<String> },

    #[error(transparent)]
    Manifest(#[from] acp_manifest::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
