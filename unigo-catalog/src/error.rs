use std::path::PathBuf;

/// Failures that abort a whole catalog query.
///
/// Failing to read a single icon file is not one of them,
/// such files are logged and skipped.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read SVG directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read Nerd Font manifest {}: {source}", path.display())]
    ReadManifest {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse Nerd Font manifest {}: {source}", path.display())]
    ParseManifest {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Error {
    /// The directory or manifest this error originated from.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ReadDir { path, .. }
            | Self::ReadManifest { path, .. }
            | Self::ParseManifest { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
