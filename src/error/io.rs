use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to open file '{path}': {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to walk '{path}': {source}")]
    WalkError {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl IoError {
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    pub fn open_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenError {
            path: path.into(),
            source,
        }
    }

    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Wraps a walk failure, preferring the entry path walkdir reports over the root.
    pub fn walk_error(root: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.into());
        Self::WalkError { path, source }
    }
}
