// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Failures surfaced by a comparison run.
///
/// A missing translation-side file or directory is never reported through
/// this type; the walker consumes absence as the signal to create the path.
#[derive(Debug, ThisError)]
pub enum Error {
    /// An empty file, directory, or document-type argument.
    #[error("empty file or path name")]
    EmptyPathName,

    /// A path that could not be opened, created, read, or written.
    #[error("cannot access {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The original tree could not be traversed.
    #[error("directory walk failed")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// True when the underlying cause is an absent path.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::FileAccess { source, .. } => source.kind() == io::ErrorKind::NotFound,
            Self::EmptyPathName | Self::Walk(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
