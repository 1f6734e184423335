#![deny(unsafe_code)]

use std::path::PathBuf;

/// Failure while loading an application XML file.
///
/// A failed load never yields a partially built application.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("failed to read application file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML in {path} at byte {position}: {message}")]
    Malformed {
        path: PathBuf,
        position: u64,
        message: String,
    },

    #[error("invalid <{element}> in {path}: {message}")]
    InvalidContent {
        path: PathBuf,
        element: String,
        message: String,
    },

    #[error("cannot decode {path}: {message}")]
    Encoding { path: PathBuf, message: String },
}

impl XmlError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the document that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. }
            | Self::Malformed { path, .. }
            | Self::InvalidContent { path, .. }
            | Self::Encoding { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, XmlError>;
