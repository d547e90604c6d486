use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Any failure while enumerating or classifying the children of `path`.
    #[error("Error accessing path {path}: {source}")]
    DirectoryAccess {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn directory_access(path: impl Into<String>, source: io::Error) -> Self {
        Error::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    /// The base path whose listing failed.
    pub fn path(&self) -> &str {
        match self {
            Error::DirectoryAccess { path, .. } => path,
        }
    }
}
