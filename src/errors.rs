use thiserror::Error;

use crate::core::ports::FileSystemError;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("Config file \"{name}\" not found\nSearched in: {searched}")]
    NotFound { name: String, searched: String },

    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),
}
