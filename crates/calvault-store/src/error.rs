use std::path::PathBuf;

use calvault_core::error::CoreError;
use calvault_rfc::error::RfcError;
use thiserror::Error;

/// Store layer errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Codec error: {0}")]
    RfcError(#[from] RfcError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("Invalid object UID: {0:?}")]
    InvalidUid(String),

    /// A stored file could not be decoded.
    #[error("Failed to read {}: {source}", .path.display())]
    ObjectFile {
        path: PathBuf,
        source: Box<RfcError>,
    },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
