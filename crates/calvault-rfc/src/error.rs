use thiserror::Error;

use crate::rfc::ical::parse::ParseError;

/// Codec errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
