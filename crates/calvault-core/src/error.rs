use thiserror::Error;

/// Errors raised when caller-supplied settings or identifiers are unusable.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
