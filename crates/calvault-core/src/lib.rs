//! Shared building blocks for the calvault workspace: configuration, the core
//! error type, storage constants and path helpers.

pub mod config;
pub mod constants;
pub mod error;
pub mod util;
