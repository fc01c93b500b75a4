//! Error types for drawing3d
//!
//! This module defines the error type shared by the draw list, the render
//! dispatcher and the surface backends.

use std::fmt;

/// Result type for drawing3d operations
pub type Result<T> = std::result::Result<T, Error>;

/// drawing3d errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An argument violates a precondition (vertex count, payload stride,
    /// non-finite color, ...). The target is left unchanged.
    InvalidArgument(String),

    /// A record index or buffer slot outside the current bounds
    OutOfRange(String),

    /// Surface backend failure (allocation, encoding, file I/O)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::OutOfRange(msg) => write!(f, "Out of range: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
