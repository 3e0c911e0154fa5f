//! # Error Types
//!
//! This module defines error types used throughout the trazo library.

use thiserror::Error;

/// Main error type for trazo operations
#[derive(Debug, Error)]
pub enum ChartError {
    /// Scale domain violates the scale type's precondition
    #[error("Invalid scale domain: {0}")]
    InvalidDomain(String),

    /// Unrecognized scale type string
    #[error("Unknown scale type: {0}")]
    UnknownScaleType(String),

    /// Malformed chart data or options
    #[error("Invalid chart data: {0}")]
    Data(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
