//! Error types for CLUT decoding.

use thiserror::Error;

/// Errors that can occur when decoding a CLUT bitstream.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] bmlweb_common::Error),

    /// Bitstream uses a layout this decoder does not support.
    #[error("unsupported CLUT format: {0}")]
    UnsupportedFormat(&'static str),
}

/// Result type for CLUT operations.
pub type Result<T> = std::result::Result<T, Error>;
