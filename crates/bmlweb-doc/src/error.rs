//! Error types for BML document handling.

use thiserror::Error;

/// Errors that can occur when loading, rewriting or serializing a
/// BML document.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed document bytes; no partial tree is returned.
    #[error("document parse error: {0}")]
    Parse(String),

    /// A required structural element (root, head, body) is missing.
    #[error("document structure error: {0}")]
    Structure(&'static str),

    /// The prolog declares an encoding no decoder recognizes.
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// The script-dialect transpiler rejected an embedded script.
    #[error("script transpile error: {0}")]
    Script(String),

    /// Resource catalog serialization failed.
    #[error("catalog serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML serialization error.
    #[error("XML error: {0}")]
    Xml(String),
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, Error>;
