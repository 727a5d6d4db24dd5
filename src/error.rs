//! Error types for AudioMD construction.
//!
//! This module provides the [`AudiomdError`] type for all library operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all AudioMD library operations.
///
/// Building a section from a typed struct never fails. Errors come from the
/// mapping-based constructors, which validate untyped input, and from the
/// serializer.
#[derive(Error, Debug)]
pub enum AudiomdError {
    /// A parameter mapping contained a key the section does not recognize.
    #[error("Parameter: '{0}' not recognized")]
    UnrecognizedParameter(String),

    /// A recognized parameter held a value of the wrong shape, for example
    /// text where the section expects pre-built elements.
    #[error("Invalid value for parameter '{key}': expected {expected}")]
    InvalidValue {
        /// The offending parameter key
        key: String,
        /// Description of the value shape the section accepts
        expected: &'static str,
    },

    /// Parameter input could not be decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The serializer met a namespace URI with no configured prefix.
    #[error("No prefix bound for namespace: {0}")]
    UnboundNamespace(String),

    /// Error while writing XML events.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for [`std::result::Result`] with [`AudiomdError`].
pub type Result<T> = std::result::Result<T, AudiomdError>;
