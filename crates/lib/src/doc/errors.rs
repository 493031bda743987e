//! Error types for document access.
//!
//! Absent paths are not errors: they surface as `None`. The variants here
//! cover the cases where a value is present but cannot be read the way the
//! caller asked, or where the JSON boundary cannot represent the data.

use thiserror::Error;

/// Structured error types for reads through documents and views.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// A value is present at the path but has a different runtime type
    #[error("type mismatch{}: expected {expected}, found {actual}", location(.path))]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Mutation attempted through a read-only view
    #[error("unsupported operation on read-only view: {operation}")]
    UnsupportedOperation { operation: &'static str },

    /// A single-pass sequence was asked for a second traversal
    #[error("sequence can only be traversed once and has already been consumed")]
    ExhaustedSequence,

    /// The backing data cannot be encoded as JSON
    #[error("JSON encoding failed: {reason}")]
    EncodingFailed { reason: String },

    /// JSON input cannot be turned into a document
    #[error("JSON decoding failed: {reason}")]
    DecodingFailed { reason: String },
}

fn location(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at '{path}'")
    }
}

impl AccessError {
    /// Builds a type mismatch that is not yet tied to a path.
    pub(crate) fn mismatch(expected: &'static str, actual: &'static str) -> Self {
        AccessError::TypeMismatch {
            path: String::new(),
            expected,
            actual,
        }
    }

    /// Attaches the requested path to a type mismatch.
    pub(crate) fn at_path(self, at: &str) -> Self {
        match self {
            AccessError::TypeMismatch {
                expected, actual, ..
            } => AccessError::TypeMismatch {
                path: at.to_string(),
                expected,
                actual,
            },
            other => other,
        }
    }

    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, AccessError::TypeMismatch { .. })
    }

    /// Check if this error is a rejected mutation
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self, AccessError::UnsupportedOperation { .. })
    }

    /// Check if this error is a second traversal of a single-pass sequence
    pub fn is_exhausted(&self) -> bool {
        matches!(self, AccessError::ExhaustedSequence)
    }

    /// Check if this error comes from the JSON boundary
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            AccessError::EncodingFailed { .. } | AccessError::DecodingFailed { .. }
        )
    }

    /// Get the path if this is a type mismatch raised by a path lookup
    pub fn path(&self) -> Option<&str> {
        match self {
            AccessError::TypeMismatch { path, .. } if !path.is_empty() => Some(path),
            _ => None,
        }
    }
}

impl From<AccessError> for crate::Error {
    fn from(err: AccessError) -> Self {
        crate::Error::Access(err)
    }
}
