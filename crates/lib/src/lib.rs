//!
//! anyobject: read-only, dotted-path access over nested documents.
//!
//! ## Core Concepts
//!
//! * **Documents (`doc::Document`)**: An immutable snapshot of a string-keyed map whose values are scalars, nested maps or lists.
//! * **Paths (`doc::path`)**: Strings such as `"user.profile.name"`, split on a configurable separator pattern and resolved one map at a time. A path that cannot be followed is absent, never an error.
//! * **Typed getters (`doc::AnyObject`)**: `get_long`, `get_string`, `get_boolean`, ... with checked conversions. A value of the wrong type is a `TypeMismatch` error.
//! * **Views (`doc::ObjectView`, `doc::AnyIterable`)**: Borrowed wrappers over nested maps and lists. Elements of a list are wrapped as they are read, at any depth.
//! * **JSON (`doc::json`)**: Documents serialize their raw backing data through `serde_json` and can be built from JSON text.

pub mod config;
pub mod doc;

pub use config::AccessConfig;
pub use doc::{AnyIterable, AnyObject, Document, Element, ObjectView, Value};

/// Result type used throughout the anyobject library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the anyobject library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured read errors from the doc module
    #[error(transparent)]
    Access(doc::AccessError),

    /// Structured path configuration errors from the doc::path module
    #[error(transparent)]
    Path(doc::PathError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Access(_) => "doc",
            Error::Path(_) => "path",
        }
    }

    /// Check if this error is a type mismatch on a typed read.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is a rejected mutation through a view.
    pub fn is_unsupported_operation(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_unsupported_operation(),
            _ => false,
        }
    }

    /// Check if this error is a second traversal of a single-pass sequence.
    pub fn is_exhausted_sequence(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_exhausted(),
            _ => false,
        }
    }

    /// Check if this error comes from JSON encoding or decoding.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_serialization_error(),
            _ => false,
        }
    }

    /// Check if this error is an invalid configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }
}
