//! Path splitting and resolution.
//!
//! A path is a caller-supplied string split into key segments by a
//! [`Separator`]. The separator is a pattern, not a literal: the default
//! matches a single `.`. There is no escape mechanism, so a key that contains
//! the separator cannot be addressed through a multi-segment path.
//!
//! # Usage
//!
//! ```rust
//! use anyobject::doc::path::{Separator, resolve};
//! use anyobject::doc::{Map, Value};
//!
//! let mut inner = Map::new();
//! inner.insert("b".to_string(), Value::Integer(5));
//! let mut root = Map::new();
//! root.insert("a".to_string(), Value::Map(inner));
//!
//! let sep = Separator::default();
//! assert_eq!(resolve(&root, "a.b", &sep), Some(&Value::Integer(5)));
//! assert_eq!(resolve(&root, "a.z", &sep), None);
//! ```

use std::{fmt, str::FromStr};

use regex::Regex;
use thiserror::Error;
use tracing::trace;

use super::value::{Map, Value};

/// Default separator: one literal dot.
pub const DEFAULT_SEPARATOR: &str = r"\.";

/// Error type for separator compilation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// The separator pattern is not a valid regular expression, or matches
    /// the empty string.
    #[error("Invalid separator '{pattern}': {reason}")]
    InvalidSeparator { pattern: String, reason: String },
}

impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}

/// A compiled path separator.
#[derive(Clone)]
pub struct Separator {
    regex: Regex,
}

impl Separator {
    /// Compiles a separator pattern.
    ///
    /// # Errors
    /// Returns [`PathError::InvalidSeparator`] if the pattern does not compile
    /// or if it can match the empty string (which would split between every
    /// character).
    pub fn pattern(pattern: &str) -> Result<Self, PathError> {
        let regex = Regex::new(pattern).map_err(|e| PathError::InvalidSeparator {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        if regex.is_match("") {
            return Err(PathError::InvalidSeparator {
                pattern: pattern.to_string(),
                reason: "pattern matches the empty string".to_string(),
            });
        }
        Ok(Self { regex })
    }

    /// Builds a separator that matches `literal` exactly.
    ///
    /// # Errors
    /// Returns [`PathError::InvalidSeparator`] if `literal` is empty.
    pub fn literal(literal: &str) -> Result<Self, PathError> {
        Self::pattern(&regex::escape(literal))
    }

    /// Returns the source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Splits a path into its non-empty segments.
    pub fn segments<'p>(&self, path: &'p str) -> impl Iterator<Item = &'p str> {
        self.regex.split(path).filter(|segment| !segment.is_empty())
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self {
            // Constant pattern, always valid
            regex: Regex::new(DEFAULT_SEPARATOR).expect("default separator compiles"),
        }
    }
}

impl FromStr for Separator {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Separator::pattern(s)
    }
}

impl PartialEq for Separator {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Separator {}

impl fmt::Debug for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Separator").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves `path` against `root`.
///
/// Every segment but the last must name a nested map; if one is missing or
/// holds anything else the result is `None`. The last segment returns
/// whatever is stored there, `Value::Null` included. Empty segments are
/// dropped before the walk, so `".x"` resolves the key `"x"` and a key that
/// is itself the empty string can never be reached.
pub fn resolve<'a>(root: &'a Map, path: &str, separator: &Separator) -> Option<&'a Value> {
    let mut segments = separator.segments(path).peekable();
    let mut current = root;

    while let Some(segment) = segments.next() {
        let value = match current.get(segment) {
            Some(value) => value,
            None => {
                trace!(path, segment, "path segment not found");
                return None;
            }
        };

        if segments.peek().is_none() {
            return Some(value);
        }

        current = match value {
            Value::Map(map) => map,
            other => {
                trace!(
                    path,
                    segment,
                    found = other.type_name(),
                    "path descends through a non-map value"
                );
                return None;
            }
        };
    }

    // No segments at all
    None
}
