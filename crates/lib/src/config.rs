//! Access configuration.
//!
//! Settings that control how documents interpret paths. The struct is
//! serde-friendly so it can be embedded in a host application's own
//! configuration file; missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::doc::path::{DEFAULT_SEPARATOR, PathError, Separator};

/// Path handling options for a [`Document`](crate::doc::Document).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Regular expression that separates path segments.
    pub separator: String,
}

impl AccessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config whose separator matches `literal` exactly.
    pub fn literal(literal: &str) -> Self {
        Self {
            separator: regex::escape(literal),
        }
    }

    /// Builder method to set the separator pattern
    pub fn with_separator(mut self, pattern: impl Into<String>) -> Self {
        self.separator = pattern.into();
        self
    }

    /// Compiles the separator pattern.
    pub fn compile(&self) -> Result<Separator, PathError> {
        Separator::pattern(&self.separator)
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}
