//! Read-only document API.
//!
//! [`Document`] is an immutable snapshot of a string-keyed map. Everything
//! else in this module is a borrowed view over a document's data:
//!
//! - [`ObjectView`] - a nested map, readable with the same typed getters
//! - [`AnyIterable`] - a nested list whose elements are wrapped on read
//! - [`Element`] - one wrapped element of an [`AnyIterable`]
//!
//! The [`AnyObject`] trait is the "can be read as a mapping" capability
//! shared by documents and object views.
//!
//! # Usage
//!
//! ```
//! use anyobject::doc::{AnyObject, Document, Element};
//! use serde_json::json;
//!
//! let doc = Document::try_from(json!({"a": {"b": 5, "c": [1, {"d": "x"}]}}))?;
//!
//! assert_eq!(doc.get_integer("a.b")?, Some(5));
//! assert_eq!(doc.get_long_or("a.z", 42)?, 42);
//! assert!(doc.get_string("a.b").is_err());
//! assert!(doc.get_any_object("missing.path")?.is_none());
//!
//! let items: Vec<Element<'_>> = doc.get_iterable("a.c")?.unwrap().iter()?.collect();
//! let object = items[1].as_object().unwrap();
//! assert_eq!(object.get_string("d")?, Some("x"));
//! # Ok::<(), anyobject::Error>(())
//! ```

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::config::AccessConfig;

// Submodules
mod errors;
pub mod json;
pub mod path;
pub mod value;
pub mod view;

// Convenience re-exports for core document types
pub use errors::AccessError;
pub use path::{PathError, Separator};
pub use value::{Map, Value};
pub use view::{AnyIter, AnyIterable, Element, ObjectView};

/// Capability of being read as a mapping through dotted paths.
///
/// Implementors only provide [`AnyObject::as_view`]; every accessor is
/// answered by the [`ObjectView`] it returns.
///
/// Typed getters return `Ok(None)` when the path is absent or holds an
/// explicit null, and [`AccessError::TypeMismatch`] when a value is present
/// with another runtime type. The `_or` variants substitute the default only
/// for the absent case.
pub trait AnyObject {
    /// Borrows this object as a view.
    fn as_view(&self) -> ObjectView<'_>;

    /// Raw value stored at `path`, `None` if the path does not resolve.
    fn get(&self, path: &str) -> Option<&Value> {
        self.as_view().get(path)
    }

    fn contains_path(&self, path: &str) -> bool {
        self.as_view().contains_path(path)
    }

    /// Gets a value by path with a checked conversion to `T`.
    fn get_as<'a, T>(&'a self, path: &str) -> Result<Option<T>, AccessError>
    where
        T: TryFrom<&'a Value, Error = AccessError>,
    {
        self.as_view().get_as(path)
    }

    /// Like [`AnyObject::get_as`], substituting `default` when absent.
    fn get_as_or<'a, T>(&'a self, path: &str, default: T) -> Result<T, AccessError>
    where
        T: TryFrom<&'a Value, Error = AccessError>,
    {
        self.as_view().get_as_or(path, default)
    }

    fn get_long(&self, path: &str) -> Result<Option<i64>, AccessError> {
        self.as_view().get_long(path)
    }

    fn get_long_or(&self, path: &str, default: i64) -> Result<i64, AccessError> {
        self.as_view().get_long_or(path, default)
    }

    fn get_integer(&self, path: &str) -> Result<Option<i32>, AccessError> {
        self.as_view().get_integer(path)
    }

    fn get_integer_or(&self, path: &str, default: i32) -> Result<i32, AccessError> {
        self.as_view().get_integer_or(path, default)
    }

    fn get_string(&self, path: &str) -> Result<Option<&str>, AccessError> {
        self.as_view().get_string(path)
    }

    fn get_string_or<'a>(&'a self, path: &str, default: &'a str) -> Result<&'a str, AccessError> {
        self.as_view().get_string_or(path, default)
    }

    fn get_double(&self, path: &str) -> Result<Option<f64>, AccessError> {
        self.as_view().get_double(path)
    }

    fn get_double_or(&self, path: &str, default: f64) -> Result<f64, AccessError> {
        self.as_view().get_double_or(path, default)
    }

    fn get_float(&self, path: &str) -> Result<Option<f32>, AccessError> {
        self.as_view().get_float(path)
    }

    fn get_float_or(&self, path: &str, default: f32) -> Result<f32, AccessError> {
        self.as_view().get_float_or(path, default)
    }

    fn get_boolean(&self, path: &str) -> Result<Option<bool>, AccessError> {
        self.as_view().get_boolean(path)
    }

    fn get_boolean_or(&self, path: &str, default: bool) -> Result<bool, AccessError> {
        self.as_view().get_boolean_or(path, default)
    }

    /// Nested map at `path`, wrapped as a view.
    fn get_any_object(&self, path: &str) -> Result<Option<ObjectView<'_>>, AccessError> {
        self.as_view().get_any_object(path)
    }

    /// Nested list at `path`, wrapped so its elements are wrapped on read.
    fn get_iterable(&self, path: &str) -> Result<Option<AnyIterable<'_>>, AccessError> {
        self.as_view().get_iterable(path)
    }

    /// Serializes the raw backing map as JSON text.
    fn to_json(&self) -> Result<String, AccessError> {
        self.as_view().to_json()
    }

    /// Serializes the raw backing map as JSON bytes.
    fn to_json_bytes(&self) -> Result<Vec<u8>, AccessError> {
        self.as_view().to_json_bytes()
    }
}

/// An immutable snapshot of a nested mapping.
///
/// The backing map is a private copy taken at construction; the caller's
/// map is never retained. `Value` owns its children, so the copy covers
/// nested maps and lists as well.
///
/// # Examples
///
/// ```
/// # use anyobject::doc::{AnyObject, Document, Map, Value};
/// let mut map = Map::new();
/// map.insert("name".to_string(), Value::from("Alice"));
/// map.insert("age".to_string(), Value::Integer(30));
///
/// let doc = Document::new(&map);
/// map.insert("age".to_string(), Value::Integer(31));
///
/// assert_eq!(doc.get_string("name")?, Some("Alice"));
/// assert_eq!(doc.get_integer("age")?, Some(30));
/// # Ok::<(), anyobject::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    entries: Map,
    separator: Separator,
}

impl Document {
    /// Creates a document from a copy of `map`, split on the default separator.
    pub fn new(map: &Map) -> Self {
        Self {
            entries: map.clone(),
            separator: Separator::default(),
        }
    }

    /// Creates a document whose paths are split on `pattern`.
    ///
    /// # Errors
    /// Returns [`PathError::InvalidSeparator`] if the pattern does not compile.
    pub fn with_separator(map: &Map, pattern: &str) -> Result<Self, PathError> {
        let separator = Separator::pattern(pattern)?;
        debug!(separator = %separator, "creating document with custom separator");
        Ok(Self {
            entries: map.clone(),
            separator,
        })
    }

    /// Creates a document using the separator from `config`.
    pub fn with_config(map: &Map, config: &AccessConfig) -> Result<Self, PathError> {
        Self::with_separator(map, &config.separator)
    }

    /// Replaces the separator, keeping the data.
    pub(crate) fn set_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// The separator used to split paths.
    pub fn separator(&self) -> &Separator {
        &self.separator
    }

    /// The raw backing map.
    pub fn entries(&self) -> &Map {
        &self.entries
    }

    /// Top-level keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the document, returning its backing map.
    pub fn into_map(self) -> Map {
        self.entries
    }
}

impl AnyObject for Document {
    fn as_view(&self) -> ObjectView<'_> {
        ObjectView::new(&self.entries, &self.separator)
    }
}

impl From<Map> for Document {
    fn from(entries: Map) -> Self {
        Self {
            entries,
            separator: Separator::default(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Document
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect::<Map>()
            .into()
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        value::fmt_map(&self.entries, f)
    }
}
