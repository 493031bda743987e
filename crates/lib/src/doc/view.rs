//! Borrowed, read-only views over document data.
//!
//! Views never copy: an [`ObjectView`] borrows a nested map and an
//! [`AnyIterable`] borrows a list (or a caller-supplied single-pass source).
//! Nested structures are wrapped lazily by [`wrap`] as they are read, so a
//! list of lists of maps costs nothing until it is walked.

use std::{cell::RefCell, fmt, slice};

use serde::{Serialize, Serializer};

use super::{
    AccessError, AnyObject, Document,
    path::{Separator, resolve},
    value::{self, Map, Value},
};

/// Wraps a raw value for reading.
///
/// Maps become [`Element::Object`], lists become [`Element::Iterable`] and
/// everything else is passed through as [`Element::Scalar`]. Only raw values
/// are accepted, so a view is never wrapped twice.
pub fn wrap<'a>(value: &'a Value, separator: &'a Separator) -> Element<'a> {
    match value {
        Value::Map(map) => Element::Object(ObjectView::new(map, separator)),
        Value::List(list) => Element::Iterable(AnyIterable::new(list, separator)),
        scalar => Element::Scalar(scalar),
    }
}

/// A read-only view over a nested map.
///
/// Typed reads resolve paths with the separator of the object the view
/// was obtained from. Results borrow the underlying document, not the view.
#[derive(Clone, Copy)]
pub struct ObjectView<'a> {
    map: &'a Map,
    separator: &'a Separator,
}

impl<'a> ObjectView<'a> {
    pub fn new(map: &'a Map, separator: &'a Separator) -> Self {
        Self { map, separator }
    }

    /// The raw backing map.
    pub fn entries(&self) -> &'a Map {
        self.map
    }

    pub fn separator(&self) -> &'a Separator {
        self.separator
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a String> + use<'a> {
        self.map.keys()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Copies the viewed map into an owned document with the same separator.
    pub fn to_document(&self) -> Document {
        Document::from(self.map.clone()).set_separator(self.separator.clone())
    }

    /// Raw value stored at `path`.
    pub fn get(&self, path: &str) -> Option<&'a Value> {
        resolve(self.map, path, self.separator)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Gets a value by path with a checked conversion to `T`.
    ///
    /// Absent paths and explicit nulls give `Ok(None)`; a value of another
    /// type gives [`AccessError::TypeMismatch`].
    pub fn get_as<T>(&self, path: &str) -> Result<Option<T>, AccessError>
    where
        T: TryFrom<&'a Value, Error = AccessError>,
    {
        match self.get(path) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::try_from(value).map(Some).map_err(|e| e.at_path(path)),
        }
    }

    /// Like [`ObjectView::get_as`], substituting `default` when absent.
    pub fn get_as_or<T>(&self, path: &str, default: T) -> Result<T, AccessError>
    where
        T: TryFrom<&'a Value, Error = AccessError>,
    {
        Ok(self.get_as(path)?.unwrap_or(default))
    }

    pub fn get_long(&self, path: &str) -> Result<Option<i64>, AccessError> {
        self.get_as(path)
    }

    pub fn get_long_or(&self, path: &str, default: i64) -> Result<i64, AccessError> {
        self.get_as_or(path, default)
    }

    pub fn get_integer(&self, path: &str) -> Result<Option<i32>, AccessError> {
        self.get_as(path)
    }

    pub fn get_integer_or(&self, path: &str, default: i32) -> Result<i32, AccessError> {
        self.get_as_or(path, default)
    }

    pub fn get_string(&self, path: &str) -> Result<Option<&'a str>, AccessError> {
        self.get_as(path)
    }

    pub fn get_string_or(&self, path: &str, default: &'a str) -> Result<&'a str, AccessError> {
        self.get_as_or(path, default)
    }

    pub fn get_double(&self, path: &str) -> Result<Option<f64>, AccessError> {
        self.get_as(path)
    }

    pub fn get_double_or(&self, path: &str, default: f64) -> Result<f64, AccessError> {
        self.get_as_or(path, default)
    }

    pub fn get_float(&self, path: &str) -> Result<Option<f32>, AccessError> {
        self.get_as(path)
    }

    pub fn get_float_or(&self, path: &str, default: f32) -> Result<f32, AccessError> {
        self.get_as_or(path, default)
    }

    pub fn get_boolean(&self, path: &str) -> Result<Option<bool>, AccessError> {
        self.get_as(path)
    }

    pub fn get_boolean_or(&self, path: &str, default: bool) -> Result<bool, AccessError> {
        self.get_as_or(path, default)
    }

    /// Nested map at `path`.
    ///
    /// `Ok(None)` when absent or null; [`AccessError::TypeMismatch`] when the
    /// value is not a map.
    pub fn get_any_object(&self, path: &str) -> Result<Option<ObjectView<'a>>, AccessError> {
        Ok(self
            .get_as::<&Map>(path)?
            .map(|map| ObjectView::new(map, self.separator)))
    }

    /// Nested list at `path`.
    ///
    /// `Ok(None)` when absent or null; [`AccessError::TypeMismatch`] when the
    /// value is not a list.
    pub fn get_iterable(&self, path: &str) -> Result<Option<AnyIterable<'a>>, AccessError> {
        Ok(self
            .get_as::<&[Value]>(path)?
            .map(|list| AnyIterable::new(list, self.separator)))
    }

    pub fn to_json(&self) -> Result<String, AccessError> {
        serde_json::to_string(self.map).map_err(|e| AccessError::EncodingFailed {
            reason: e.to_string(),
        })
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>, AccessError> {
        serde_json::to_vec(self.map).map_err(|e| AccessError::EncodingFailed {
            reason: e.to_string(),
        })
    }
}

impl AnyObject for ObjectView<'_> {
    fn as_view(&self) -> ObjectView<'_> {
        *self
    }
}

impl Serialize for ObjectView<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.map.serialize(serializer)
    }
}

impl PartialEq for ObjectView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl fmt::Debug for ObjectView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectView")
            .field("entries", self.map)
            .field("separator", self.separator)
            .finish()
    }
}

impl fmt::Display for ObjectView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        value::fmt_map(self.map, f)
    }
}

type OnceSource<'a> = Box<dyn Iterator<Item = &'a Value> + 'a>;

enum Source<'a> {
    /// Borrowed list, restartable
    Slice(&'a [Value]),
    /// Caller-supplied iterator, taken by the first traversal
    Once(RefCell<Option<OnceSource<'a>>>),
}

/// A read-only sequence whose elements are wrapped as they are yielded.
///
/// Each call to [`AnyIterable::iter`] starts a new traversal of the
/// underlying data. Iterables over document lists can be walked any number
/// of times; iterables built with [`AnyIterable::once`] can be walked once.
pub struct AnyIterable<'a> {
    source: Source<'a>,
    separator: &'a Separator,
}

impl<'a> AnyIterable<'a> {
    /// Creates a restartable iterable over a borrowed list.
    pub fn new(list: &'a [Value], separator: &'a Separator) -> Self {
        Self {
            source: Source::Slice(list),
            separator,
        }
    }

    /// Creates an iterable over a single-pass source.
    ///
    /// The first [`AnyIterable::iter`] takes the source; any later call fails
    /// with [`AccessError::ExhaustedSequence`].
    pub fn once<I>(source: I, separator: &'a Separator) -> Self
    where
        I: IntoIterator<Item = &'a Value>,
        I::IntoIter: 'a,
    {
        let source: OnceSource<'a> = Box::new(source.into_iter());
        Self {
            source: Source::Once(RefCell::new(Some(source))),
            separator,
        }
    }

    /// Starts a fresh traversal.
    pub fn iter(&self) -> Result<AnyIter<'a>, AccessError> {
        let cursor = match &self.source {
            Source::Slice(list) => Cursor::Slice(list.iter()),
            Source::Once(cell) => Cursor::Once(
                cell.borrow_mut()
                    .take()
                    .ok_or(AccessError::ExhaustedSequence)?,
            ),
        };
        Ok(AnyIter {
            cursor,
            separator: self.separator,
        })
    }

    /// True if [`AnyIterable::iter`] can be called again.
    pub fn is_reiterable(&self) -> bool {
        matches!(self.source, Source::Slice(_))
    }

    /// The raw backing list, `None` for single-pass sources.
    pub fn as_slice(&self) -> Option<&'a [Value]> {
        match self.source {
            Source::Slice(list) => Some(list),
            Source::Once(_) => None,
        }
    }

    /// Number of elements, `None` for single-pass sources.
    pub fn len(&self) -> Option<usize> {
        self.as_slice().map(<[Value]>::len)
    }

    /// True if the backing list is known to be empty.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Wrapped element at `index`, `None` if out of range or single-pass.
    pub fn get(&self, index: usize) -> Option<Element<'a>> {
        let value = self.as_slice()?.get(index)?;
        Some(wrap(value, self.separator))
    }
}

impl fmt::Debug for AnyIterable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Source::Slice(list) => f.debug_tuple("AnyIterable").field(list).finish(),
            Source::Once(_) => f.write_str("AnyIterable(<single-pass>)"),
        }
    }
}

enum Cursor<'a> {
    Slice(slice::Iter<'a, Value>),
    Once(OnceSource<'a>),
}

/// Iterator over an [`AnyIterable`], wrapping each element on `next()`.
pub struct AnyIter<'a> {
    cursor: Cursor<'a>,
    separator: &'a Separator,
}

impl AnyIter<'_> {
    /// Always fails: views are read-only.
    pub fn remove(&mut self) -> Result<(), AccessError> {
        Err(AccessError::UnsupportedOperation {
            operation: "remove",
        })
    }
}

impl<'a> Iterator for AnyIter<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = match &mut self.cursor {
            Cursor::Slice(iter) => iter.next(),
            Cursor::Once(iter) => iter.next(),
        }?;
        Some(wrap(value, self.separator))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.cursor {
            Cursor::Slice(iter) => iter.size_hint(),
            Cursor::Once(iter) => iter.size_hint(),
        }
    }
}

/// One element yielded by an [`AnyIter`].
#[derive(Debug)]
pub enum Element<'a> {
    /// Any non-container value, null included
    Scalar(&'a Value),
    /// A nested map
    Object(ObjectView<'a>),
    /// A nested list
    Iterable(AnyIterable<'a>),
}

impl<'a> Element<'a> {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Element::Scalar(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Element::Object(_))
    }

    pub fn is_iterable(&self) -> bool {
        matches!(self, Element::Iterable(_))
    }

    pub fn as_scalar(&self) -> Option<&'a Value> {
        match self {
            Element::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<ObjectView<'a>> {
        match self {
            Element::Object(view) => Some(*view),
            _ => None,
        }
    }

    pub fn as_iterable(&self) -> Option<&AnyIterable<'a>> {
        match self {
            Element::Iterable(iterable) => Some(iterable),
            _ => None,
        }
    }

    pub fn into_iterable(self) -> Option<AnyIterable<'a>> {
        match self {
            Element::Iterable(iterable) => Some(iterable),
            _ => None,
        }
    }

    /// Checked conversion of a scalar element.
    ///
    /// Nulls give `Ok(None)`; containers and scalars of another type give
    /// [`AccessError::TypeMismatch`].
    pub fn get_as<T>(&self) -> Result<Option<T>, AccessError>
    where
        T: TryFrom<&'a Value, Error = AccessError>,
    {
        match self {
            Element::Scalar(Value::Null) => Ok(None),
            Element::Scalar(value) => T::try_from(*value).map(Some),
            Element::Object(_) => Err(AccessError::mismatch("scalar", "map")),
            Element::Iterable(_) => Err(AccessError::mismatch("scalar", "list")),
        }
    }
}
