//! Value types for documents.
//!
//! [`Value`] is the tagged union of everything a document can hold: scalars
//! (null, booleans, 32/64-bit integers and floats, strings) and the two
//! container shapes (string-keyed maps and lists). Reads out of a `Value` are
//! always checked: the `TryFrom<&Value>` implementations succeed only for the
//! exact runtime type, so an `Integer` is never silently read as a `Long`.

use std::{collections::BTreeMap, fmt};

use serde::{
    Serialize, Serializer,
    ser::{Error as _, SerializeMap, SerializeSeq},
};

use super::AccessError;

/// The string-keyed mapping backing documents and object views.
pub type Map = BTreeMap<String, Value>;

/// Values that can be stored in documents.
///
/// # Direct Comparisons
///
/// ```
/// # use anyobject::doc::Value;
/// let text = Value::String("hello".to_string());
/// let number = Value::Long(42);
///
/// assert!(text == "hello");
/// assert!(number == 42i64);
/// assert!(!(number == 42i32)); // Long and Integer are distinct
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Explicit null, read as absent by typed getters
    #[default]
    Null,
    Boolean(bool),
    /// 32-bit signed integer
    Integer(i32),
    /// 64-bit signed integer
    Long(i64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
    String(String),
    /// Nested mapping
    Map(Map),
    /// Ordered sequence of values
    List(Vec<Value>),
}

impl Value {
    /// Returns true if this is a scalar (including null)
    pub fn is_scalar(&self) -> bool {
        !self.is_container()
    }

    /// Returns true if this is a map or a list
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::List(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Map(_) => "map",
            Value::List(_) => "list",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to view this value as a mapping
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to view this value as a sequence
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Long(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Double(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Map(map) => fmt_map(map, f),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Debug-style rendering shared by `Value` and the document types.
pub(crate) fn fmt_map(map: &Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{{")?;
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{key}={value}")?;
    }
    write!(f, "}}")
}

// Natural JSON shape: no variant tags, containers become objects and arrays.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(n) => serializer.serialize_i32(*n),
            Value::Long(n) => serializer.serialize_i64(*n),
            Value::Float(n) if n.is_finite() => serializer.serialize_f32(*n),
            Value::Double(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Float(n) => Err(S::Error::custom(format!(
                "float {n} has no JSON representation"
            ))),
            Value::Double(n) => Err(S::Error::custom(format!(
                "double {n} has no JSON representation"
            ))),
            Value::String(s) => serializer.serialize_str(s),
            Value::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Value::List(list) => {
                let mut out = serializer.serialize_seq(Some(list.len()))?;
                for item in list {
                    out.serialize_element(item)?;
                }
                out.end()
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}

// Checked conversions. Each one accepts exactly one runtime type.
macro_rules! impl_try_from_value {
    ($target:ty, $variant:ident, $name:literal) => {
        impl TryFrom<&Value> for $target {
            type Error = AccessError;

            fn try_from(value: &Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$variant(inner) => Ok(inner.clone()),
                    other => Err(AccessError::mismatch($name, other.type_name())),
                }
            }
        }
    };
}

impl_try_from_value!(bool, Boolean, "boolean");
impl_try_from_value!(i32, Integer, "integer");
impl_try_from_value!(i64, Long, "long");
impl_try_from_value!(f32, Float, "float");
impl_try_from_value!(f64, Double, "double");
impl_try_from_value!(String, String, "string");

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = AccessError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value
            .as_str()
            .ok_or_else(|| AccessError::mismatch("string", value.type_name()))
    }
}

impl<'a> TryFrom<&'a Value> for &'a Map {
    type Error = AccessError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value
            .as_map()
            .ok_or_else(|| AccessError::mismatch("map", value.type_name()))
    }
}

impl<'a> TryFrom<&'a Value> for &'a [Value] {
    type Error = AccessError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value
            .as_list()
            .ok_or_else(|| AccessError::mismatch("list", value.type_name()))
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_i32() == Some(*other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == Some(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}
