//! JSON boundary for documents.
//!
//! Encoding goes through the `Serialize` impls of [`Value`] and
//! [`Document`](super::Document): the raw backing map is written, never the
//! view wrappers. Decoding maps JSON numbers the way a typical JSON binder
//! does: integers that fit in 32 bits become [`Value::Integer`], other
//! integers [`Value::Long`], and everything else [`Value::Double`].
//! Integers too large for a long are rejected rather than widened.

use serde_json::Number;

use super::{AccessError, Document, Map, Value};
use crate::config::AccessConfig;

fn number_to_value(number: &Number) -> Result<Value, AccessError> {
    if let Some(n) = number.as_i64() {
        return Ok(match i32::try_from(n) {
            Ok(small) => Value::Integer(small),
            Err(_) => Value::Long(n),
        });
    }
    if number.is_u64() {
        return Err(AccessError::DecodingFailed {
            reason: format!("integer {number} does not fit in a long"),
        });
    }
    number
        .as_f64()
        .map(Value::Double)
        .ok_or_else(|| AccessError::DecodingFailed {
            reason: format!("number {number} is not representable"),
        })
}

impl TryFrom<serde_json::Value> for Value {
    type Error = AccessError;

    /// Converts a `serde_json` tree into a [`Value`].
    ///
    /// # Errors
    /// Returns [`AccessError::DecodingFailed`] for integers above `i64::MAX`.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => number_to_value(&n)?,
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()?
                .into(),
            serde_json::Value::Object(fields) => Value::Map(map_from_json(fields)?),
        })
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = AccessError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        serde_json::to_value(value).map_err(|e| AccessError::EncodingFailed {
            reason: e.to_string(),
        })
    }
}

impl TryFrom<serde_json::Value> for Document {
    type Error = AccessError;

    /// Builds a document from a JSON object.
    ///
    /// # Errors
    /// Returns [`AccessError::DecodingFailed`] if the root is not an object
    /// or an integer does not fit in a long.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match Value::try_from(value)? {
            Value::Map(map) => Ok(Document::from(map)),
            other => Err(AccessError::DecodingFailed {
                reason: format!("document root must be an object, found {}", other.type_name()),
            }),
        }
    }
}

impl Document {
    /// Parses JSON text into a document split on the default separator.
    ///
    /// # Errors
    /// Returns [`AccessError::DecodingFailed`] for malformed JSON, a
    /// non-object root, or an integer above `i64::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anyobject::doc::{AnyObject, Document};
    /// let doc = Document::from_json(r#"{"user": {"id": 3000000000, "name": "ana"}}"#)?;
    /// assert_eq!(doc.get_long("user.id")?, Some(3_000_000_000));
    /// assert_eq!(doc.get_string("user.name")?, Some("ana"));
    /// # Ok::<(), anyobject::Error>(())
    /// ```
    pub fn from_json(text: &str) -> Result<Self, AccessError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| AccessError::DecodingFailed {
                reason: e.to_string(),
            })?;
        Document::try_from(value)
    }

    /// Parses JSON text into a document using the separator from `config`.
    pub fn from_json_with(text: &str, config: &AccessConfig) -> crate::Result<Self> {
        let separator = config.compile()?;
        Ok(Document::from_json(text)?.set_separator(separator))
    }

    /// The backing map as a `serde_json` value.
    pub fn to_json_value(&self) -> Result<serde_json::Value, AccessError> {
        serde_json::to_value(self.entries()).map_err(|e| AccessError::EncodingFailed {
            reason: e.to_string(),
        })
    }
}

fn map_from_json(
    object: serde_json::Map<String, serde_json::Value>,
) -> Result<Map, AccessError> {
    object
        .into_iter()
        .map(|(key, value)| Ok((key, Value::try_from(value)?)))
        .collect()
}
