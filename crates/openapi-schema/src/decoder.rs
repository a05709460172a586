//! Keyed reads over a JSON object node with path-aware errors.
//!
//! Keys that are absent or hold `null` read as `None`, the same way an
//! omitted keyword is treated.

use serde_json::{Map, Value};

use crate::error::{CodingPath, DecodingError};

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Borrowed view over one JSON object being decoded.
#[derive(Debug, Clone)]
pub(crate) struct ObjectDecoder<'a> {
    map: &'a Map<String, Value>,
    path: CodingPath,
}

impl<'a> ObjectDecoder<'a> {
    pub fn new(value: &'a Value, path: CodingPath) -> Result<Self, DecodingError> {
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            other => Err(DecodingError::NotAnObject {
                found: value_kind(other),
                path,
            }),
        }
    }

    pub fn map(&self) -> &'a Map<String, Value> {
        self.map
    }

    pub fn path(&self) -> &CodingPath {
        &self.path
    }

    pub fn child_path(&self, key: &str) -> CodingPath {
        self.path.key(key)
    }

    /// Number of keys, `null`-valued ones included.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Raw key presence, `null`-valued keys included.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match self.map.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn mismatch(&self, key: &str, expected: &'static str) -> DecodingError {
        DecodingError::TypeMismatch {
            expected,
            path: self.child_path(key),
        }
    }

    pub fn bool(&self, key: &str) -> Result<Option<bool>, DecodingError> {
        self.get(key)
            .map(|value| value.as_bool().ok_or_else(|| self.mismatch(key, "a boolean")))
            .transpose()
    }

    pub fn string(&self, key: &str) -> Result<Option<String>, DecodingError> {
        self.get(key)
            .map(|value| {
                value
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.mismatch(key, "a string"))
            })
            .transpose()
    }

    pub fn f64(&self, key: &str) -> Result<Option<f64>, DecodingError> {
        self.get(key)
            .map(|value| value.as_f64().ok_or_else(|| self.mismatch(key, "a number")))
            .transpose()
    }

    pub fn i64(&self, key: &str) -> Result<Option<i64>, DecodingError> {
        self.get(key)
            .map(|value| whole_number(value).ok_or_else(|| self.mismatch(key, "an integer")))
            .transpose()
    }

    pub fn u64(&self, key: &str) -> Result<Option<u64>, DecodingError> {
        self.get(key)
            .map(|value| {
                whole_unsigned(value).ok_or_else(|| self.mismatch(key, "a non-negative integer"))
            })
            .transpose()
    }

    pub fn array(&self, key: &str) -> Result<Option<&'a Vec<Value>>, DecodingError> {
        self.get(key)
            .map(|value| value.as_array().ok_or_else(|| self.mismatch(key, "an array")))
            .transpose()
    }

    pub fn strings(&self, key: &str) -> Result<Option<Vec<String>>, DecodingError> {
        let Some(items) = self.array(key)? else {
            return Ok(None);
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| DecodingError::TypeMismatch {
                        expected: "a string",
                        path: self.child_path(key).index(i),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

/// 2^63, the first float past `i64::MAX`.
const I64_END: f64 = 9_223_372_036_854_775_808.0;
/// 2^64, the first float past `u64::MAX`.
const U64_END: f64 = 18_446_744_073_709_551_616.0;

/// Integers written as `5` or `5.0` both read as whole numbers. Values
/// outside `i64` are rejected, never clamped.
fn whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    if value.is_u64() {
        return None;
    }
    let f = value.as_f64()?;
    (f.fract() == 0.0 && (-I64_END..I64_END).contains(&f)).then_some(f as i64)
}

/// Same as [`whole_number`] over the full `u64` range.
fn whole_unsigned(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    if value.is_i64() {
        return None;
    }
    let f = value.as_f64()?;
    (f.fract() == 0.0 && (0.0..U64_END).contains(&f)).then_some(f as u64)
}
