//! Pre-serialized example fragments.
//!
//! A schema stores its `example` as text. [`ExampleEncoder`] turns a typed
//! value into that text. When the encoder fails, scalar values fall back to
//! [`fragment_string`]; arrays and objects have no fallback, so their
//! example is dropped rather than failing the whole transformation.

use serde::Serialize;
use serde_json::Value;

/// Serializes example values to text.
pub trait ExampleEncoder {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, serde_json::Error>;
}

/// JSON text encoder for examples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonExampleEncoder {
    pretty: bool,
}

impl JsonExampleEncoder {
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ExampleEncoder for JsonExampleEncoder {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

/// Text form of a scalar JSON value. Strings are wrapped in quotes as-is
/// (no escaping); arrays and objects yield `None`.
///
/// # Example
///
/// ```
/// use openapi_schema::fragment_string;
/// use serde_json::json;
///
/// assert_eq!(fragment_string(&json!("hi")).as_deref(), Some("\"hi\""));
/// assert_eq!(fragment_string(&json!(1.5)).as_deref(), Some("1.5"));
/// assert_eq!(fragment_string(&json!([1])), None);
/// ```
pub fn fragment_string(value: &Value) -> Option<String> {
    match value {
        Value::Array(_) | Value::Object(_) => None,
        Value::String(s) => Some(format!("\"{s}\"")),
        Value::Null | Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
    }
}

/// Example text for `value`, or `None` when it cannot be represented.
pub(crate) fn example_text<T, E>(value: &T, encoder: &E) -> Option<String>
where
    T: Serialize + ?Sized,
    E: ExampleEncoder + ?Sized,
{
    match encoder.encode(value) {
        Ok(text) => Some(text),
        Err(err) => {
            let fallback = serde_json::to_value(value)
                .ok()
                .as_ref()
                .and_then(fragment_string);
            if fallback.is_none() {
                tracing::debug!(error = %err, "dropping example that has no text fragment");
            }
            fallback
        }
    }
}

/// Text stored for an `example` read off the wire: strings verbatim, any
/// other JSON re-serialized.
pub(crate) fn decoded_example_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
