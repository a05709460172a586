//! The OpenAPI Example Object.
//!
//! Distinct from the schema-level `example` keyword, which this crate keeps
//! as a pre-serialized text fragment (see [`crate::fragment`]).

use serde_json::{Map, Value};

use crate::decoder::ObjectDecoder;
use crate::error::{CodingPath, DecodingError};

/// Either an inline `value` or a URL in `externalValue`.
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleValue {
    External(String),
    Inline(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub value: ExampleValue,
}

impl Example {
    pub fn inline(value: Value) -> Self {
        Self {
            summary: None,
            description: None,
            value: ExampleValue::Inline(value),
        }
    }

    pub fn external(url: impl Into<String>) -> Self {
        Self {
            summary: None,
            description: None,
            value: ExampleValue::External(url.into()),
        }
    }

    pub fn with_summary(self, summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..self
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    pub fn decode(value: &Value, path: CodingPath) -> Result<Self, DecodingError> {
        let node = ObjectDecoder::new(value, path)?;
        if node.contains("value") && node.contains("externalValue") {
            return Err(DecodingError::Inconsistency {
                subject: "Example",
                details: "found both `value` and `externalValue`".to_string(),
                path: node.path().clone(),
            });
        }
        let value = match node.string("externalValue")? {
            Some(url) => ExampleValue::External(url),
            None => match node.map().get("value") {
                Some(inline) => ExampleValue::Inline(inline.clone()),
                None => {
                    return Err(DecodingError::MissingKey {
                        key: "value",
                        path: node.path().clone(),
                    })
                }
            },
        };
        Ok(Self {
            summary: node.string("summary")?,
            description: node.string("description")?,
            value,
        })
    }

    pub fn encode(&self) -> Value {
        let mut map = Map::new();
        if let Some(summary) = &self.summary {
            map.insert("summary".to_string(), Value::String(summary.clone()));
        }
        if let Some(description) = &self.description {
            map.insert("description".to_string(), Value::String(description.clone()));
        }
        match &self.value {
            ExampleValue::External(url) => {
                map.insert("externalValue".to_string(), Value::String(url.clone()));
            }
            ExampleValue::Inline(value) => {
                map.insert("value".to_string(), value.clone());
            }
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_inline_value() {
        let example = Example::decode(
            &json!({"summary": "a dog", "value": {"name": "Rex"}}),
            CodingPath::root(),
        )
        .unwrap();
        assert_eq!(
            example,
            Example::inline(json!({"name": "Rex"})).with_summary("a dog")
        );
    }

    #[test]
    fn null_inline_value_is_kept() {
        let example = Example::decode(&json!({"value": null}), CodingPath::root()).unwrap();
        assert_eq!(example.value, ExampleValue::Inline(Value::Null));
    }

    #[test]
    fn decode_external_value() {
        let example = Example::decode(
            &json!({"externalValue": "https://example.com/dog.json", "description": "d"}),
            CodingPath::root(),
        )
        .unwrap();
        assert_eq!(
            example,
            Example::external("https://example.com/dog.json").with_description("d")
        );
    }

    #[test]
    fn both_values_is_inconsistent() {
        let err = Example::decode(
            &json!({"value": 1, "externalValue": "https://example.com"}),
            CodingPath::root().key("examples").key("one"),
        )
        .unwrap_err();
        assert!(matches!(err, DecodingError::Inconsistency { subject: "Example", .. }));
        assert_eq!(err.path().to_string(), "examples.one");
    }

    #[test]
    fn neither_value_is_missing_key() {
        let err = Example::decode(&json!({"summary": "x"}), CodingPath::root()).unwrap_err();
        assert!(matches!(err, DecodingError::MissingKey { key: "value", .. }));
    }

    #[test]
    fn encode_round_trips() {
        let value = json!({"summary": "s", "externalValue": "https://example.com"});
        assert_eq!(Example::decode(&value, CodingPath::root()).unwrap().encode(), value);
    }
}
