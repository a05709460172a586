//! Decoding and encoding of [`Schema`] values.
//!
//! Decoding picks the case in a fixed order:
//!
//! 1. a string `$ref` makes the node a reference;
//! 2. `allOf`, `anyOf`, `oneOf`, `not`, in that precedence, make it a
//!    composition (the first one present wins, the rest are ignored);
//! 3. an empty node, or one whose only key is `description`, is undefined;
//! 4. otherwise `type` must name one of the six primitive types.
//!
//! Structural keywords never stand in for a missing `type`:
//! `{"properties": {}}` is an error, not an object schema.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::Schema;
use crate::context::{
    ArrayContext, Context, IntegerContext, NumericContext, ObjectContext, StringContext,
};
use crate::decoder::ObjectDecoder;
use crate::error::{CodingPath, DecodingError, Error};
use crate::format::JsonType;
use crate::reference::Reference;

const COMPOSITION_KEYS: [&str; 4] = ["allOf", "anyOf", "oneOf", "not"];

impl Schema {
    /// Decodes a schema from a JSON node.
    ///
    /// # Example
    ///
    /// ```
    /// use openapi_schema::Schema;
    /// use serde_json::json;
    ///
    /// let schema = Schema::decode(&json!({
    ///     "type": "object",
    ///     "properties": {"name": {"type": "string"}},
    ///     "required": ["name"]
    /// }))
    /// .unwrap();
    /// assert_eq!(schema.kind(), "object");
    /// ```
    pub fn decode(value: &Value) -> Result<Self, DecodingError> {
        Self::decode_at(value, CodingPath::root())
    }

    pub(crate) fn decode_at(value: &Value, path: CodingPath) -> Result<Self, DecodingError> {
        let node = ObjectDecoder::new(value, path)?;
        let schema = Self::decode_node(&node)?;
        tracing::trace!(path = %node.path(), kind = schema.kind(), "decoded schema");
        Ok(schema)
    }

    fn decode_node(node: &ObjectDecoder<'_>) -> Result<Self, DecodingError> {
        if let Some(reference) = Reference::probe(node.map()) {
            return Ok(Self::Reference(reference));
        }

        if let Some(composition) = Self::decode_composition(node)? {
            return Ok(composition);
        }

        // Every key counts: `{"title": "x"}` is a missing type, not undefined.
        let keys = node.len();
        if keys == 0 || (keys == 1 && node.contains("description")) {
            return Ok(Self::Undefined {
                description: node.string("description")?,
            });
        }

        let json_type = match node.get("type") {
            None => {
                return Err(DecodingError::MissingType {
                    path: node.path().clone(),
                })
            }
            Some(Value::String(raw)) => {
                JsonType::parse(raw).ok_or_else(|| DecodingError::UnknownType {
                    found: raw.clone(),
                    path: node.path().clone(),
                })?
            }
            Some(_) => {
                return Err(DecodingError::TypeMismatch {
                    expected: "a string",
                    path: node.child_path("type"),
                })
            }
        };

        Ok(match json_type {
            JsonType::Boolean => Self::Boolean(Context::decode(node)?),
            JsonType::Object => Self::Object(Context::decode(node)?, ObjectContext::decode(node)?),
            JsonType::Array => Self::Array(Context::decode(node)?, ArrayContext::decode(node)?),
            JsonType::Number => Self::Number(Context::decode(node)?, NumericContext::decode(node)?),
            JsonType::Integer => {
                Self::Integer(Context::decode(node)?, IntegerContext::decode(node)?)
            }
            JsonType::String => Self::String(Context::decode(node)?, StringContext::decode(node)?),
        })
    }

    fn decode_composition(node: &ObjectDecoder<'_>) -> Result<Option<Self>, DecodingError> {
        let Some(key) = COMPOSITION_KEYS.into_iter().find(|key| node.contains(key)) else {
            return Ok(None);
        };
        let shadowed: Vec<&str> = COMPOSITION_KEYS
            .into_iter()
            .filter(|other| *other != key && node.contains(other))
            .collect();
        if !shadowed.is_empty() {
            tracing::debug!(
                path = %node.path(),
                used = key,
                ignored = ?shadowed,
                "schema has more than one composition keyword"
            );
        }

        let path = node.child_path(key);
        let value = node.map().get(key).unwrap_or(&Value::Null);
        let schema = match key {
            "not" => Self::Not(Box::new(Self::decode_at(value, path)?)),
            "allOf" => Self::AllOf(Self::decode_list(value, path)?),
            "anyOf" => Self::AnyOf(Self::decode_list(value, path)?),
            _ => Self::OneOf(Self::decode_list(value, path)?),
        };
        Ok(Some(schema))
    }

    fn decode_list(value: &Value, path: CodingPath) -> Result<Vec<Self>, DecodingError> {
        let items = value.as_array().ok_or_else(|| DecodingError::TypeMismatch {
            expected: "an array of schemas",
            path: path.clone(),
        })?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| Self::decode_at(item, path.index(i)))
            .collect()
    }

    /// Encodes the schema as one flat JSON object.
    pub fn encode(&self) -> Value {
        let mut map = Map::new();
        match self {
            Self::Boolean(context) => context.encode_into(&mut map),
            Self::Object(context, object) => {
                context.encode_into(&mut map);
                object.encode_into(&mut map);
            }
            Self::Array(context, array) => {
                context.encode_into(&mut map);
                array.encode_into(&mut map);
            }
            Self::Number(context, number) => {
                context.encode_into(&mut map);
                number.encode_into(&mut map);
            }
            Self::Integer(context, integer) => {
                context.encode_into(&mut map);
                integer.encode_into(&mut map);
            }
            Self::String(context, string) => {
                context.encode_into(&mut map);
                string.encode_into(&mut map);
            }
            Self::AllOf(schemas) => {
                map.insert("allOf".to_string(), encode_list(schemas));
            }
            Self::OneOf(schemas) => {
                map.insert("oneOf".to_string(), encode_list(schemas));
            }
            Self::AnyOf(schemas) => {
                map.insert("anyOf".to_string(), encode_list(schemas));
            }
            Self::Not(schema) => {
                map.insert("not".to_string(), schema.encode());
            }
            Self::Reference(reference) => reference.encode_into(&mut map),
            Self::Undefined { description } => {
                if let Some(description) = description {
                    map.insert("description".to_string(), Value::String(description.clone()));
                }
            }
        }
        Value::Object(map)
    }

    // ------------------------------------------------------------------
    // Text

    pub fn from_json_str(text: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::decode(&value)?)
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String, Error> {
        let value = self.encode();
        let text = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, Error> {
        let value: Value = serde_yaml::from_str(text)?;
        Ok(Self::decode(&value)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(&self.encode())?)
    }
}

fn encode_list(schemas: &[Schema]) -> Value {
    Value::Array(schemas.iter().map(Schema::encode).collect())
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::decode(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn composition_precedence() {
        let schema = Schema::decode(&json!({
            "oneOf": [{"type": "string"}],
            "not": {"type": "string"},
            "anyOf": [{"type": "integer"}]
        }))
        .unwrap();
        assert_eq!(schema, Schema::any_of([Schema::integer().as_optional()]));
    }

    #[test]
    fn reference_wins_over_everything() {
        let schema = Schema::decode(&json!({
            "$ref": "#/components/schemas/Pet",
            "allOf": [],
            "type": "string"
        }))
        .unwrap();
        assert_eq!(schema, Schema::component("Pet"));
    }

    #[test]
    fn composition_lists_must_be_arrays() {
        let err = Schema::decode(&json!({"allOf": {"type": "string"}})).unwrap_err();
        assert_eq!(err.path().to_string(), "allOf");
        let err = Schema::decode(&json!({"allOf": null})).unwrap_err();
        assert!(matches!(err, DecodingError::TypeMismatch { .. }));
    }

    #[test]
    fn type_must_be_a_string() {
        let err = Schema::decode(&json!({"type": ["string", "null"]})).unwrap_err();
        assert_eq!(err.path().to_string(), "type");
    }

    #[test]
    fn encode_undefined() {
        assert_eq!(Schema::undefined().encode(), json!({}));
        assert_eq!(
            Schema::Undefined {
                description: Some("x".to_string())
            }
            .encode(),
            json!({"description": "x"})
        );
    }

    #[test]
    fn serde_delegates_to_codec() {
        let schema: Schema = serde_json::from_value(json!({"type": "boolean"})).unwrap();
        assert_eq!(schema, Schema::boolean().as_optional());
        assert_eq!(serde_json::to_value(&schema).unwrap(), json!({"type": "boolean"}));

        let err = serde_json::from_value::<Schema>(json!({"title": "x"})).unwrap_err();
        assert!(err.to_string().contains("`type`"));
    }
}
