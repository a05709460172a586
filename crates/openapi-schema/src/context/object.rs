use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::decoder::ObjectDecoder;
use crate::error::DecodingError;
use crate::schema::Schema;

/// `additionalProperties`: a flag or a schema for undeclared properties.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<Schema>),
}

impl AdditionalProperties {
    fn encode(&self) -> Value {
        match self {
            Self::Allowed(allowed) => Value::Bool(*allowed),
            Self::Schema(schema) => schema.encode(),
        }
    }

    fn decode(value: &Value, node: &ObjectDecoder<'_>) -> Result<Self, DecodingError> {
        let path = node.child_path("additionalProperties");
        match value {
            Value::Bool(allowed) => Ok(Self::Allowed(*allowed)),
            Value::Object(_) => Ok(Self::Schema(Box::new(Schema::decode_at(value, path)?))),
            _ => Err(DecodingError::TypeMismatch {
                expected: "a boolean or a schema",
                path,
            }),
        }
    }
}

/// Keywords specific to `type: object`.
///
/// There is no stored `required` list. Each property schema's own
/// `required` flag decides membership, and the wire list is recomputed from
/// those flags on every encode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectContext {
    pub properties: IndexMap<String, Schema>,
    pub additional_properties: Option<AdditionalProperties>,
    pub max_properties: Option<u64>,
    min_properties: u64,
}

impl ObjectContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties<K: Into<String>>(
        self,
        properties: impl IntoIterator<Item = (K, Schema)>,
    ) -> Self {
        Self {
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
            ..self
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    pub fn with_additional_properties(self, additional: AdditionalProperties) -> Self {
        Self {
            additional_properties: Some(additional),
            ..self
        }
    }

    pub fn with_max_properties(self, max_properties: u64) -> Self {
        Self {
            max_properties: Some(max_properties),
            ..self
        }
    }

    /// Sets the floor of [`min_properties`](Self::min_properties).
    pub fn with_min_properties(self, min_properties: u64) -> Self {
        Self {
            min_properties,
            ..self
        }
    }

    /// Names of required properties, in property order.
    pub fn required_properties(&self) -> Vec<&str> {
        self.properties
            .iter()
            .filter(|(_, schema)| schema.required())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Never less than the number of required properties.
    pub fn min_properties(&self) -> u64 {
        let required = self.required_properties().len() as u64;
        self.min_properties.max(required)
    }

    pub(crate) fn encode_into(&self, map: &mut Map<String, Value>) {
        if let Some(max_properties) = self.max_properties {
            map.insert("maxProperties".to_string(), Value::from(max_properties));
        }
        if !self.properties.is_empty() {
            let properties = self
                .properties
                .iter()
                .map(|(name, schema)| (name.clone(), schema.encode()))
                .collect();
            map.insert("properties".to_string(), Value::Object(properties));
        }
        if let Some(additional) = &self.additional_properties {
            map.insert("additionalProperties".to_string(), additional.encode());
        }
        let required = self.required_properties();
        if !required.is_empty() {
            let required = required
                .into_iter()
                .map(|name| Value::String(name.to_string()))
                .collect();
            map.insert("required".to_string(), Value::Array(required));
        }
        // the floor, not the derived value, so decoding restores it exactly
        if self.min_properties > 0 {
            map.insert("minProperties".to_string(), Value::from(self.min_properties));
        }
    }

    pub(crate) fn decode(node: &ObjectDecoder<'_>) -> Result<Self, DecodingError> {
        let required = node.strings("required")?.unwrap_or_default();

        let mut properties = IndexMap::new();
        if let Some(value) = node.get("properties") {
            let path = node.child_path("properties");
            let members = ObjectDecoder::new(value, path.clone())?;
            for (name, member) in members.map() {
                let schema = Schema::decode_at(member, path.key(name.as_str()))?;
                let schema = if required.iter().any(|r| r == name) {
                    schema.as_required()
                } else {
                    schema
                };
                properties.insert(name.clone(), schema);
            }
        }

        let additional_properties = node
            .get("additionalProperties")
            .map(|value| AdditionalProperties::decode(value, node))
            .transpose()?;

        Ok(Self {
            properties,
            additional_properties,
            max_properties: node.u64("maxProperties")?,
            min_properties: node.u64("minProperties")?.unwrap_or(0),
        })
    }
}
