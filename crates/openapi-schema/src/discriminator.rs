//! The `discriminator` object used alongside `oneOf`/`anyOf`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{CodingPath, DecodingError};
use crate::reference::Reference;

/// Names the property whose value selects one of several schemas.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discriminator {
    pub property_name: String,
    /// Discriminator value to schema name or `$ref` string.
    #[serde(default)]
    pub mapping: Option<IndexMap<String, String>>,
}

impl Discriminator {
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            mapping: None,
        }
    }

    pub fn with_mapping<K, V>(self, mapping: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            mapping: Some(
                mapping
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            ..self
        }
    }

    /// Schema selected by a discriminator value.
    ///
    /// Mapped targets containing `#` or `/` are `$ref` strings, other targets
    /// are component names. Unmapped values name a component directly.
    pub fn reference_for(&self, value: &str) -> Reference {
        match self.mapping.as_ref().and_then(|m| m.get(value)) {
            Some(target) if target.contains('#') || target.contains('/') => {
                Reference::parse(target)
            }
            Some(name) => Reference::component(name.clone()),
            None => Reference::component(value),
        }
    }

    pub fn decode(value: &Value, path: CodingPath) -> Result<Self, DecodingError> {
        Self::deserialize(value).map_err(|err| DecodingError::Invalid {
            subject: "Discriminator",
            message: err.to_string(),
            path,
        })
    }

    pub fn encode(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert(
            "propertyName".to_string(),
            Value::String(self.property_name.clone()),
        );
        if let Some(mapping) = &self.mapping {
            let mapping = mapping
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            map.insert("mapping".to_string(), Value::Object(mapping));
        }
        Value::Object(map)
    }
}

impl Serialize for Discriminator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}
