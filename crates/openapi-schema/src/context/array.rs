use serde_json::{Map, Value};

use crate::decoder::ObjectDecoder;
use crate::error::DecodingError;
use crate::schema::Schema;

/// Keywords specific to `type: array`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayContext {
    /// Schema of every element.
    pub items: Option<Box<Schema>>,
    pub max_items: Option<u64>,
    pub min_items: u64,
    pub unique_items: bool,
}

impl ArrayContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(self, items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..self
        }
    }

    pub fn with_max_items(self, max_items: u64) -> Self {
        Self {
            max_items: Some(max_items),
            ..self
        }
    }

    pub fn with_min_items(self, min_items: u64) -> Self {
        Self { min_items, ..self }
    }

    pub fn with_unique_items(self, unique_items: bool) -> Self {
        Self {
            unique_items,
            ..self
        }
    }

    pub(crate) fn encode_into(&self, map: &mut Map<String, Value>) {
        if let Some(items) = &self.items {
            map.insert("items".to_string(), items.encode());
        }
        if let Some(max_items) = self.max_items {
            map.insert("maxItems".to_string(), Value::from(max_items));
        }
        if self.min_items > 0 {
            map.insert("minItems".to_string(), Value::from(self.min_items));
        }
        if self.unique_items {
            map.insert("uniqueItems".to_string(), Value::Bool(true));
        }
    }

    pub(crate) fn decode(node: &ObjectDecoder<'_>) -> Result<Self, DecodingError> {
        let items = node
            .get("items")
            .map(|items| Schema::decode_at(items, node.child_path("items")))
            .transpose()?
            .map(Box::new);
        Ok(Self {
            items,
            max_items: node.u64("maxItems")?,
            min_items: node.u64("minItems")?.unwrap_or(0),
            unique_items: node.bool("uniqueItems")?.unwrap_or(false),
        })
    }
}
