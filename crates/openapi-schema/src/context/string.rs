use serde_json::{Map, Value};

use crate::decoder::ObjectDecoder;
use crate::error::DecodingError;

/// Keywords specific to `type: string`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringContext {
    pub max_length: Option<u64>,
    pub min_length: u64,
    /// Regular expression text. Not compiled or checked here.
    pub pattern: Option<String>,
}

impl StringContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_length(self, max_length: u64) -> Self {
        Self {
            max_length: Some(max_length),
            ..self
        }
    }

    pub fn with_min_length(self, min_length: u64) -> Self {
        Self { min_length, ..self }
    }

    pub fn with_pattern(self, pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..self
        }
    }

    pub(crate) fn encode_into(&self, map: &mut Map<String, Value>) {
        if let Some(max_length) = self.max_length {
            map.insert("maxLength".to_string(), Value::from(max_length));
        }
        if self.min_length > 0 {
            map.insert("minLength".to_string(), Value::from(self.min_length));
        }
        if let Some(pattern) = &self.pattern {
            map.insert("pattern".to_string(), Value::String(pattern.clone()));
        }
    }

    pub(crate) fn decode(node: &ObjectDecoder<'_>) -> Result<Self, DecodingError> {
        Ok(Self {
            max_length: node.u64("maxLength")?,
            min_length: node.u64("minLength")?.unwrap_or(0),
            pattern: node.string("pattern")?,
        })
    }
}
