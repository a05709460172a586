//! The `externalDocs` object.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{CodingPath, DecodingError};

/// Link to documentation outside the document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalDoc {
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
}

impl ExternalDoc {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            description: None,
            url: url.into(),
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    pub(crate) fn decode(value: &Value, path: CodingPath) -> Result<Self, DecodingError> {
        Self::deserialize(value).map_err(|err| DecodingError::Invalid {
            subject: "ExternalDoc",
            message: err.to_string(),
            path,
        })
    }

    pub(crate) fn encode(&self) -> Value {
        let mut map = serde_json::Map::new();
        if let Some(description) = &self.description {
            map.insert("description".to_string(), Value::String(description.clone()));
        }
        map.insert("url".to_string(), Value::String(self.url.clone()));
        Value::Object(map)
    }
}

impl Serialize for ExternalDoc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}
