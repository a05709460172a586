//! `$ref` pointers to schemas held by a components registry.
//!
//! References are symbolic: this crate never resolves them. Resolving
//! `#/components/schemas/Pet` to an actual [`Schema`](crate::Schema) is the
//! job of whoever owns the registry.

use std::fmt;

use serde_json::{Map, Value};

use crate::pointer::{format_pointer, parse_pointer};

/// A reference into the same document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InternalReference {
    /// `#/components/schemas/<name>`.
    Component { name: String },
    /// Any other pointer into the document, stored as unescaped components.
    Path(Vec<String>),
}

/// A `$ref` value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    Internal(InternalReference),
    /// A reference to another document, kept verbatim (e.g. `pet.yml#/Pet`).
    External(String),
}

impl Reference {
    /// Wire key that marks a node as a reference.
    pub const KEY: &'static str = "$ref";
    /// Container kind of the registry component references point into.
    pub const CONTAINER_KIND: &'static str = "components";
    /// Element kind within the container.
    pub const ELEMENT_KIND: &'static str = "schemas";

    /// `#/components/schemas/<name>`.
    pub fn component(name: impl Into<String>) -> Self {
        Self::Internal(InternalReference::Component { name: name.into() })
    }

    pub fn external(target: impl Into<String>) -> Self {
        Self::External(target.into())
    }

    /// Classifies a raw `$ref` string.
    ///
    /// # Example
    ///
    /// ```
    /// use openapi_schema::Reference;
    ///
    /// assert_eq!(Reference::parse("#/components/schemas/Pet"), Reference::component("Pet"));
    /// assert_eq!(Reference::parse("pets.yml#/Pet"), Reference::external("pets.yml#/Pet"));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let Some(fragment) = raw.strip_prefix('#') else {
            return Self::External(raw.to_string());
        };
        let Some(components) = parse_pointer(fragment) else {
            return Self::External(raw.to_string());
        };
        match components.as_slice() {
            [container, element, name]
                if container == Self::CONTAINER_KIND && element == Self::ELEMENT_KIND =>
            {
                Self::component(name.clone())
            }
            _ => Self::Internal(InternalReference::Path(components)),
        }
    }

    /// The `$ref` string.
    pub fn path(&self) -> String {
        match self {
            Self::Internal(InternalReference::Component { name }) => format!(
                "#{}",
                format_pointer(&[Self::CONTAINER_KIND, Self::ELEMENT_KIND, name.as_str()])
            ),
            Self::Internal(InternalReference::Path(components)) => {
                format!("#{}", format_pointer(components))
            }
            Self::External(target) => target.clone(),
        }
    }

    /// Component name for `#/components/schemas/<name>` references.
    pub fn component_name(&self) -> Option<&str> {
        match self {
            Self::Internal(InternalReference::Component { name }) => Some(name),
            _ => None,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }

    /// Recognizes a reference node by its `$ref` key. A `$ref` that is not a
    /// string does not make the node a reference.
    pub(crate) fn probe(node: &Map<String, Value>) -> Option<Self> {
        match node.get(Self::KEY)? {
            Value::String(raw) => Some(Self::parse(raw)),
            other => {
                tracing::debug!(found = %other, "ignoring non-string $ref");
                None
            }
        }
    }

    pub(crate) fn encode_into(&self, map: &mut Map<String, Value>) {
        map.insert(Self::KEY.to_string(), Value::String(self.path()));
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
