//! Keyword containers attached to schema kinds.
//!
//! [`Context`] holds the keywords every leaf kind shares. The refinement
//! contexts hold the keywords unique to one kind. Both encode into, and
//! decode from, the same flat JSON object.

mod array;
mod numeric;
mod object;
mod string;

pub use array::ArrayContext;
pub use numeric::{Bound, BoundValue, IntegerContext, NumericContext, RangeContext};
pub use object::{AdditionalProperties, ObjectContext};
pub use string::StringContext;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::decoder::ObjectDecoder;
use crate::error::DecodingError;
use crate::external_doc::ExternalDoc;
use crate::format::OpenApiFormat;
use crate::fragment::{decoded_example_text, example_text, ExampleEncoder};

/// Read/write permission of a property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Permissions {
    ReadOnly,
    WriteOnly,
    #[default]
    ReadWrite,
}

/// Read access to the generic keywords regardless of the format type.
pub trait SchemaContext {
    fn required(&self) -> bool;
    fn nullable(&self) -> bool;
    fn permissions(&self) -> Permissions;
    fn deprecated(&self) -> bool;
    fn title(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;
    fn external_docs(&self) -> Option<&ExternalDoc>;
    fn allowed_values(&self) -> Option<&[Value]>;
    fn example(&self) -> Option<&str>;

    fn read_only(&self) -> bool {
        self.permissions() == Permissions::ReadOnly
    }

    fn write_only(&self) -> bool {
        self.permissions() == Permissions::WriteOnly
    }
}

/// Keywords shared by every leaf schema kind, parameterized by the kind's
/// format vocabulary.
///
/// `required` is not a wire keyword of the schema itself: the containing
/// object lists required property names, and decoding assigns the flag
/// top-down (see [`ObjectContext`]). A directly constructed context is
/// required; a decoded one starts out optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Context<F: OpenApiFormat> {
    pub format: F,
    pub required: bool,
    pub nullable: bool,
    pub permissions: Permissions,
    pub deprecated: bool,
    pub title: Option<String>,
    pub description: Option<String>,
    pub external_docs: Option<ExternalDoc>,
    /// Written as `enum`.
    pub allowed_values: Option<Vec<Value>>,
    /// Pre-serialized text fragment.
    pub example: Option<String>,
}

impl<F: OpenApiFormat> Default for Context<F> {
    fn default() -> Self {
        Self {
            format: F::unspecified(),
            required: true,
            nullable: false,
            permissions: Permissions::ReadWrite,
            deprecated: false,
            title: None,
            description: None,
            external_docs: None,
            allowed_values: None,
            example: None,
        }
    }
}

impl<F: OpenApiFormat> Context<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only(&self) -> bool {
        self.permissions == Permissions::ReadOnly
    }

    pub fn write_only(&self) -> bool {
        self.permissions == Permissions::WriteOnly
    }

    // ------------------------------------------------------------------
    // Transformations

    pub fn as_optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }

    pub fn as_required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub fn as_nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    pub fn with_allowed_values(self, allowed_values: Vec<Value>) -> Self {
        Self {
            allowed_values: Some(allowed_values),
            ..self
        }
    }

    /// Stores `example` serialized by `encoder`. If the encoder fails, a
    /// scalar is stored as a fragment and a compound value is dropped,
    /// leaving `example` unset.
    pub fn with_example<T, E>(self, example: &T, encoder: &E) -> Self
    where
        T: Serialize + ?Sized,
        E: ExampleEncoder + ?Sized,
    {
        Self {
            example: example_text(example, encoder),
            ..self
        }
    }

    // ------------------------------------------------------------------
    // Builders

    pub fn with_format(self, format: F) -> Self {
        Self { format, ..self }
    }

    pub fn with_permissions(self, permissions: Permissions) -> Self {
        Self {
            permissions,
            ..self
        }
    }

    pub fn with_deprecated(self, deprecated: bool) -> Self {
        Self { deprecated, ..self }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    pub fn with_external_docs(self, external_docs: ExternalDoc) -> Self {
        Self {
            external_docs: Some(external_docs),
            ..self
        }
    }

    // ------------------------------------------------------------------
    // Codec

    /// Writes `type` plus every keyword that differs from its default.
    pub(crate) fn encode_into(&self, map: &mut Map<String, Value>) {
        map.insert(
            "type".to_string(),
            Value::String(F::JSON_TYPE.as_str().to_string()),
        );
        if let Some(format) = self.format.raw() {
            map.insert("format".to_string(), Value::String(format.to_string()));
        }
        if let Some(values) = &self.allowed_values {
            map.insert("enum".to_string(), Value::Array(values.clone()));
        }
        if let Some(title) = &self.title {
            map.insert("title".to_string(), Value::String(title.clone()));
        }
        if let Some(description) = &self.description {
            map.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(external_docs) = &self.external_docs {
            map.insert("externalDocs".to_string(), external_docs.encode());
        }
        if self.nullable {
            map.insert("nullable".to_string(), Value::Bool(true));
        }
        match self.permissions {
            Permissions::ReadOnly => {
                map.insert("readOnly".to_string(), Value::Bool(true));
            }
            Permissions::WriteOnly => {
                map.insert("writeOnly".to_string(), Value::Bool(true));
            }
            Permissions::ReadWrite => {}
        }
        if self.deprecated {
            map.insert("deprecated".to_string(), Value::Bool(true));
        }
        if let Some(example) = &self.example {
            map.insert("example".to_string(), Value::String(example.clone()));
        }
    }

    pub(crate) fn decode(node: &ObjectDecoder<'_>) -> Result<Self, DecodingError> {
        let read_only = node.bool("readOnly")?.unwrap_or(false);
        let write_only = node.bool("writeOnly")?.unwrap_or(false);
        let permissions = match (read_only, write_only) {
            (false, false) => Permissions::ReadWrite,
            (true, false) => Permissions::ReadOnly,
            (false, true) => Permissions::WriteOnly,
            (true, true) => {
                return Err(DecodingError::Inconsistency {
                    subject: "Schema",
                    details: "either `readOnly` or `writeOnly` can be true but not both"
                        .to_string(),
                    path: node.path().clone(),
                })
            }
        };

        let external_docs = node
            .get("externalDocs")
            .map(|value| ExternalDoc::decode(value, node.child_path("externalDocs")))
            .transpose()?;

        Ok(Self {
            format: node
                .string("format")?
                .map(|raw| F::from_raw(&raw))
                .unwrap_or_default(),
            // assigned by the containing object, if any
            required: false,
            nullable: node.bool("nullable")?.unwrap_or(false),
            permissions,
            deprecated: node.bool("deprecated")?.unwrap_or(false),
            title: node.string("title")?,
            description: node.string("description")?,
            external_docs,
            allowed_values: node.array("enum")?.cloned(),
            example: node.get("example").map(decoded_example_text),
        })
    }
}

impl<F: OpenApiFormat> SchemaContext for Context<F> {
    fn required(&self) -> bool {
        self.required
    }

    fn nullable(&self) -> bool {
        self.nullable
    }

    fn permissions(&self) -> Permissions {
        self.permissions
    }

    fn deprecated(&self) -> bool {
        self.deprecated
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn external_docs(&self) -> Option<&ExternalDoc> {
        self.external_docs.as_ref()
    }

    fn allowed_values(&self) -> Option<&[Value]> {
        self.allowed_values.as_deref()
    }

    fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }
}
