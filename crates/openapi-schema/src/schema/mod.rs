//! The schema value type.

mod builder;
mod codec;

use serde::Serialize;
use serde_json::Value;

use crate::context::{
    ArrayContext, Context, IntegerContext, NumericContext, ObjectContext, SchemaContext,
    StringContext,
};
use crate::error::TransformError;
use crate::external_doc::ExternalDoc;
use crate::format::{
    ArrayFormat, BooleanFormat, IntegerFormat, JsonTypeFormat, NumberFormat, ObjectFormat,
    StringFormat,
};
use crate::fragment::ExampleEncoder;
use crate::reference::Reference;

/// One OpenAPI Schema Object.
///
/// Leaf kinds carry a generic [`Context`] and, except for booleans, a
/// refinement context. Composition kinds carry only nested schemas, a
/// reference carries only its pointer, and `Undefined` is the empty schema
/// `{}` with an optional description.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Boolean(Context<BooleanFormat>),
    Object(Context<ObjectFormat>, ObjectContext),
    Array(Context<ArrayFormat>, ArrayContext),
    Number(Context<NumberFormat>, NumericContext),
    Integer(Context<IntegerFormat>, IntegerContext),
    String(Context<StringFormat>, StringContext),
    AllOf(Vec<Schema>),
    OneOf(Vec<Schema>),
    AnyOf(Vec<Schema>),
    Not(Box<Schema>),
    Reference(Reference),
    Undefined { description: Option<String> },
}

/// Rebuilds the generic context of a leaf schema; other kinds pass through.
macro_rules! map_context {
    ($schema:expr, $context:ident => $body:expr) => {
        match $schema {
            Schema::Boolean($context) => Schema::Boolean($body),
            Schema::Object($context, object) => Schema::Object($body, object),
            Schema::Array($context, array) => Schema::Array($body, array),
            Schema::Number($context, number) => Schema::Number($body, number),
            Schema::Integer($context, integer) => Schema::Integer($body, integer),
            Schema::String($context, string) => Schema::String($body, string),
            other @ (Schema::AllOf(_)
            | Schema::OneOf(_)
            | Schema::AnyOf(_)
            | Schema::Not(_)
            | Schema::Reference(_)
            | Schema::Undefined { .. }) => other,
        }
    };
}

impl Schema {
    /// Name of the active case.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Object(..) => "object",
            Self::Array(..) => "array",
            Self::Number(..) => "number",
            Self::Integer(..) => "integer",
            Self::String(..) => "string",
            Self::AllOf(_) => "allOf",
            Self::OneOf(_) => "oneOf",
            Self::AnyOf(_) => "anyOf",
            Self::Not(_) => "not",
            Self::Reference(_) => "reference",
            Self::Undefined { .. } => "undefined",
        }
    }

    /// Generic keywords of a leaf schema.
    pub fn context(&self) -> Option<&dyn SchemaContext> {
        match self {
            Self::Boolean(context) => Some(context),
            Self::Object(context, _) => Some(context),
            Self::Array(context, _) => Some(context),
            Self::Number(context, _) => Some(context),
            Self::Integer(context, _) => Some(context),
            Self::String(context, _) => Some(context),
            Self::AllOf(_)
            | Self::OneOf(_)
            | Self::AnyOf(_)
            | Self::Not(_)
            | Self::Reference(_)
            | Self::Undefined { .. } => None,
        }
    }

    pub fn json_type_format(&self) -> Option<JsonTypeFormat> {
        match self {
            Self::Boolean(context) => Some(JsonTypeFormat::Boolean(context.format.clone())),
            Self::Object(context, _) => Some(JsonTypeFormat::Object(context.format.clone())),
            Self::Array(context, _) => Some(JsonTypeFormat::Array(context.format.clone())),
            Self::Number(context, _) => Some(JsonTypeFormat::Number(context.format.clone())),
            Self::Integer(context, _) => Some(JsonTypeFormat::Integer(context.format.clone())),
            Self::String(context, _) => Some(JsonTypeFormat::String(context.format.clone())),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Accessors

    /// Composition and reference schemas count as required, the undefined
    /// schema as optional.
    pub fn required(&self) -> bool {
        match self {
            Self::Undefined { .. } => false,
            _ => self.context().map_or(true, |c| c.required()),
        }
    }

    pub fn nullable(&self) -> bool {
        self.context().is_some_and(|c| c.nullable())
    }

    pub fn read_only(&self) -> bool {
        self.context().is_some_and(|c| c.read_only())
    }

    pub fn write_only(&self) -> bool {
        self.context().is_some_and(|c| c.write_only())
    }

    pub fn deprecated(&self) -> bool {
        self.context().is_some_and(|c| c.deprecated())
    }

    pub fn title(&self) -> Option<&str> {
        self.context().and_then(|c| c.title())
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Undefined { description } => description.as_deref(),
            _ => self.context().and_then(|c| c.description()),
        }
    }

    pub fn external_docs(&self) -> Option<&ExternalDoc> {
        self.context().and_then(|c| c.external_docs())
    }

    pub fn allowed_values(&self) -> Option<&[Value]> {
        self.context().and_then(|c| c.allowed_values())
    }

    pub fn example(&self) -> Option<&str> {
        self.context().and_then(|c| c.example())
    }

    // ------------------------------------------------------------------
    // Transformations

    pub fn as_optional(self) -> Self {
        map_context!(self, context => context.as_optional())
    }

    pub fn as_required(self) -> Self {
        map_context!(self, context => context.as_required())
    }

    pub fn as_nullable(self) -> Self {
        map_context!(self, context => context.as_nullable())
    }

    pub fn with_allowed_values(self, allowed_values: Vec<Value>) -> Self {
        map_context!(self, context => context.with_allowed_values(allowed_values))
    }

    /// Attaches an example to a leaf schema.
    ///
    /// # Errors
    ///
    /// [`TransformError::ExampleNotSupported`] for composition, reference and
    /// undefined schemas, which have nowhere to keep one.
    pub fn with_example<T, E>(self, example: &T, encoder: &E) -> Result<Self, TransformError>
    where
        T: Serialize + ?Sized,
        E: ExampleEncoder + ?Sized,
    {
        match self {
            Self::Boolean(context) => Ok(Self::Boolean(context.with_example(example, encoder))),
            Self::Object(context, object) => {
                Ok(Self::Object(context.with_example(example, encoder), object))
            }
            Self::Array(context, array) => {
                Ok(Self::Array(context.with_example(example, encoder), array))
            }
            Self::Number(context, number) => {
                Ok(Self::Number(context.with_example(example, encoder), number))
            }
            Self::Integer(context, integer) => {
                Ok(Self::Integer(context.with_example(example, encoder), integer))
            }
            Self::String(context, string) => {
                Ok(Self::String(context.with_example(example, encoder), string))
            }
            other => Err(TransformError::ExampleNotSupported { kind: other.kind() }),
        }
    }
}
