//! Shorthand constructors.
//!
//! Leaf constructors produce required schemas with default keywords. Use
//! the variant constructors directly with the `with_*` context builders for
//! anything more specific.

use super::Schema;
use crate::context::{
    ArrayContext, Context, IntegerContext, NumericContext, ObjectContext, StringContext,
};
use crate::reference::Reference;

impl Schema {
    pub fn boolean() -> Self {
        Self::Boolean(Context::new())
    }

    pub fn string() -> Self {
        Self::String(Context::new(), StringContext::new())
    }

    pub fn number() -> Self {
        Self::Number(Context::new(), NumericContext::new())
    }

    pub fn integer() -> Self {
        Self::Integer(Context::new(), IntegerContext::new())
    }

    /// Array with unconstrained items.
    pub fn array() -> Self {
        Self::Array(Context::new(), ArrayContext::new())
    }

    pub fn array_of(items: Schema) -> Self {
        Self::Array(Context::new(), ArrayContext::new().with_items(items))
    }

    /// Object without declared properties.
    pub fn object() -> Self {
        Self::Object(Context::new(), ObjectContext::new())
    }

    pub fn object_with<K: Into<String>>(properties: impl IntoIterator<Item = (K, Schema)>) -> Self {
        Self::Object(Context::new(), ObjectContext::new().with_properties(properties))
    }

    pub fn all_of(schemas: impl IntoIterator<Item = Schema>) -> Self {
        Self::AllOf(schemas.into_iter().collect())
    }

    pub fn one_of(schemas: impl IntoIterator<Item = Schema>) -> Self {
        Self::OneOf(schemas.into_iter().collect())
    }

    pub fn any_of(schemas: impl IntoIterator<Item = Schema>) -> Self {
        Self::AnyOf(schemas.into_iter().collect())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(schema: Schema) -> Self {
        Self::Not(Box::new(schema))
    }

    pub fn reference(reference: Reference) -> Self {
        Self::Reference(reference)
    }

    /// `$ref: '#/components/schemas/<name>'`.
    pub fn component(name: impl Into<String>) -> Self {
        Self::Reference(Reference::component(name))
    }

    /// The empty schema `{}`.
    pub fn undefined() -> Self {
        Self::Undefined { description: None }
    }
}
