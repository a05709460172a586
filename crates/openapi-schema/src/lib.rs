//! Typed model and JSON/YAML codec for OpenAPI 3.0 Schema Objects.
//!
//! A [`Schema`] is one of six leaf kinds (`boolean`, `object`, `array`,
//! `number`, `integer`, `string`), one of four composition kinds (`allOf`,
//! `oneOf`, `anyOf`, `not`), a `$ref`, or the undefined schema `{}`.
//!
//! Leaf kinds share a generic [`Context`] whose format vocabulary is fixed by
//! the kind, so a string schema can only carry a [`StringFormat`]. Property
//! requiredness lives on each property schema rather than in a name list on
//! the parent object; the wire `required` array is derived when encoding and
//! folded back into the flags when decoding.
//!
//! ```
//! use openapi_schema::{Schema, StringContext, Context, StringFormat};
//!
//! let pet = Schema::object_with([
//!     ("id", Schema::integer()),
//!     ("name", Schema::String(
//!         Context::new().with_format(StringFormat::Password),
//!         StringContext::new().with_min_length(1),
//!     ).as_optional()),
//! ]);
//!
//! let text = pet.to_json_string(false).unwrap();
//! assert!(text.contains(r#""required":["id"]"#));
//!
//! let decoded = Schema::from_json_str(&text).unwrap();
//! assert_eq!(decoded, pet.as_optional());
//! ```

pub mod context;
mod decoder;
pub mod discriminator;
pub mod error;
pub mod example;
pub mod external_doc;
pub mod format;
pub mod fragment;
pub mod pointer;
pub mod reference;
pub mod schema;

pub use context::{
    AdditionalProperties, ArrayContext, Bound, BoundValue, Context, IntegerContext,
    NumericContext, ObjectContext, Permissions, RangeContext, SchemaContext, StringContext,
};
pub use discriminator::Discriminator;
pub use error::{CodingPath, DecodingError, Error, PathSegment, TransformError};
pub use example::{Example, ExampleValue};
pub use external_doc::ExternalDoc;
pub use format::{
    ArrayFormat, BooleanFormat, IntegerFormat, JsonType, JsonTypeFormat, NumberFormat,
    ObjectFormat, OpenApiFormat, StringFormat,
};
pub use fragment::{fragment_string, ExampleEncoder, JsonExampleEncoder};
pub use reference::{InternalReference, Reference};
pub use schema::Schema;
