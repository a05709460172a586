//! decode(encode(s)) == s over generated schema trees.
//!
//! Decoding assigns `required` only to listed properties, so generated
//! schemas keep every non-property node optional and pick the flag freely
//! for properties. Examples are generated as text, the form they take once
//! stored; compound example loss is covered in `schema_codec.rs`.

use openapi_schema::{
    AdditionalProperties, ArrayContext, ArrayFormat, BooleanFormat, Bound, BoundValue, Context,
    ExternalDoc, IntegerFormat, NumberFormat, ObjectContext, ObjectFormat, OpenApiFormat,
    Permissions, RangeContext, Reference, Schema, StringContext, StringFormat,
};
use proptest::collection::{btree_map, vec};
use proptest::option;
use proptest::prelude::*;
use serde_json::{json, Value};

fn other_format() -> impl Strategy<Value = String> {
    "x-[a-z]{1,6}"
}

fn boolean_format() -> BoxedStrategy<BooleanFormat> {
    prop_oneof![Just(BooleanFormat::Unspecified), other_format().prop_map(BooleanFormat::Other)]
        .boxed()
}

fn object_format() -> BoxedStrategy<ObjectFormat> {
    prop_oneof![Just(ObjectFormat::Unspecified), other_format().prop_map(ObjectFormat::Other)]
        .boxed()
}

fn array_format() -> BoxedStrategy<ArrayFormat> {
    prop_oneof![Just(ArrayFormat::Unspecified), other_format().prop_map(ArrayFormat::Other)]
        .boxed()
}

fn number_format() -> BoxedStrategy<NumberFormat> {
    prop_oneof![
        Just(NumberFormat::Unspecified),
        Just(NumberFormat::Float),
        Just(NumberFormat::Double),
        other_format().prop_map(NumberFormat::Other),
    ]
    .boxed()
}

fn integer_format() -> BoxedStrategy<IntegerFormat> {
    prop_oneof![
        Just(IntegerFormat::Unspecified),
        Just(IntegerFormat::Int32),
        Just(IntegerFormat::Int64),
        other_format().prop_map(IntegerFormat::Other),
    ]
    .boxed()
}

fn string_format() -> BoxedStrategy<StringFormat> {
    prop_oneof![
        Just(StringFormat::Unspecified),
        Just(StringFormat::Byte),
        Just(StringFormat::Binary),
        Just(StringFormat::Date),
        Just(StringFormat::DateTime),
        Just(StringFormat::Password),
        other_format().prop_map(StringFormat::Other),
    ]
    .boxed()
}

fn permissions() -> impl Strategy<Value = Permissions> {
    prop_oneof![
        Just(Permissions::ReadWrite),
        Just(Permissions::ReadOnly),
        Just(Permissions::WriteOnly),
    ]
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
    ]
}

/// Multiples of 0.25, which survive a trip through decimal text exactly.
fn quarters() -> impl Strategy<Value = f64> + Clone {
    (-4_000_000i64..4_000_000).prop_map(|n| n as f64 / 4.0)
}

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .]{0,12}"
}

fn context<F: OpenApiFormat + 'static>(
    format: BoxedStrategy<F>,
) -> impl Strategy<Value = Context<F>> {
    (
        format,
        any::<bool>(),
        permissions(),
        any::<bool>(),
        option::of(text()),
        option::of(text()),
        option::of((option::of(text()), "https://[a-z]{1,8}\\.org")),
        option::of(vec(scalar(), 0..4)),
        option::of(text()),
    )
        .prop_map(
            |(format, nullable, permissions, deprecated, title, description, docs, values, example)| {
                Context {
                    format,
                    required: false,
                    nullable,
                    permissions,
                    deprecated,
                    title,
                    description,
                    external_docs: docs.map(|(description, url)| ExternalDoc { description, url }),
                    allowed_values: values,
                    example,
                }
            },
        )
}

fn bound<T: BoundValue + 'static>(value: impl Strategy<Value = T>) -> impl Strategy<Value = Bound<T>> {
    (value, any::<bool>()).prop_map(|(value, exclusive)| Bound { value, exclusive })
}

fn range<T, S>(value: S) -> impl Strategy<Value = RangeContext<T>>
where
    T: BoundValue + 'static,
    S: Strategy<Value = T> + Clone,
{
    (
        option::of(value.clone()),
        option::of(bound(value.clone())),
        option::of(bound(value)),
    )
        .prop_map(|(multiple_of, maximum, minimum)| RangeContext {
            multiple_of,
            maximum,
            minimum,
        })
}

fn leaf() -> BoxedStrategy<Schema> {
    prop_oneof![
        context(boolean_format()).prop_map(Schema::Boolean),
        (context(number_format()), range(quarters()))
            .prop_map(|(c, r)| Schema::Number(c, r)),
        (context(integer_format()), range(any::<i64>()))
            .prop_map(|(c, r)| Schema::Integer(c, r)),
        (
            context(string_format()),
            option::of(any::<u64>()),
            0u64..16,
            option::of("[a-z^$.*]{1,8}")
        )
            .prop_map(|(c, max_length, min_length, pattern)| Schema::String(
                c,
                StringContext {
                    max_length,
                    min_length,
                    pattern,
                }
            )),
        Just(Schema::undefined()),
        option::of(text()).prop_map(|description| Schema::Undefined { description }),
        "[A-Z][a-z]{0,7}".prop_map(Schema::component),
        "[a-z]{1,6}\\.yml#/[A-Z][a-z]{0,5}".prop_map(|r| Schema::reference(Reference::external(r))),
    ]
    .boxed()
}

fn schemas() -> impl Strategy<Value = Schema> {
    leaf().prop_recursive(4, 32, 4, |inner| {
        let property = (inner.clone(), any::<bool>())
            .prop_map(|(s, required)| if required { s.as_required() } else { s });
        let additional = prop_oneof![
            any::<bool>().prop_map(AdditionalProperties::Allowed),
            inner.clone().prop_map(|s| AdditionalProperties::Schema(Box::new(s))),
        ];
        prop_oneof![
            (
                context(array_format()),
                option::of(inner.clone()),
                option::of(any::<u64>()),
                0u64..8,
                any::<bool>()
            )
                .prop_map(|(c, items, max_items, min_items, unique_items)| Schema::Array(
                    c,
                    ArrayContext {
                        items: items.map(Box::new),
                        max_items,
                        min_items,
                        unique_items,
                    }
                )),
            (
                context(object_format()),
                btree_map("[a-z]{1,6}", property, 0..5),
                option::of(additional),
                option::of(any::<u64>()),
                0u64..4
            )
                .prop_map(|(c, properties, additional, max_properties, min_properties)| {
                    let mut object = ObjectContext::new()
                        .with_properties(properties)
                        .with_min_properties(min_properties);
                    object.additional_properties = additional;
                    object.max_properties = max_properties;
                    Schema::Object(c, object)
                }),
            vec(inner.clone(), 0..4).prop_map(Schema::AllOf),
            vec(inner.clone(), 0..4).prop_map(Schema::OneOf),
            vec(inner.clone(), 0..4).prop_map(Schema::AnyOf),
            inner.prop_map(Schema::not),
        ]
    })
}

proptest! {
    #[test]
    fn decode_inverts_encode(schema in schemas()) {
        let encoded = schema.encode();
        let decoded = Schema::decode(&encoded)
            .unwrap_or_else(|e| panic!("decode({encoded}) failed: {e}"));
        prop_assert_eq!(decoded, schema);
    }

    #[test]
    fn encode_is_stable(schema in schemas()) {
        let encoded = schema.encode();
        let again = Schema::decode(&encoded).map(|s| s.encode());
        prop_assert_eq!(again.ok(), Some(encoded));
    }

    #[test]
    fn text_round_trip(schema in schemas()) {
        let json = schema.to_json_string(false).unwrap();
        prop_assert_eq!(Schema::from_json_str(&json).unwrap(), schema.clone());
        let yaml = schema.to_yaml_string().unwrap();
        prop_assert_eq!(Schema::from_yaml_str(&yaml).unwrap(), schema);
    }
}

#[test]
fn example_text_survives_verbatim() {
    let schema = Schema::string().as_optional();
    let Schema::String(context, string) = schema else {
        unreachable!();
    };
    let schema = Schema::String(
        Context {
            example: Some(r#"{"looks": "like json"}"#.to_string()),
            ..context
        },
        string,
    );
    assert_eq!(schema.encode()["example"], json!(r#"{"looks": "like json"}"#));
    assert_eq!(Schema::decode(&schema.encode()).unwrap(), schema);
}
