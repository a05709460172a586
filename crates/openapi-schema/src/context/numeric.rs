use std::fmt;

use serde_json::{Map, Value};

use crate::decoder::ObjectDecoder;
use crate::error::DecodingError;

/// Value type of a numeric range: `f64` for `number`, `i64` for `integer`.
pub trait BoundValue: Copy + PartialEq + fmt::Debug {
    fn read(node: &ObjectDecoder<'_>, key: &str) -> Result<Option<Self>, DecodingError>;
    /// `None` when JSON has no number for the value.
    fn to_value(self) -> Option<Value>;
}

impl BoundValue for f64 {
    fn read(node: &ObjectDecoder<'_>, key: &str) -> Result<Option<Self>, DecodingError> {
        node.f64(key)
    }

    fn to_value(self) -> Option<Value> {
        serde_json::Number::from_f64(self).map(Value::Number)
    }
}

impl BoundValue for i64 {
    fn read(node: &ObjectDecoder<'_>, key: &str) -> Result<Option<Self>, DecodingError> {
        node.i64(key)
    }

    fn to_value(self) -> Option<Value> {
        Some(Value::from(self))
    }
}

/// An upper or lower limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound<T> {
    pub value: T,
    pub exclusive: bool,
}

/// `multipleOf`, `maximum` and `minimum`.
///
/// Exclusivity uses the boolean `exclusiveMaximum`/`exclusiveMinimum`
/// companions of OpenAPI 3.0, written only when true.
///
/// JSON has no NaN or infinity. A non-finite `f64` keyword is left out of the
/// encoded object together with its exclusive flag, so it decodes as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeContext<T: BoundValue> {
    pub multiple_of: Option<T>,
    pub maximum: Option<Bound<T>>,
    pub minimum: Option<Bound<T>>,
}

pub type NumericContext = RangeContext<f64>;
pub type IntegerContext = RangeContext<i64>;

impl<T: BoundValue> Default for RangeContext<T> {
    fn default() -> Self {
        Self {
            multiple_of: None,
            maximum: None,
            minimum: None,
        }
    }
}

impl<T: BoundValue> RangeContext<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_multiple_of(self, multiple_of: T) -> Self {
        Self {
            multiple_of: Some(multiple_of),
            ..self
        }
    }

    pub fn with_maximum(self, value: T, exclusive: bool) -> Self {
        Self {
            maximum: Some(Bound { value, exclusive }),
            ..self
        }
    }

    pub fn with_minimum(self, value: T, exclusive: bool) -> Self {
        Self {
            minimum: Some(Bound { value, exclusive }),
            ..self
        }
    }

    pub(crate) fn encode_into(&self, map: &mut Map<String, Value>) {
        if let Some(multiple_of) = self.multiple_of.and_then(|v| encodable("multipleOf", v)) {
            map.insert("multipleOf".to_string(), multiple_of);
        }
        if let Some(maximum) = self.maximum {
            if let Some(value) = encodable("maximum", maximum.value) {
                map.insert("maximum".to_string(), value);
                if maximum.exclusive {
                    map.insert("exclusiveMaximum".to_string(), Value::Bool(true));
                }
            }
        }
        if let Some(minimum) = self.minimum {
            if let Some(value) = encodable("minimum", minimum.value) {
                map.insert("minimum".to_string(), value);
                if minimum.exclusive {
                    map.insert("exclusiveMinimum".to_string(), Value::Bool(true));
                }
            }
        }
    }

    pub(crate) fn decode(node: &ObjectDecoder<'_>) -> Result<Self, DecodingError> {
        let exclusive_maximum = node.bool("exclusiveMaximum")?.unwrap_or(false);
        let exclusive_minimum = node.bool("exclusiveMinimum")?.unwrap_or(false);
        Ok(Self {
            multiple_of: T::read(node, "multipleOf")?,
            maximum: T::read(node, "maximum")?.map(|value| Bound {
                value,
                exclusive: exclusive_maximum,
            }),
            minimum: T::read(node, "minimum")?.map(|value| Bound {
                value,
                exclusive: exclusive_minimum,
            }),
        })
    }
}

fn encodable<T: BoundValue>(keyword: &'static str, value: T) -> Option<Value> {
    let encoded = value.to_value();
    if encoded.is_none() {
        tracing::debug!(keyword, value = ?value, "dropping non-finite numeric keyword");
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodingPath;
    use serde_json::json;

    fn decode<T: BoundValue>(value: Value) -> Result<RangeContext<T>, DecodingError> {
        let node = ObjectDecoder::new(&value, CodingPath::root())?;
        RangeContext::decode(&node)
    }

    fn encode<T: BoundValue>(context: &RangeContext<T>) -> Value {
        let mut map = Map::new();
        context.encode_into(&mut map);
        Value::Object(map)
    }

    #[test]
    fn empty_context_encodes_nothing() {
        assert_eq!(encode(&NumericContext::new()), json!({}));
        assert_eq!(encode(&IntegerContext::new()), json!({}));
    }

    #[test]
    fn exclusive_flags_written_only_when_true() {
        let context = NumericContext::new()
            .with_multiple_of(0.5)
            .with_maximum(10.5, true)
            .with_minimum(-1.0, false);
        assert_eq!(
            encode(&context),
            json!({
                "multipleOf": 0.5,
                "maximum": 10.5,
                "exclusiveMaximum": true,
                "minimum": -1.0
            })
        );
    }

    #[test]
    fn non_finite_keywords_are_left_out() {
        let context = NumericContext::new()
            .with_multiple_of(f64::NAN)
            .with_maximum(f64::INFINITY, true)
            .with_minimum(f64::NEG_INFINITY, true);
        assert_eq!(encode(&context), json!({}));
        assert_eq!(decode::<f64>(encode(&context)).unwrap(), NumericContext::new());

        let context = NumericContext::new()
            .with_maximum(f64::NAN, false)
            .with_minimum(2.5, true);
        assert_eq!(
            encode(&context),
            json!({"minimum": 2.5, "exclusiveMinimum": true})
        );
    }

    #[test]
    fn decode_number_bounds() {
        let context: NumericContext = decode(json!({
            "maximum": 3,
            "exclusiveMaximum": true,
            "minimum": 0.25
        }))
        .unwrap();
        assert_eq!(context.maximum, Some(Bound { value: 3.0, exclusive: true }));
        assert_eq!(context.minimum, Some(Bound { value: 0.25, exclusive: false }));
        assert_eq!(context.multiple_of, None);
    }

    #[test]
    fn exclusive_flag_without_bound_is_ignored() {
        let context: IntegerContext = decode(json!({"exclusiveMinimum": true})).unwrap();
        assert_eq!(context, IntegerContext::new());
    }

    #[test]
    fn decode_integer_bounds() {
        let context: IntegerContext = decode(json!({
            "multipleOf": 5,
            "maximum": 100,
            "minimum": 5.0,
            "exclusiveMinimum": true
        }))
        .unwrap();
        assert_eq!(
            context,
            IntegerContext::new()
                .with_multiple_of(5)
                .with_maximum(100, false)
                .with_minimum(5, true)
        );
    }

    #[test]
    fn integer_bounds_reject_fractions() {
        let err = decode::<i64>(json!({"maximum": 1.5})).unwrap_err();
        assert_eq!(err.path().to_string(), "maximum");
    }
}
