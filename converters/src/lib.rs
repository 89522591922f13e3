//! attrkit Converters
//!
//! Reusable single-value normalizers for field converters.

use attrkit_core::{AttrError, AttrResult, Converter, Factory, FieldDefault, Value, ValueKind};
use std::sync::Arc;

const TRUTHY: [&str; 6] = ["true", "t", "yes", "y", "on", "1"];
const FALSY: [&str; 6] = ["false", "f", "no", "n", "off", "0"];

/// Compose converters left to right. With no converters, returns the identity.
pub fn pipe(converters: impl IntoIterator<Item = Converter>) -> Converter {
    converters
        .into_iter()
        .fold(Converter::identity(), |acc, next| acc.then(&next))
}

/// Pass null through unchanged, delegate everything else to `inner`.
///
/// Declared hints of `inner` are widened to admit null.
pub fn optional(inner: Converter) -> Converter {
    let input = inner.input_hint().cloned().map(|h| h.optional());
    let output = inner.output_hint().cloned().map(|h| h.optional());
    Converter::new("optional", move |value| {
        if value.is_null() {
            return Ok(Value::Null);
        }
        inner.convert(value)
    })
    .with_types(input, output)
}

/// Replace null with a default or a freshly produced value.
///
/// Exactly one of `default` and `factory` must be supplied. A default holding
/// a plain factory is unwrapped and used as the factory; one that takes self
/// is rejected.
pub fn default_if_none(
    default: FieldDefault,
    factory: Option<Arc<dyn Fn() -> Value + Send + Sync>>,
) -> AttrResult<Converter> {
    let replacement: Arc<dyn Fn() -> Value + Send + Sync> = match (default, factory) {
        (FieldDefault::NoDefault, None) => {
            return Err(AttrError::configuration(
                "must pass either `default` or `factory`",
            ))
        }
        (FieldDefault::NoDefault, Some(factory)) => factory,
        (_, Some(_)) => {
            return Err(AttrError::configuration(
                "must pass either `default` or `factory`, not both",
            ))
        }
        (FieldDefault::Factory(Factory::TakesSelf(_)), None) => {
            return Err(AttrError::configuration(
                "a factory that takes self can't be used to replace null",
            ))
        }
        (FieldDefault::Factory(Factory::Plain(factory)), None) => factory,
        (FieldDefault::Value(value), None) => Arc::new(move || value.clone()),
    };
    Ok(Converter::new("default_if_none", move |value| {
        if value.is_null() {
            return Ok(replacement());
        }
        Ok(value)
    }))
}

/// Convert a boolean-like value to `Value::Bool`.
///
/// Accepts booleans, the integers 0 and 1, and case-insensitively the strings
/// `true/t/yes/y/on/1` and `false/f/no/n/off/0`.
pub fn to_bool(value: Value) -> AttrResult<Value> {
    let token = match &value {
        Value::Bool(b) => return Ok(Value::Bool(*b)),
        Value::Int(i) => i.to_string(),
        Value::String(s) => s.to_lowercase(),
        _ => return Err(AttrError::value_format(&value, "bool")),
    };
    if TRUTHY.contains(&token.as_str()) {
        return Ok(Value::Bool(true));
    }
    if FALSY.contains(&token.as_str()) {
        return Ok(Value::Bool(false));
    }
    tracing::trace!(value = %value, "unrecognized boolean token");
    Err(AttrError::value_format(&value, "bool"))
}

/// `to_bool` as a converter.
pub fn to_bool_converter() -> Converter {
    Converter::new("to_bool", to_bool).with_types(None, Some(ValueKind::Bool.into()))
}
