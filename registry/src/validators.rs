//! Field validators.
//!
//! A validator inspects `(instance, field, value)` and either accepts it or
//! fails with `AttrError::Validation`. Validators never transform values.

use crate::FieldSpec;
use attrkit_core::{AttrError, AttrResult, Record, TypeHint, Value};
use std::fmt;
use std::sync::Arc;

/// Signature of a validator function.
pub type ValidateFn = dyn Fn(&Record, &FieldSpec, &Value) -> AttrResult<()> + Send + Sync;

/// A named, shareable validator.
#[derive(Clone)]
pub struct Validator {
    name: String,
    func: Arc<ValidateFn>,
}

impl Validator {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Record, &FieldSpec, &Value) -> AttrResult<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the validator.
    pub fn validate(&self, instance: &Record, field: &FieldSpec, value: &Value) -> AttrResult<()> {
        (self.func)(instance, field, value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validator({})", self.name)
    }
}

/// All validators must accept; stops at the first failure.
pub fn and_(validators: impl IntoIterator<Item = Validator>) -> Validator {
    let validators: Vec<Validator> = validators.into_iter().collect();
    let name = format!(
        "and({})",
        validators
            .iter()
            .map(|v| v.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Validator::new(name, move |instance, field, value| {
        validators
            .iter()
            .try_for_each(|v| v.validate(instance, field, value))
    })
}

/// At least one validator must accept; stops at the first success.
pub fn or_(validators: impl IntoIterator<Item = Validator>) -> Validator {
    let validators: Vec<Validator> = validators.into_iter().collect();
    let names = validators
        .iter()
        .map(|v| v.name())
        .collect::<Vec<_>>()
        .join(", ");
    let name = format!("or({})", names);
    Validator::new(name, move |instance, field, value| {
        if validators
            .iter()
            .any(|v| v.validate(instance, field, value).is_ok())
        {
            return Ok(());
        }
        Err(AttrError::validation(
            &field.name,
            value,
            format!("none of ({}) accepted the value", names),
        ))
    })
}

/// Accept null, otherwise delegate.
pub fn optional(inner: Validator) -> Validator {
    let name = format!("optional({})", inner.name());
    Validator::new(name, move |instance, field, value| {
        if value.is_null() {
            return Ok(());
        }
        inner.validate(instance, field, value)
    })
}

/// Reject null.
pub fn not_null() -> Validator {
    Validator::new("not_null", |_, field, value| {
        if value.is_null() {
            return Err(AttrError::validation(&field.name, value, "must not be null"));
        }
        Ok(())
    })
}

/// Require the value to belong to a category.
pub fn instance_of(hint: impl Into<TypeHint>) -> Validator {
    let hint = hint.into();
    Validator::new(format!("instance_of({})", hint), move |_, field, value| {
        if hint.matches(value) {
            return Ok(());
        }
        Err(AttrError::validation(
            &field.name,
            value,
            format!("must be {}, got {}", hint, value.type_name()),
        ))
    })
}

/// Require the value to be one of `options`.
pub fn in_(options: impl IntoIterator<Item = Value>) -> Validator {
    let options: Vec<Value> = options.into_iter().collect();
    Validator::new("in", move |_, field, value| {
        if options.contains(value) {
            return Ok(());
        }
        Err(AttrError::validation(
            &field.name,
            value,
            format!("must be in {}", Value::List(options.clone())),
        ))
    })
}

/// Require a string that matches `pattern` in full.
pub fn matches(pattern: &str) -> AttrResult<Validator> {
    let re = regex_lite::Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
        AttrError::configuration(format!("invalid regex pattern {:?}: {}", pattern, e))
    })?;
    let pattern = pattern.to_string();
    Ok(Validator::new(
        format!("matches({:?})", pattern),
        move |_, field, value| match value.as_str() {
            Some(s) if re.is_match(s) => Ok(()),
            Some(_) => Err(AttrError::validation(
                &field.name,
                value,
                format!("must match {:?}", pattern),
            )),
            None => Err(AttrError::validation(
                &field.name,
                value,
                format!("must be a String matching {:?}", pattern),
            )),
        },
    ))
}

/// Require a numeric value within `[min, max]`. Null passes.
pub fn range(min: Option<Value>, max: Option<Value>) -> Validator {
    let range_desc = match (&min, &max) {
        (Some(lo), Some(hi)) => format!("[{}..{}]", lo, hi),
        (Some(lo), None) => format!("[>= {}]", lo),
        (None, Some(hi)) => format!("[<= {}]", hi),
        (None, None) => "[..]".to_string(),
    };
    Validator::new(format!("range{}", range_desc), move |_, field, value| {
        // Skip null values - they don't violate range constraints
        if value.is_null() {
            return Ok(());
        }
        let above_min = min.as_ref().map(|m| value.gte(m)).unwrap_or(true);
        let below_max = max.as_ref().map(|m| value.lte(m)).unwrap_or(true);
        if above_min && below_max {
            return Ok(());
        }
        Err(AttrError::validation(
            &field.name,
            value,
            format!("out of range {}", range_desc),
        ))
    })
}
