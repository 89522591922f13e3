//! The generated initializer.
//!
//! Construction fills every field in declaration order: supplied arguments
//! first, then defaults and factories. Converters run on every assigned value;
//! validators run afterwards against the complete instance.

use crate::{FieldRegistry, Registry};
use attrkit_core::{AttrError, AttrResult, FieldDefault, Record, TypeId, Value};

/// Arguments to a record initializer.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    positional: Vec<Value>,
    keyword: Vec<(String, Value)>,
}

impl InitArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyword arguments only, in the given order.
    pub fn keywords<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self {
            positional: Vec::new(),
            keyword: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Positional arguments only.
    pub fn positional(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            positional: values.into_iter().collect(),
            keyword: Vec::new(),
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append a keyword argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.push((name.into(), value.into()));
        self
    }
}

pub(crate) fn construct(registry: &Registry, type_id: TypeId, args: InitArgs) -> AttrResult<Record> {
    let record_type = registry
        .record_type(type_id)
        .ok_or_else(|| AttrError::not_a_record_type(type_id.to_string()))?;
    let type_name = &record_type.name;
    let fields = &record_type.fields;

    tracing::debug!(
        type_name = %type_name,
        positional = args.positional.len(),
        keyword = args.keyword.len(),
        "constructing record"
    );

    let mut supplied: Vec<Option<Value>> = vec![None; fields.len()];

    // Positional arguments bind to init, non-keyword-only fields in order.
    let positional_slots: Vec<usize> = fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.init && !f.kw_only)
        .map(|(i, _)| i)
        .collect();
    if args.positional.len() > positional_slots.len() {
        return Err(AttrError::argument(format!(
            "{}() takes {} positional arguments but {} were given",
            type_name,
            positional_slots.len(),
            args.positional.len()
        )));
    }
    for (slot, value) in positional_slots.iter().zip(args.positional) {
        supplied[*slot] = Some(value);
    }

    for (name, value) in args.keyword {
        let index = fields
            .iter()
            .position(|f| f.init && f.param_name() == name)
            .ok_or_else(|| {
                AttrError::argument(format!(
                    "{}() got an unexpected keyword argument '{}'",
                    type_name, name
                ))
            })?;
        if supplied[index].is_some() {
            return Err(AttrError::argument(format!(
                "{}() got multiple values for argument '{}'",
                type_name, name
            )));
        }
        supplied[index] = Some(value);
    }

    let mut record = Record::new(type_id, vec![Value::Null; fields.len()]);
    for ((index, field), arg) in fields.iter().enumerate().zip(supplied) {
        let value = match (arg, &field.default) {
            (Some(value), _) => value,
            (None, FieldDefault::Value(value)) => value.clone(),
            (None, FieldDefault::Factory(factory)) => factory.produce(&record),
            (None, FieldDefault::NoDefault) if field.init => {
                return Err(AttrError::argument(format!(
                    "{}() missing required argument: '{}'",
                    type_name,
                    field.param_name()
                )));
            }
            // Non-init field without a default stays null.
            (None, FieldDefault::NoDefault) => continue,
        };
        let value = match &field.converter {
            Some(converter) => converter
                .convert(value)
                .map_err(|e| e.for_field(&field.name))?,
            None => value,
        };
        record.store(index, value);
    }

    for (field, value) in fields.iter().zip(record.values()) {
        if let Some(validator) = &field.validator {
            validator.validate(&record, field, value)?;
        }
    }

    Ok(record)
}
