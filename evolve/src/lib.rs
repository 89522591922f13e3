//! attrkit Evolve
//!
//! Copies of records with some fields changed.
//!
//! - `evolve` rebuilds through the type's initializer, so converters and
//!   validators run again on every init field.
//! - `assoc` copies the instance and overwrites fields in place, with no
//!   initializer and no hooks.

use attrkit_core::{AttrError, AttrResult, Record, Value};
use attrkit_registry::{FieldRegistry, InitArgs};

/// Named field changes, in caller order.
pub type Changes = Vec<(String, Value)>;

/// Build a new instance of `instance`'s type with `changes` applied.
///
/// Every init field not named in `changes` is taken from `instance`. A name
/// that is not an init field fails with an argument error naming the first
/// such key.
pub fn evolve<R, K>(
    registry: &R,
    instance: &Record,
    changes: impl IntoIterator<Item = (K, Value)>,
) -> AttrResult<Record>
where
    R: FieldRegistry + ?Sized,
    K: Into<String>,
{
    let type_id = instance.type_id();
    let fields = registry.fields(type_id)?;
    let mut changes: Changes = changes.into_iter().map(|(k, v)| (k.into(), v)).collect();

    tracing::debug!(
        type_name = %registry.type_name(type_id),
        changes = changes.len(),
        "evolving record"
    );

    let mut args = InitArgs::new();
    for (field, current) in fields.iter().zip(instance.values()) {
        if !field.init {
            continue;
        }
        let value = match changes.iter().position(|(name, _)| *name == field.name) {
            Some(position) => changes.remove(position).1,
            None => current.clone(),
        };
        args = args.kwarg(field.param_name(), value);
    }

    if let Some((name, _)) = changes.first() {
        return Err(AttrError::argument(format!(
            "evolve() got an unexpected keyword argument: '{}'",
            name
        )));
    }

    registry.construct(type_id, args)
}

/// `evolve` for a value that may not be a record.
pub fn evolve_value<R, K>(
    registry: &R,
    value: &Value,
    changes: impl IntoIterator<Item = (K, Value)>,
) -> AttrResult<Record>
where
    R: FieldRegistry + ?Sized,
    K: Into<String>,
{
    let instance = value
        .as_record()
        .ok_or_else(|| AttrError::not_a_record_type(value.type_name()))?;
    evolve(registry, instance, changes)
}

/// Copy `instance` and store `changes` directly into the copy.
///
/// Prefer `evolve`; this skips converters, validators and hooks, and can
/// write non-init fields.
pub fn assoc<R, K>(
    registry: &R,
    instance: &Record,
    changes: impl IntoIterator<Item = (K, Value)>,
) -> AttrResult<Record>
where
    R: FieldRegistry + ?Sized,
    K: Into<String>,
{
    let record_type = registry
        .record_type(instance.type_id())
        .ok_or_else(|| AttrError::not_a_record_type(instance.type_id().to_string()))?;

    let mut copy = instance.clone();
    for (name, value) in changes {
        let name = name.into();
        let index = record_type
            .field_index(&name)
            .ok_or_else(|| AttrError::unknown_field(&record_type.name, &name))?;
        copy.store(index, value);
    }
    Ok(copy)
}
