//! Attribute writes on existing instances.

use attrkit_core::{AttrError, AttrResult, Record, Value};
use attrkit_registry::{FieldRegistry, OnSetAttr};

use crate::stages::apply;

/// Write `value` to the field `name` of `instance`.
///
/// The field's own on-setattr override wins over the type's pipeline. A
/// frozen type rejects every write before the field is even looked up.
pub fn set_attr<R: FieldRegistry + ?Sized>(
    registry: &R,
    instance: &mut Record,
    name: &str,
    value: Value,
) -> AttrResult<()> {
    let type_id = instance.type_id();
    let record_type = registry
        .record_type(type_id)
        .ok_or_else(|| AttrError::not_a_record_type(type_id.to_string()))?;

    if record_type.frozen {
        return Err(AttrError::frozen_attribute(name));
    }

    let index = record_type
        .field_index(name)
        .ok_or_else(|| AttrError::unknown_field(&record_type.name, name))?;
    let field = &record_type.fields[index];
    let pipeline = field.on_setattr.as_ref().unwrap_or(&record_type.on_setattr);

    tracing::debug!(
        type_name = %record_type.name,
        field = %name,
        pipeline = ?pipeline,
        "setting attribute"
    );

    let value = match pipeline {
        OnSetAttr::NoOp => value,
        OnSetAttr::Hooks(hook) => apply(hook, instance, field, value)?,
    };
    instance.store(index, value);
    Ok(())
}
