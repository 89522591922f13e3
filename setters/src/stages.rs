//! The setter stage catalog.

use attrkit_core::{AttrError, AttrResult, Record, Value};
use attrkit_registry::{FieldSpec, OnSetAttr, SetHook};

/// Store the value unchanged, skipping all hooks.
pub const NO_OP: OnSetAttr = OnSetAttr::NoOp;

/// Reject every write.
pub fn frozen() -> SetHook {
    SetHook::Frozen
}

/// Run the field's validator, if any, and pass the value through.
pub fn validate() -> SetHook {
    SetHook::Validate
}

/// Run the field's converter, if any.
pub fn convert() -> SetHook {
    SetHook::Convert
}

/// Thread a value through each hook in order.
pub fn pipe(hooks: impl IntoIterator<Item = SetHook>) -> SetHook {
    SetHook::Pipe(hooks.into_iter().collect())
}

/// Run a hook for a write of `value` to `field` on `instance`.
///
/// Returns the value to store.
pub fn apply(hook: &SetHook, instance: &Record, field: &FieldSpec, value: Value) -> AttrResult<Value> {
    match hook {
        SetHook::Frozen => Err(AttrError::frozen_attribute(&field.name)),
        SetHook::Validate => {
            if let Some(validator) = &field.validator {
                validator.validate(instance, field, &value)?;
            }
            Ok(value)
        }
        SetHook::Convert => match &field.converter {
            Some(converter) => converter
                .convert(value)
                .map_err(|e| e.for_field(&field.name)),
            None => Ok(value),
        },
        SetHook::Pipe(hooks) => hooks
            .iter()
            .try_fold(value, |value, hook| apply(hook, instance, field, value)),
        SetHook::Custom { name, func } => {
            tracing::trace!(hook = %name, field = %field.name, "running custom setter hook");
            func(instance, field, value)
        }
    }
}
