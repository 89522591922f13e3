//! Generated record equality and ordering.
//!
//! Equality looks at `eq` fields, ordering at `order` fields, both in
//! declaration order. A field with an `eq_key` comparator has its values
//! wrapped in that comparator's class before comparing.

use crate::{FieldRegistry, FieldSpec};
use attrkit_compare::{compare, CmpOp};
use attrkit_core::{Record, Value};
use std::cmp::Ordering;

fn values_equal<R: FieldRegistry + ?Sized>(
    registry: &R,
    field: &FieldSpec,
    a: &Value,
    b: &Value,
) -> bool {
    if let Some(class) = &field.eq_key {
        return compare(&class.wrap(a.clone()), CmpOp::Eq, &class.wrap(b.clone())).unwrap_or(false);
    }
    match (a, b) {
        (Value::Record(x), Value::Record(y)) if registry.is_record_type(x.type_id()) => {
            records_equal(registry, x, y)
        }
        _ => a == b,
    }
}

fn values_cmp<R: FieldRegistry + ?Sized>(
    registry: &R,
    field: &FieldSpec,
    a: &Value,
    b: &Value,
) -> Option<Ordering> {
    if let Some(class) = &field.eq_key {
        return class.wrap(a.clone()).partial_cmp(&class.wrap(b.clone()));
    }
    match (a, b) {
        (Value::Record(x), Value::Record(y)) if registry.is_record_type(x.type_id()) => {
            record_partial_cmp(registry, x, y)
        }
        _ => a.partial_cmp(b),
    }
}

/// Compare two records field by field over their `eq` fields.
///
/// Records of different types are never equal.
pub fn records_equal<R: FieldRegistry + ?Sized>(registry: &R, a: &Record, b: &Record) -> bool {
    if a.type_id() != b.type_id() {
        return false;
    }
    let Ok(fields) = registry.fields(a.type_id()) else {
        return a == b;
    };
    fields
        .iter()
        .zip(a.values().iter().zip(b.values()))
        .filter(|(field, _)| field.eq)
        .all(|(field, (x, y))| values_equal(registry, field, x, y))
}

/// Order two records lexicographically over their `order` fields.
///
/// Returns `None` for records of different types or unordered field values.
pub fn record_partial_cmp<R: FieldRegistry + ?Sized>(
    registry: &R,
    a: &Record,
    b: &Record,
) -> Option<Ordering> {
    if a.type_id() != b.type_id() {
        return None;
    }
    let fields = registry.fields(a.type_id()).ok()?;
    for (field, (x, y)) in fields.iter().zip(a.values().iter().zip(b.values())) {
        if !field.order {
            continue;
        }
        match values_cmp(registry, field, x, y)? {
            Ordering::Equal => continue,
            other => return Some(other),
        }
    }
    Some(Ordering::Equal)
}
