//! Record instances.
//!
//! A record holds one value per field of its type, in the registry's declared
//! field order. Names, defaults and hooks live in the registry; the instance
//! itself only knows its type and its values.

use crate::{TypeId, Value};
use std::fmt;

/// An instance of a record type.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Type of this record (reference to registry).
    type_id: TypeId,
    /// Field values in declaration order.
    values: Vec<Value>,
}

impl Record {
    /// Create a record from values already in field order.
    pub fn new(type_id: TypeId, values: Vec<Value>) -> Self {
        Self { type_id, values }
    }

    /// Type of this record.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// All field values in declaration order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Get the value of the field at `index`.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Store a value directly, bypassing every on-setattr hook.
    ///
    /// Returns the previous value, or `None` if `index` is out of range
    /// (in which case nothing is stored).
    pub fn store(&mut self, index: usize, value: Value) -> Option<Value> {
        self.values
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the record type has no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the record, returning its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.type_id)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}
