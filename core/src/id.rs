//! Identity types for record types and their fields.
//!
//! All identifiers are small copyable values that are:
//! - Unique within their registry
//! - Immutable once assigned
//! - Opaque to external users

use std::fmt;

/// Identifier for a record type in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Identity token of one field: the owning type plus the field's position.
///
/// Two `FieldSpec`s with the same name on different types have different ids,
/// which lets filters select one specific field rather than every field
/// sharing a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId {
    type_id: TypeId,
    index: u32,
}

impl FieldId {
    /// Id carried by a field spec that has not been registered yet.
    pub const UNASSIGNED: FieldId = FieldId {
        type_id: TypeId(u32::MAX),
        index: u32::MAX,
    };

    pub fn new(type_id: TypeId, index: u32) -> Self {
        Self { type_id, index }
    }

    /// The record type owning this field.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Position of the field in declaration order.
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Returns true if this id was assigned by a registry.
    pub fn is_assigned(&self) -> bool {
        *self != Self::UNASSIGNED
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_assigned() {
            write!(f, "{}.f{}", self.type_id, self.index)
        } else {
            write!(f, "f?")
        }
    }
}
