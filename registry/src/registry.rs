//! The Registry - immutable field metadata lookup.

use crate::{FieldSpec, InitArgs, RecordType};
use attrkit_core::{AttrError, AttrResult, Record, TypeId, Value};
use std::collections::HashMap;

/// The capability every generated behavior consumes.
///
/// Projection, evolution and the setter executor only ever talk to a registry
/// through this trait, so a type system with its own field tables can plug in.
pub trait FieldRegistry {
    /// Look up a record type.
    fn record_type(&self, type_id: TypeId) -> Option<&RecordType>;

    /// Build a new instance through the type's initializer.
    fn construct(&self, type_id: TypeId, args: InitArgs) -> AttrResult<Record>;

    /// Ordered field specs of a record type.
    fn fields(&self, type_id: TypeId) -> AttrResult<&[FieldSpec]> {
        self.record_type(type_id)
            .map(|t| t.fields.as_slice())
            .ok_or_else(|| AttrError::not_a_record_type(type_id.to_string()))
    }

    /// Returns true if the type has field metadata. Never fails.
    fn is_record_type(&self, type_id: TypeId) -> bool {
        self.record_type(type_id).is_some()
    }

    /// Returns true if the value is an instance of a registered record type.
    fn is_record_value(&self, value: &Value) -> bool {
        value
            .as_record()
            .map(|r| self.is_record_type(r.type_id()))
            .unwrap_or(false)
    }

    /// Display name of a type, for messages.
    fn type_name(&self, type_id: TypeId) -> String {
        self.record_type(type_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| type_id.to_string())
    }
}

/// The Registry provides runtime lookup of record type definitions.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Registry {
    /// Record type definitions by ID.
    types: HashMap<TypeId, RecordType>,
    /// Record type ID lookup by name.
    type_names: HashMap<String, TypeId>,
}

impl Registry {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(types: HashMap<TypeId, RecordType>, type_names: HashMap<String, TypeId>) -> Self {
        Self { types, type_names }
    }

    // ==================== Type Lookups ====================

    /// Get a type definition by name.
    pub fn get_type_by_name(&self, name: &str) -> Option<&RecordType> {
        self.type_names.get(name).and_then(|id| self.types.get(id))
    }

    /// Get a type definition by ID.
    pub fn get_type(&self, id: TypeId) -> Option<&RecordType> {
        self.types.get(&id)
    }

    /// Get a type ID by name.
    pub fn get_type_id(&self, name: &str) -> Option<TypeId> {
        self.type_names.get(name).copied()
    }

    /// Get all type definitions.
    pub fn all_types(&self) -> impl Iterator<Item = &RecordType> {
        self.types.values()
    }

    /// Get the number of types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Alias for `is_record_type`.
    pub fn has(&self, type_id: TypeId) -> bool {
        self.types.contains_key(&type_id)
    }

    // ==================== Field Lookups ====================

    /// Get a field definition by type and name.
    pub fn field_by_name(&self, type_id: TypeId, name: &str) -> AttrResult<&FieldSpec> {
        let record_type = self
            .get_type(type_id)
            .ok_or_else(|| AttrError::not_a_record_type(type_id.to_string()))?;
        record_type
            .field(name)
            .ok_or_else(|| AttrError::unknown_field(&record_type.name, name))
    }

    /// Read a field of an instance by name.
    pub fn get_attr<'r>(&self, record: &'r Record, name: &str) -> AttrResult<&'r Value> {
        let field = self.field_by_name(record.type_id(), name)?;
        record
            .get(field.id().index())
            .ok_or_else(|| AttrError::unknown_field(self.type_name(record.type_id()), name))
    }
}

impl FieldRegistry for Registry {
    fn record_type(&self, type_id: TypeId) -> Option<&RecordType> {
        self.types.get(&type_id)
    }

    fn construct(&self, type_id: TypeId, args: InitArgs) -> AttrResult<Record> {
        crate::construct::construct(self, type_id, args)
    }
}
