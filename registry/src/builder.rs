//! RegistryBuilder for constructing an immutable Registry.

use crate::{FieldSpec, OnSetAttr, RecordType, Registry, SetHook};
use attrkit_core::{FieldId, TypeId};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("Duplicate field name: {field} on type {type_name}")]
    DuplicateFieldName { type_name: String, field: String },

    #[error("Duplicate initializer parameter: {param} on type {type_name}")]
    DuplicateParamName { type_name: String, param: String },

    #[error(
        "No mandatory field allowed after a field with a default: {field} on type {type_name}"
    )]
    MandatoryAfterDefault { type_name: String, field: String },

    #[error("Frozen type {0} can't declare on-setattr hooks")]
    FrozenWithHooks(String),
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Next type ID to allocate.
    next_type_id: u32,
    /// Types being built.
    types: HashMap<TypeId, RecordType>,
    /// Type name to ID mapping.
    type_names: HashMap<String, TypeId>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record type definition.
    pub fn add_type(&mut self, name: impl Into<String>) -> TypeBuilder<'_> {
        let name = name.into();
        let id = TypeId::new(self.next_type_id);
        self.next_type_id += 1;

        TypeBuilder {
            builder: self,
            id,
            name,
            fields: Vec::new(),
            frozen: false,
            on_setattr: None,
        }
    }

    /// Look up the id of a type added so far.
    pub fn type_id(&self, name: &str) -> Option<TypeId> {
        self.type_names.get(name).copied()
    }

    /// Build the immutable Registry.
    ///
    /// Currently infallible: every type is checked when its `done()` runs,
    /// and a failed `done()` leaves nothing behind in the builder.
    pub fn build(self) -> Result<Registry, RegistryError> {
        tracing::debug!(types = self.types.len(), "building field registry");
        Ok(Registry::new(self.types, self.type_names))
    }
}

/// Builder for a record type definition.
pub struct TypeBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    id: TypeId,
    name: String,
    fields: Vec<FieldSpec>,
    frozen: bool,
    on_setattr: Option<OnSetAttr>,
}

impl<'a> TypeBuilder<'a> {
    /// Append a field. Declaration order is field order.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Reject every attribute write after construction.
    pub fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }

    /// Hooks for fields without their own override.
    ///
    /// Defaults to convert-then-validate.
    pub fn on_setattr(mut self, hooks: impl Into<OnSetAttr>) -> Self {
        self.on_setattr = Some(hooks.into());
        self
    }

    /// Finish building this type.
    pub fn done(self) -> Result<TypeId, RegistryError> {
        // Check for duplicate name
        if self.builder.type_names.contains_key(&self.name) {
            return Err(RegistryError::DuplicateTypeName(self.name));
        }

        let on_setattr = match (self.frozen, self.on_setattr) {
            (true, Some(_)) => return Err(RegistryError::FrozenWithHooks(self.name)),
            (true, None) => OnSetAttr::Hooks(SetHook::Frozen),
            (false, Some(hooks)) => hooks,
            (false, None) => OnSetAttr::convert_then_validate(),
        };

        let mut fields = self.fields;
        let mut seen_default = false;
        // A spec copied from another type gets a fresh id here.
        for (index, field) in fields.iter_mut().enumerate() {
            field.id = FieldId::new(self.id, index as u32);
            if field.alias.is_none() {
                field.alias = Some(field.param_name().to_string());
            }
        }

        for (index, field) in fields.iter().enumerate() {
            if fields[..index].iter().any(|f| f.name == field.name) {
                return Err(RegistryError::DuplicateFieldName {
                    type_name: self.name,
                    field: field.name.clone(),
                });
            }
            if field.init
                && fields[..index]
                    .iter()
                    .any(|f| f.init && f.param_name() == field.param_name())
            {
                return Err(RegistryError::DuplicateParamName {
                    type_name: self.name,
                    param: field.param_name().to_string(),
                });
            }
            // Only positional parameters are constrained.
            if field.init && !field.kw_only {
                if field.default.is_present() {
                    seen_default = true;
                } else if seen_default {
                    return Err(RegistryError::MandatoryAfterDefault {
                        type_name: self.name,
                        field: field.name.clone(),
                    });
                }
            }
        }

        let record_type = RecordType {
            id: self.id,
            name: self.name.clone(),
            fields,
            frozen: self.frozen,
            on_setattr,
        };

        self.builder.type_names.insert(self.name, self.id);
        self.builder.types.insert(self.id, record_type);

        Ok(self.id)
    }
}
