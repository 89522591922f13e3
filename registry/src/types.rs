//! Record type definitions.

use crate::{OnSetAttr, Validator};
use attrkit_compare::ComparatorClass;
use attrkit_core::{Converter, FieldDefault, FieldId, TypeHint, TypeId, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Immutable per-field metadata supplied by the type author.
pub type Metadata = Arc<BTreeMap<String, Value>>;

/// Field definition within a record type.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Identity token, assigned when the owning type is registered.
    pub(crate) id: FieldId,
    /// Field name, unique within its type.
    pub name: String,
    /// Fallback when no initializer argument is given.
    pub default: FieldDefault,
    /// Validator run by the initializer and by the `validate` hook.
    pub validator: Option<Validator>,
    /// Converter run by the initializer and by the `convert` hook.
    pub converter: Option<Converter>,
    /// Declared category.
    pub type_hint: TypeHint,
    /// Whether the initializer takes this field as a parameter.
    pub init: bool,
    /// Author metadata, never interpreted by attrkit.
    pub metadata: Metadata,
    /// Whether the field participates in generated equality.
    pub eq: bool,
    /// Whether the field participates in generated ordering.
    pub order: bool,
    /// Optional comparator class the field's values are wrapped in before comparing.
    pub eq_key: Option<Arc<ComparatorClass<Value>>>,
    /// Whether the initializer accepts this field by keyword only.
    pub kw_only: bool,
    /// Initializer parameter name; defaults to the name without leading underscores.
    pub alias: Option<String>,
    /// Per-field on-setattr override.
    pub on_setattr: Option<OnSetAttr>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FieldId::UNASSIGNED,
            name: name.into(),
            default: FieldDefault::NoDefault,
            validator: None,
            converter: None,
            type_hint: TypeHint::Any,
            init: true,
            metadata: Metadata::default(),
            eq: true,
            order: true,
            eq_key: None,
            kw_only: false,
            alias: None,
            on_setattr: None,
        }
    }

    /// Identity token of this field.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Name under which the initializer accepts this field.
    pub fn param_name(&self) -> &str {
        self.alias
            .as_deref()
            .unwrap_or_else(|| self.name.trim_start_matches('_'))
    }

    pub fn typed(mut self, hint: impl Into<TypeHint>) -> Self {
        self.type_hint = hint.into();
        self
    }

    pub fn with_default(mut self, default: impl Into<FieldDefault>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn with_converter(mut self, converter: Converter) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Exclude this field from the initializer.
    pub fn no_init(mut self) -> Self {
        self.init = false;
        self
    }

    pub fn kw_only(mut self) -> Self {
        self.kw_only = true;
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        Arc::make_mut(&mut self.metadata).insert(key.into(), value.into());
        self
    }

    /// Exclude from equality; also excludes from ordering.
    pub fn no_eq(mut self) -> Self {
        self.eq = false;
        self.order = false;
        self
    }

    pub fn no_order(mut self) -> Self {
        self.order = false;
        self
    }

    /// Compare this field's values through a synthesized comparator.
    pub fn compared_by(mut self, class: Arc<ComparatorClass<Value>>) -> Self {
        self.eq_key = Some(class);
        self
    }

    pub fn on_setattr(mut self, hooks: OnSetAttr) -> Self {
        self.on_setattr = Some(hooks);
        self
    }
}

/// Record type definition.
#[derive(Debug, Clone)]
pub struct RecordType {
    /// Unique identifier.
    pub id: TypeId,
    /// Type name.
    pub name: String,
    /// Field definitions in declaration order.
    pub fields: Vec<FieldSpec>,
    /// Whether instances reject every attribute write after construction.
    pub frozen: bool,
    /// Hooks run on attribute writes to fields without their own override.
    pub on_setattr: OnSetAttr,
}

impl RecordType {
    /// Get a field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Position of a field by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Check if this type has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.field_index(name).is_some()
    }

    /// Get all field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
