//! Field filters for projection.

use attrkit_core::{FieldId, TypeHint, Value, ValueKind};
use attrkit_registry::FieldSpec;
use std::fmt;
use std::sync::Arc;

/// Something a filter can select a field by.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Every field with this name.
    Name(String),
    /// Every field declared with this category.
    Kind(TypeHint),
    /// Exactly one field.
    Field(FieldId),
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::Name(name.to_string())
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Selector::Name(name)
    }
}

impl From<TypeHint> for Selector {
    fn from(hint: TypeHint) -> Self {
        Selector::Kind(hint)
    }
}

impl From<ValueKind> for Selector {
    fn from(kind: ValueKind) -> Self {
        Selector::Kind(kind.into())
    }
}

impl From<FieldId> for Selector {
    fn from(id: FieldId) -> Self {
        Selector::Field(id)
    }
}

impl From<&FieldSpec> for Selector {
    fn from(field: &FieldSpec) -> Self {
        Selector::Field(field.id())
    }
}

/// A predicate over `(field, value)` deciding whether the field is projected.
#[derive(Clone)]
pub struct FieldFilter(Arc<dyn Fn(&FieldSpec, &Value) -> bool + Send + Sync>);

impl FieldFilter {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&FieldSpec, &Value) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(func))
    }

    pub fn accepts(&self, field: &FieldSpec, value: &Value) -> bool {
        (self.0)(field, value)
    }
}

impl fmt::Debug for FieldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldFilter(..)")
    }
}

/// Selectors split by how they match.
#[derive(Debug, Default)]
struct Selection {
    kinds: Vec<TypeHint>,
    names: Vec<String>,
    ids: Vec<FieldId>,
}

impl Selection {
    fn split(selectors: impl IntoIterator<Item = impl Into<Selector>>) -> Self {
        let mut selection = Selection::default();
        for selector in selectors {
            match selector.into() {
                Selector::Kind(hint) => selection.kinds.push(hint),
                Selector::Name(name) => selection.names.push(name),
                Selector::Field(id) => selection.ids.push(id),
            }
        }
        selection
    }

    fn selects(&self, field: &FieldSpec) -> bool {
        self.names.iter().any(|n| *n == field.name)
            || self.kinds.contains(&field.type_hint)
            || self.ids.contains(&field.id())
    }
}

/// Accept only the selected fields.
pub fn include(selectors: impl IntoIterator<Item = impl Into<Selector>>) -> FieldFilter {
    let selection = Selection::split(selectors);
    FieldFilter::new(move |field, _| selection.selects(field))
}

/// Accept every field except the selected ones.
pub fn exclude(selectors: impl IntoIterator<Item = impl Into<Selector>>) -> FieldFilter {
    let selection = Selection::split(selectors);
    FieldFilter::new(move |field, _| !selection.selects(field))
}
