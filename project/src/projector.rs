//! Structural projection of records into mappings and sequences.
//!
//! Fields are visited in declared order. Per field: filter, then the value
//! serializer, then recursion. Recursion descends into registered records and,
//! element by element, into maps, sequences and sets. The serializer only sees
//! field values, never container elements.
//!
//! Records are owned trees, so a projection always terminates; its depth is
//! the nesting depth of the input.

use crate::FieldFilter;
use attrkit_core::{AttrError, AttrResult, Record, Value};
use attrkit_registry::{FieldRegistry, FieldSpec};
use std::fmt;
use std::sync::Arc;

/// Builds the output mapping from ordered `(key, value)` pairs.
pub type DictFactory = Arc<dyn Fn(Vec<(Value, Value)>) -> Value + Send + Sync>;

/// Builds the output sequence from ordered values.
pub type TupleFactory = Arc<dyn Fn(Vec<Value>) -> Value + Send + Sync>;

/// Rewrites a field value before it is stored: `(instance, field, value) -> value`.
pub type ValueSerializer = Arc<dyn Fn(&Record, &FieldSpec, Value) -> AttrResult<Value> + Send + Sync>;

/// Options shared by both projections.
#[derive(Clone)]
struct Common {
    recurse: bool,
    filter: Option<FieldFilter>,
    retain_collection_types: bool,
    value_serializer: Option<ValueSerializer>,
}

impl Default for Common {
    fn default() -> Self {
        Self {
            recurse: true,
            filter: None,
            retain_collection_types: false,
            value_serializer: None,
        }
    }
}

impl fmt::Debug for Common {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("recurse", &self.recurse)
            .field("filter", &self.filter.is_some())
            .field("retain_collection_types", &self.retain_collection_types)
            .field("value_serializer", &self.value_serializer.is_some())
            .finish()
    }
}

enum Shape<'a> {
    Dict(&'a DictFactory),
    Tuple(&'a TupleFactory),
}

struct Projector<'a, R: ?Sized> {
    registry: &'a R,
    options: &'a Common,
    shape: Shape<'a>,
}

impl<'a, R: FieldRegistry + ?Sized> Projector<'a, R> {
    fn record(&self, record: &Record) -> AttrResult<Value> {
        let fields = self.registry.fields(record.type_id())?;
        let mut entries = Vec::with_capacity(fields.len());

        for (field, value) in fields.iter().zip(record.values()) {
            if let Some(filter) = &self.options.filter {
                if !filter.accepts(field, value) {
                    continue;
                }
            }
            let mut value = value.clone();
            if let Some(serializer) = &self.options.value_serializer {
                value = serializer(record, field, value)?;
            }
            if self.options.recurse {
                value = self.nested(value)?;
            }
            entries.push((Value::String(field.name.clone()), value));
        }

        Ok(match self.shape {
            Shape::Dict(factory) => factory(entries),
            Shape::Tuple(factory) => factory(entries.into_iter().map(|(_, v)| v).collect()),
        })
    }

    fn nested(&self, value: Value) -> AttrResult<Value> {
        match value {
            Value::Record(record) if self.registry.is_record_type(record.type_id()) => {
                self.record(&record)
            }
            Value::Map(entries) => {
                let pairs = entries
                    .into_iter()
                    .map(|(k, v)| Ok((self.nested(k)?, self.nested(v)?)))
                    .collect::<AttrResult<Vec<_>>>()?;
                Ok(match self.shape {
                    Shape::Dict(factory) => factory(pairs),
                    Shape::Tuple(_) => Value::Map(pairs),
                })
            }
            Value::List(items) => Ok(Value::List(self.items(items)?)),
            Value::Tuple(items) => self.sequence(items, Value::Tuple),
            Value::Set(items) => self.sequence(items, Value::Set),
            Value::FrozenSet(items) => self.sequence(items, Value::FrozenSet),
            other => Ok(other),
        }
    }

    fn sequence(&self, items: Vec<Value>, kind: fn(Vec<Value>) -> Value) -> AttrResult<Value> {
        let items = self.items(items)?;
        if self.options.retain_collection_types {
            return Ok(kind(items));
        }
        Ok(Value::List(items))
    }

    fn items(&self, items: Vec<Value>) -> AttrResult<Vec<Value>> {
        items.into_iter().map(|item| self.nested(item)).collect()
    }
}

fn require_record(value: &Value) -> AttrResult<&Record> {
    value
        .as_record()
        .ok_or_else(|| AttrError::not_a_record_type(value.type_name()))
}

/// Project a record into an ordered mapping of field name to value.
#[derive(Clone)]
pub struct AsDict {
    options: Common,
    dict_factory: DictFactory,
}

impl Default for AsDict {
    fn default() -> Self {
        Self {
            options: Common::default(),
            dict_factory: Arc::new(Value::Map),
        }
    }
}

impl fmt::Debug for AsDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsDict").field("options", &self.options).finish()
    }
}

impl AsDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults that keep nested container kinds.
    pub fn retaining() -> Self {
        Self::new().retain_collection_types(true)
    }

    /// Descend into nested records and containers. On by default.
    pub fn recurse(mut self, recurse: bool) -> Self {
        self.options.recurse = recurse;
        self
    }

    pub fn filter(mut self, filter: FieldFilter) -> Self {
        self.options.filter = Some(filter);
        self
    }

    pub fn dict_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(Vec<(Value, Value)>) -> Value + Send + Sync + 'static,
    {
        self.dict_factory = Arc::new(factory);
        self
    }

    /// Keep tuples and sets as they are instead of turning them into lists.
    pub fn retain_collection_types(mut self, retain: bool) -> Self {
        self.options.retain_collection_types = retain;
        self
    }

    pub fn value_serializer<F>(mut self, serializer: F) -> Self
    where
        F: Fn(&Record, &FieldSpec, Value) -> AttrResult<Value> + Send + Sync + 'static,
    {
        self.options.value_serializer = Some(Arc::new(serializer));
        self
    }

    pub fn project<R: FieldRegistry + ?Sized>(&self, registry: &R, record: &Record) -> AttrResult<Value> {
        tracing::debug!(
            type_name = %registry.type_name(record.type_id()),
            recurse = self.options.recurse,
            "projecting record to dict"
        );
        Projector {
            registry,
            options: &self.options,
            shape: Shape::Dict(&self.dict_factory),
        }
        .record(record)
    }

    /// Like `project`, failing with `NotARecordType` for non-record values.
    pub fn project_value<R: FieldRegistry + ?Sized>(&self, registry: &R, value: &Value) -> AttrResult<Value> {
        self.project(registry, require_record(value)?)
    }
}

/// Project a record into an ordered sequence of field values.
#[derive(Clone)]
pub struct AsTuple {
    options: Common,
    tuple_factory: TupleFactory,
}

impl Default for AsTuple {
    fn default() -> Self {
        Self {
            options: Common::default(),
            tuple_factory: Arc::new(Value::Tuple),
        }
    }
}

impl fmt::Debug for AsTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsTuple").field("options", &self.options).finish()
    }
}

impl AsTuple {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn retaining() -> Self {
        Self::new().retain_collection_types(true)
    }

    pub fn recurse(mut self, recurse: bool) -> Self {
        self.options.recurse = recurse;
        self
    }

    pub fn filter(mut self, filter: FieldFilter) -> Self {
        self.options.filter = Some(filter);
        self
    }

    pub fn tuple_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(Vec<Value>) -> Value + Send + Sync + 'static,
    {
        self.tuple_factory = Arc::new(factory);
        self
    }

    pub fn retain_collection_types(mut self, retain: bool) -> Self {
        self.options.retain_collection_types = retain;
        self
    }

    pub fn value_serializer<F>(mut self, serializer: F) -> Self
    where
        F: Fn(&Record, &FieldSpec, Value) -> AttrResult<Value> + Send + Sync + 'static,
    {
        self.options.value_serializer = Some(Arc::new(serializer));
        self
    }

    pub fn project<R: FieldRegistry + ?Sized>(&self, registry: &R, record: &Record) -> AttrResult<Value> {
        tracing::debug!(
            type_name = %registry.type_name(record.type_id()),
            recurse = self.options.recurse,
            "projecting record to tuple"
        );
        Projector {
            registry,
            options: &self.options,
            shape: Shape::Tuple(&self.tuple_factory),
        }
        .record(record)
    }

    pub fn project_value<R: FieldRegistry + ?Sized>(&self, registry: &R, value: &Value) -> AttrResult<Value> {
        self.project(registry, require_record(value)?)
    }
}

/// `AsDict` with default options.
pub fn asdict<R: FieldRegistry + ?Sized>(registry: &R, record: &Record) -> AttrResult<Value> {
    AsDict::new().project(registry, record)
}

/// `AsTuple` with default options.
pub fn astuple<R: FieldRegistry + ?Sized>(registry: &R, record: &Record) -> AttrResult<Value> {
    AsTuple::new().project(registry, record)
}
