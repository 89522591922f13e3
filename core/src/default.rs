//! Field defaults and factories.

use crate::{Record, Value};
use std::fmt;
use std::sync::Arc;

/// A deferred default value.
#[derive(Clone)]
pub enum Factory {
    /// Called with no arguments.
    Plain(Arc<dyn Fn() -> Value + Send + Sync>),
    /// Called with the instance under construction (earlier fields already set).
    TakesSelf(Arc<dyn Fn(&Record) -> Value + Send + Sync>),
}

impl Factory {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Factory::Plain(Arc::new(func))
    }

    pub fn taking_self<F>(func: F) -> Self
    where
        F: Fn(&Record) -> Value + Send + Sync + 'static,
    {
        Factory::TakesSelf(Arc::new(func))
    }

    /// Returns true if the factory needs access to the owning instance.
    pub fn takes_self(&self) -> bool {
        matches!(self, Factory::TakesSelf(_))
    }

    /// Produce a value. `instance` is the partially built record.
    pub fn produce(&self, instance: &Record) -> Value {
        match self {
            Factory::Plain(f) => f(),
            Factory::TakesSelf(f) => f(instance),
        }
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Factory::Plain(_) => write!(f, "Factory(..)"),
            Factory::TakesSelf(_) => write!(f, "Factory(.., takes_self)"),
        }
    }
}

/// What a field falls back to when no argument is supplied.
#[derive(Debug, Clone, Default)]
pub enum FieldDefault {
    /// No default; the field is mandatory.
    #[default]
    NoDefault,
    /// A fixed value, cloned per instance.
    Value(Value),
    /// A factory, called per instance.
    Factory(Factory),
}

impl FieldDefault {
    /// Returns true if a default (value or factory) is present.
    pub fn is_present(&self) -> bool {
        !matches!(self, FieldDefault::NoDefault)
    }
}

impl From<Value> for FieldDefault {
    fn from(value: Value) -> Self {
        FieldDefault::Value(value)
    }
}

impl From<Factory> for FieldDefault {
    fn from(factory: Factory) -> Self {
        FieldDefault::Factory(factory)
    }
}
