//! Value types for record fields.
//!
//! Values are the data stored in record fields. attrkit supports scalar types
//! (Bool, Int, Float, String), containers (List, Tuple, Set, FrozenSet, Map)
//! and nested records.

use crate::{Record, TypeId};
use std::cmp::Ordering;
use std::fmt;

/// A value that can be stored in a record field.
#[derive(Debug, Clone)]
pub enum Value {
    /// Null/absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Mutable ordered sequence.
    List(Vec<Value>),
    /// Immutable ordered sequence.
    Tuple(Vec<Value>),
    /// Mutable set. Elements keep insertion order.
    Set(Vec<Value>),
    /// Immutable set. Elements keep insertion order.
    FrozenSet(Vec<Value>),
    /// Ordered key/value mapping. Keys are arbitrary values, including collections.
    Map(Vec<(Value, Value)>),
    /// A nested record instance.
    Record(Box<Record>),
}

/// The variant of a `Value`, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    List,
    Tuple,
    Set,
    FrozenSet,
    Map,
    Record,
}

impl ValueKind {
    /// Returns the display name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "Null",
            ValueKind::Bool => "Bool",
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::String => "String",
            ValueKind::List => "List",
            ValueKind::Tuple => "Tuple",
            ValueKind::Set => "Set",
            ValueKind::FrozenSet => "FrozenSet",
            ValueKind::Map => "Map",
            ValueKind::Record => "Record",
        }
    }

    /// Returns true for the sequence and set kinds.
    pub fn is_sequence_like(&self) -> bool {
        matches!(
            self,
            ValueKind::List | ValueKind::Tuple | ValueKind::Set | ValueKind::FrozenSet
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The declared category of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TypeHint {
    /// No declared category.
    #[default]
    Any,
    /// A value of the given kind.
    Kind(ValueKind),
    /// An instance of the given record type.
    Record(TypeId),
    /// Null, or a value matching the inner hint.
    Optional(Box<TypeHint>),
}

impl TypeHint {
    /// Wrap this hint so that it also admits null.
    pub fn optional(self) -> Self {
        match self {
            TypeHint::Any => TypeHint::Any,
            TypeHint::Optional(_) => self,
            other => TypeHint::Optional(Box::new(other)),
        }
    }

    /// Check whether a value belongs to this category.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            TypeHint::Any => true,
            TypeHint::Kind(kind) => value.kind() == *kind,
            TypeHint::Record(type_id) => value
                .as_record()
                .map(|r| r.type_id() == *type_id)
                .unwrap_or(false),
            TypeHint::Optional(inner) => value.is_null() || inner.matches(value),
        }
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeHint::Any => write!(f, "Any"),
            TypeHint::Kind(kind) => write!(f, "{}", kind),
            TypeHint::Record(type_id) => write!(f, "Record<{}>", type_id),
            TypeHint::Optional(inner) => write!(f, "Optional<{}>", inner),
        }
    }
}

impl From<ValueKind> for TypeHint {
    fn from(kind: ValueKind) -> Self {
        TypeHint::Kind(kind)
    }
}

impl Value {
    /// Build a set, dropping elements equal to an earlier one.
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Set(dedup(items))
    }

    /// Build a frozen set, dropping elements equal to an earlier one.
    pub fn frozen_set(items: impl IntoIterator<Item = Value>) -> Self {
        Value::FrozenSet(dedup(items))
    }

    /// Build a mapping from ordered pairs.
    pub fn map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a nested record.
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as record reference if this is a Record value.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Get the elements of a List, Tuple, Set or FrozenSet.
    pub fn as_items(&self) -> Option<&[Value]> {
        match self {
            Value::List(items)
            | Value::Tuple(items)
            | Value::Set(items)
            | Value::FrozenSet(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries of a Map.
    pub fn as_entries(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Tuple(_) => ValueKind::Tuple,
            Value::Set(_) => ValueKind::Set,
            Value::FrozenSet(_) => ValueKind::FrozenSet,
            Value::Map(_) => ValueKind::Map,
            Value::Record(_) => ValueKind::Record,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Check if this value is greater than or equal to another (for numeric comparisons).
    /// Returns true for non-comparable types.
    pub fn gte(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(v), Value::Int(m)) => *v >= *m,
            (Value::Float(v), Value::Float(m)) => *v >= *m,
            (Value::Int(v), Value::Float(m)) => (*v as f64) >= *m,
            (Value::Float(v), Value::Int(m)) => *v >= (*m as f64),
            _ => true,
        }
    }

    /// Check if this value is less than or equal to another (for numeric comparisons).
    /// Returns true for non-comparable types.
    pub fn lte(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(v), Value::Int(m)) => *v <= *m,
            (Value::Float(v), Value::Float(m)) => *v <= *m,
            (Value::Int(v), Value::Float(m)) => (*v as f64) <= *m,
            (Value::Float(v), Value::Int(m)) => *v <= (*m as f64),
            _ => true,
        }
    }
}

fn dedup(items: impl IntoIterator<Item = Value>) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Order-insensitive comparison for set payloads.
fn same_members(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().all(|x| b.contains(x))
}

/// Order-insensitive comparison for mapping payloads.
fn same_entries(a: &[(Value, Value)], b: &[(Value, Value)]) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(k, v)| b.iter().any(|(bk, bv)| bk == k && bv == v))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (
                Value::Set(a) | Value::FrozenSet(a),
                Value::Set(b) | Value::FrozenSet(b),
            ) => same_members(a, b),
            (Value::Map(a), Value::Map(b)) => same_entries(a, b),
            (Value::Record(a), Value::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    /// Scalars of the same kind order naturally (Int and Float order together),
    /// lists and tuples order lexicographically, everything else is unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
                a.partial_cmp(b)
            }
            _ if self == other => Some(Ordering::Equal),
            _ => None,
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                write!(f, "[")?;
                write_items(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::Set(items) => {
                write!(f, "{{")?;
                write_items(f, items)?;
                write!(f, "}}")
            }
            Value::FrozenSet(items) => {
                write!(f, "frozenset({{")?;
                write_items(f, items)?;
                write!(f, "}})")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Record(record) => write!(f, "{}", record),
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(Box::new(record))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Helper macro to build a `Value::List`.
#[macro_export]
macro_rules! list {
    () => {
        $crate::Value::List(Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Value::List(vec![$($crate::Value::from($item)),+])
    };
}
