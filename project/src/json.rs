//! JSON rendering of projected values.

use attrkit_core::{AttrResult, Record, Value};
use attrkit_registry::FieldRegistry;

use crate::AsDict;

/// Convert a value to JSON.
///
/// Maps whose keys are all strings become objects; any other map becomes an
/// array of `[key, value]` pairs. Sets and tuples become arrays. A record
/// left in the value (one that was not projected) is tagged with its type.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::json!(*i),
        Value::Float(f) => serde_json::json!(*f),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::List(items) | Value::Tuple(items) | Value::Set(items) | Value::FrozenSet(items) => {
            serde_json::Value::Array(items.iter().map(to_json).collect())
        }
        Value::Map(entries) => {
            if entries.iter().all(|(k, _)| k.as_str().is_some()) {
                serde_json::Value::Object(
                    entries
                        .iter()
                        .map(|(k, v)| (k.as_str().unwrap_or_default().to_string(), to_json(v)))
                        .collect(),
                )
            } else {
                serde_json::Value::Array(
                    entries
                        .iter()
                        .map(|(k, v)| serde_json::Value::Array(vec![to_json(k), to_json(v)]))
                        .collect(),
                )
            }
        }
        Value::Record(record) => serde_json::json!({
            "_type": record.type_id().to_string(),
            "_values": record.values().iter().map(to_json).collect::<Vec<_>>(),
        }),
    }
}

impl AsDict {
    /// Project a record and render the result as JSON.
    pub fn to_json<R: FieldRegistry + ?Sized>(
        &self,
        registry: &R,
        record: &Record,
    ) -> AttrResult<serde_json::Value> {
        self.project(registry, record).map(|v| to_json(&v))
    }
}
