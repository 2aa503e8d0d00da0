//! Shallow Merge Module
//!
//! Field-by-field combination of two JSON documents.

use serde_json::{Map, Value};

// == Shallow Merge ==
/// Merges `incoming` into `existing`, incoming fields winning on conflict.
///
/// Nested objects are replaced, not recursed into. Arrays contribute their
/// elements under index keys (`"0"`, `"1"`, ...), strings contribute one
/// field per character, and null, booleans and numbers contribute nothing,
/// so the result is always an object. Fields are never removed by a merge.
pub fn shallow_merge(existing: Value, incoming: Value) -> Value {
    let mut merged = into_fields(existing);
    merged.extend(into_fields(incoming));
    Value::Object(merged)
}

fn into_fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(fields) => fields,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect(),
        Value::String(text) => text
            .chars()
            .enumerate()
            .map(|(index, ch)| (index.to_string(), Value::String(ch.to_string())))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => Map::new(),
    }
}
