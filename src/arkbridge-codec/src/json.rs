//! Conversion between bridge [`Value`]s and JSON documents.
//!
//! This follows the rules the bridge applies to JavaScript values:
//! numbers are narrowed to the smallest fitting variant, arrays of
//! scalars become homogeneous lists and objects become string-keyed
//! maps.

use serde_json::{Map as JsonMap, Number, Value as Json};

use crate::value::{List, Map, Value};

fn number(n: &Number) -> Value {
    if let Some(v) = n.as_i64() {
        match i32::try_from(v) {
            Ok(v) => Value::Int32(v),
            Err(..) => Value::Int64(v),
        }
    } else {
        // Either a float or an unsigned integer beyond the i64 range.
        Value::from_number(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn array(items: &[Json]) -> Value {
    if items.is_empty() {
        return Value::CompositeList(List::new());
    }

    if let Some(v) = items.iter().map(Json::as_bool).collect::<Option<Vec<_>>>() {
        return Value::ListBool(v);
    }

    if let Some(v) = items
        .iter()
        .map(|v| v.as_str().map(str::to_owned))
        .collect::<Option<Vec<_>>>()
    {
        return Value::ListString(v);
    }

    if let Some(v) = items
        .iter()
        .map(|v| match v {
            Json::Number(n) => Some(number(n)),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
    {
        return number_list(v);
    }

    Value::CompositeList(items.iter().map(from_json).collect())
}

// Picks the narrowest list type that holds every element.
fn number_list(values: Vec<Value>) -> Value {
    if values.iter().all(|v| matches!(v, Value::Int32(..))) {
        Value::ListInt32(
            values
                .into_iter()
                .filter_map(|v| match v {
                    Value::Int32(v) => Some(v),
                    _ => None,
                })
                .collect(),
        )
    } else if values
        .iter()
        .all(|v| matches!(v, Value::Int32(..) | Value::Int64(..)))
    {
        Value::ListInt64(
            values
                .into_iter()
                .filter_map(|v| match v {
                    Value::Int32(v) => Some(v as i64),
                    Value::Int64(v) => Some(v),
                    _ => None,
                })
                .collect(),
        )
    } else {
        Value::ListDouble(
            values
                .into_iter()
                .filter_map(|v| match v {
                    Value::Int32(v) => Some(v as f64),
                    Value::Int64(v) => Some(v as f64),
                    Value::Double(v) => Some(v),
                    _ => None,
                })
                .collect(),
        )
    }
}

/// Converts a JSON document into a bridge [`Value`].
pub fn from_json(json: &Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(v) => Value::Bool(*v),
        Json::Number(n) => number(n),
        Json::String(v) => Value::String(v.clone()),
        Json::Array(items) => array(items),
        Json::Object(obj) => Value::Map(
            obj.iter()
                .map(|(k, v)| (Value::String(k.clone()), from_json(v)))
                .collect::<Map>(),
        ),
    }
}

fn double(v: f64) -> Json {
    Number::from_f64(v).map_or(Json::Null, Json::Number)
}

fn map_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => to_json(other).to_string(),
    }
}

/// Converts a bridge [`Value`] into a JSON document.
///
/// Map keys which are not strings are rendered as their JSON text.
/// Non-finite doubles have no JSON representation and become `null`.
pub fn to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(v) => Json::Bool(*v),
        Value::Int32(v) => Json::from(*v),
        Value::Int64(v) => Json::from(*v),
        Value::Double(v) => double(*v),
        Value::String(v) => Json::String(v.clone()),

        Value::ListUInt8(v) => v.iter().copied().map(Json::from).collect(),
        Value::ListBool(v) => v.iter().copied().map(Json::Bool).collect(),
        Value::ListInt32(v) => v.iter().copied().map(Json::from).collect(),
        Value::ListInt64(v) => v.iter().copied().map(Json::from).collect(),
        Value::ListDouble(v) => v.iter().copied().map(double).collect(),
        Value::ListString(v) => v.iter().cloned().map(Json::String).collect(),

        Value::Map(map) => Json::Object(
            map.iter()
                .map(|(k, v)| (map_key(k), to_json(v)))
                .collect::<JsonMap<_, _>>(),
        ),
        Value::CompositeList(list) => list.iter().map(to_json).collect(),
    }
}
