//! Serde interop: encode any serializable record type through JSON objects.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Error, Result, encode::Record, options::Options};

impl Record for Map<String, Value> {
    fn column_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn field(&self, _index: usize, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(value_to_field)
    }
}

/// Strings are emitted as-is, `null` as an empty field, scalars in their JSON
/// spelling and nested arrays/objects as compact JSON text.
pub fn value_to_field(v: &Value) -> Cow<'_, str> {
    match v {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(v.to_string()),
    }
}

/// Convert a JSON array of objects into records.
pub fn objects_from_value(value: Value) -> Result<Vec<Map<String, Value>>> {
    let Value::Array(items) = value else {
        return Err(Error::InvalidInput(
            "expected an array of objects".to_string(),
        ));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Ok(map),
            _ => Err(Error::InvalidInput(format!(
                "record {} is not an object",
                i + 1
            ))),
        })
        .collect()
}

pub fn encode_records<T: Serialize>(records: &[T], options: &Options) -> Result<String> {
    options.check()?;
    let objects = records
        .iter()
        .enumerate()
        .map(|(i, r)| match serde_json::to_value(r)? {
            Value::Object(map) => Ok(map),
            _ => Err(Error::InvalidInput(format!(
                "record {} does not serialize to an object",
                i + 1
            ))),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(super::encode_rows(&objects, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_spellings() {
        assert_eq!(value_to_field(&json!(null)), "");
        assert_eq!(value_to_field(&json!(true)), "true");
        assert_eq!(value_to_field(&json!(1.5)), "1.5");
        assert_eq!(value_to_field(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn non_object_items_are_rejected() {
        let err = objects_from_value(json!([{"a": 1}, 3])).unwrap_err();
        assert!(err.to_string().contains("record 2"));
    }
}
