use crate::{Array, Container, Value};

/// JSON encoding.
///
/// Entries with keys `0..n` in order encode as a JSON array; any other key
/// layout encodes as a JSON object with stringified keys. Objects encode as
/// a JSON object of their fields. Non-finite floats encode as `null`.
///
/// # Examples
///
/// ```rust
/// use value_collection::prelude::*;
///
/// let collection = JsonCollection::from_values([Value::from(1), Value::from("two")]);
/// assert_eq!(collection.to_json().unwrap(), r#"[1,"two"]"#);
/// ```
pub trait JsonSerializable: Container<Item = Value> {
    /// Returns the JSON representation of the entries.
    fn json_serialize(&self) -> serde_json::Value {
        array_to_json(self.entries())
    }

    /// Encodes the entries as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.json_serialize())
    }
}

fn array_to_json(array: &Array) -> serde_json::Value {
    if array.is_list() {
        serde_json::Value::Array(array.values().map(value_to_json).collect())
    } else {
        serde_json::Value::Object(
            array
                .iter()
                .map(|(key, value)| (key.to_string(), value_to_json(value)))
                .collect(),
        )
    }
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(flag) => serde_json::Value::Bool(*flag),
        Value::Int(number) => serde_json::Value::from(*number),
        Value::Float(number) => serde_json::Number::from_f64(*number)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::String(text) => serde_json::Value::String(text.clone()),
        Value::Array(array) => array_to_json(array),
        Value::Object(object) => serde_json::Value::Object(
            object
                .fields()
                .map(|(name, field)| (name.to_string(), value_to_json(field)))
                .collect(),
        ),
    }
}
