use serde_json::Value;

/// Top-level shape of a decoded payload, as reported in the outcome trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonShape {
    /// Mapping: the sorted key set.
    Object(Vec<String>),
    /// Sequence: the element count.
    Array(usize),
    /// Anything else, tagged with its type name.
    Scalar(&'static str),
}

pub fn shape_of(v: &Value) -> JsonShape {
    match v {
        Value::Object(map) => JsonShape::Object(map.keys().cloned().collect()),
        Value::Array(arr) => JsonShape::Array(arr.len()),
        Value::Null => JsonShape::Scalar("null"),
        Value::Bool(_) => JsonShape::Scalar("bool"),
        Value::Number(_) => JsonShape::Scalar("number"),
        Value::String(_) => JsonShape::Scalar("string"),
    }
}
