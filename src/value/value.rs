//! The document tree type and its decode/encode helpers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value represents a decoded YAML/JSON value.
///
/// Mapping keys are always strings; a document with non-string keys fails
/// to decode. The insertion order of mapping keys carries no meaning, only
/// the order computed at emission time does. Sequence order is meaningful
/// and preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
}

/// Map represents a key-value mapping where keys are strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Map {
    pub fields: BTreeMap<String, Value>,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the kind of this value as a short name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "sequence",
            Value::Map(_) => "mapping",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Map {
    pub fn new() -> Self {
        Map {
            fields: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: String, value: Value) {
        self.fields.insert(key, value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Returns the element's `name` field when it is a string.
    ///
    /// Sequence elements that are mappings with a string `name` are matched
    /// by that name during merge and addressed as `[name=value]` in paths.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }
}

/// Parse a value from JSON text.
pub fn from_json(json: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize a value to pretty-printed JSON with 2-space indent.
pub fn to_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Parse a value from YAML text.
pub fn from_yaml(yaml: &str) -> Result<Value, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Serialize a value to YAML with the stock serde_yaml serializer.
pub fn to_yaml(value: &Value) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_kinds() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Bool(true).kind(), "bool");
        assert_eq!(Value::Int(42).kind(), "int");
        assert_eq!(Value::Float(3.5).kind(), "float");
        assert_eq!(Value::String("x".into()).kind(), "string");
        assert_eq!(Value::List(vec![]).kind(), "sequence");
        assert_eq!(Value::Map(Map::new()).kind(), "mapping");
    }

    #[test]
    fn test_map_operations() {
        let mut map = Map::new();
        assert!(map.is_empty());

        map.set("key".into(), Value::String("value".into()));
        assert!(map.has("key"));
        assert_eq!(map.get("key"), Some(&Value::String("value".into())));
        assert_eq!(map.len(), 1);

        map.remove("key");
        assert!(!map.has("key"));
    }

    #[test]
    fn test_map_name() {
        let mut map = Map::new();
        assert_eq!(map.name(), None);

        map.set("name".into(), Value::String("web".into()));
        assert_eq!(map.name(), Some("web"));

        map.set("name".into(), Value::Int(3));
        assert_eq!(map.name(), None);
    }

    #[test]
    fn test_yaml_decode() {
        let v = from_yaml(
            "name: test\ncount: 42\nratio: 0.5\nok: true\nnothing: null\ntags: [a, b]\n",
        )
        .unwrap();
        let m = v.as_map().unwrap();
        assert_eq!(m.get("name"), Some(&Value::String("test".into())));
        assert_eq!(m.get("count"), Some(&Value::Int(42)));
        assert_eq!(m.get("ratio"), Some(&Value::Float(0.5)));
        assert_eq!(m.get("ok"), Some(&Value::Bool(true)));
        assert_eq!(m.get("nothing"), Some(&Value::Null));
        let tags = m.get("tags").and_then(Value::as_list).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].as_str(), Some("a"));
    }

    #[test]
    fn test_json_roundtrip() {
        let value = Value::Map({
            let mut m = Map::new();
            m.set("name".into(), Value::String("test".into()));
            m.set("count".into(), Value::Int(42));
            m
        });

        let json = to_json(&value).unwrap();
        let parsed = from_json(&json).unwrap();
        assert_eq!(value, parsed);
    }

    #[test]
    fn test_non_string_keys_rejected() {
        assert!(from_yaml("1: a\n2: b\n").is_err());
    }
}
