//! Record attributes
//!
//! An attribute is a key and a value. Values are scalars or a nested group
//! (a named sub-list of attributes). Attribute lists keep insertion order and
//! keep duplicate keys.

use std::fmt;

/// Value type for record attributes
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Null,
    Group(Vec<Attr>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
            Value::Group(attrs) => {
                f.write_str("[")?;
                for (i, attr) in attrs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}={}", attr.key, attr.value)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl Value {
    /// Convert to serde_json::Value
    ///
    /// Groups become objects; a repeated key inside a group keeps its last
    /// value. Handlers that must keep duplicates write JSON text directly.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Uint(u) => serde_json::Value::Number((*u).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Null => serde_json::Value::Null,
            Value::Group(attrs) => serde_json::Value::Object(
                attrs
                    .iter()
                    .map(|a| (a.key.clone(), a.value.to_json_value()))
                    .collect(),
            ),
        }
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

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Uint(u)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::Uint(u as u64)
    }
}

impl From<usize> for Value {
    fn from(u: usize) -> Self {
        Value::Uint(u as u64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Attr>> for Value {
    fn from(attrs: Vec<Attr>) -> Self {
        Value::Group(attrs)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// A named sub-list of attributes
    pub fn group<K: Into<String>>(key: K, attrs: Vec<Attr>) -> Self {
        Self {
            key: key.into(),
            value: Value::Group(attrs),
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Pair up a flat `key, value, key, value, ...` sequence
///
/// Keys and values are rendered with `Display`. A trailing unpaired element
/// is dropped silently; callers are expected to pass an even-length slice.
pub fn attrs_from_pairs(pairs: &[&dyn fmt::Display]) -> Vec<Attr> {
    pairs
        .chunks_exact(2)
        .map(|pair| Attr::new(pair[0].to_string(), pair[1].to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_keep_order_and_duplicates() {
        let attrs = attrs_from_pairs(&[&"a", &1, &"b", &"two", &"a", &3]);
        let keys: Vec<&str> = attrs.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "a"]);
        assert_eq!(attrs[0].value, Value::String("1".to_string()));
    }

    #[test]
    fn test_odd_pairs_drop_trailing_key() {
        let attrs = attrs_from_pairs(&[&"k1", &"v1", &"k2"]);
        assert_eq!(attrs, vec![Attr::new("k1", "v1")]);
    }

    #[test]
    fn test_group_display() {
        let attr = Attr::group("req", vec![Attr::new("id", 7), Attr::new("ok", true)]);
        assert_eq!(attr.to_string(), "req=[id=7 ok=true]");
    }

    #[test]
    fn test_to_json_value() {
        assert_eq!(Value::from(42).to_json_value(), serde_json::json!(42));
        assert_eq!(Value::Float(f64::NAN).to_json_value(), serde_json::Value::Null);
        let group = Value::Group(vec![Attr::new("a", "1")]);
        assert_eq!(group.to_json_value(), serde_json::json!({"a": "1"}));
    }
}
