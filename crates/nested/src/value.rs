//! The graph value model.
//!
//! A graph is a tree of [`Value`]s: scalars at the leaves, lists and
//! insertion-ordered mappings as containers, and optionally [`Value::Node`]
//! positions whose accessor behavior is overridden by the caller (see
//! [`crate::node::DelegateNode`]). [`Value::Tombstone`] is the reserved
//! marker for keys that are deliberately hidden from path traversal.

use indexmap::IndexMap;
use serde_json::Number;

use crate::node::DelegateNode;

/// Insertion-ordered mapping storage used by plain mapping values and by the
/// plain-storage fallback of delegate nodes.
pub type Storage = IndexMap<String, Value>;

/// Any value in a nested key-value graph.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// A list container. Path segments index lists numerically.
    List(Vec<Value>),
    /// A plain mapping container with insertion-ordered keys.
    Map(Storage),
    /// A node with caller-defined accessor overrides.
    Node(Box<dyn DelegateNode>),
    /// Marker for a key that is hidden from nested traversal. Compared by
    /// variant identity only; it never equals a caller-stored value.
    Tombstone,
}

/// Tri-state shape classification used by the structural merge.
///
/// `Scalar` covers everything that is not a plain container: leaf values,
/// the tombstone, and delegate nodes (which are opaque to shape-based
/// coercion).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    List,
    Mapping,
}

impl Value {
    /// An empty container of the given shape. `Scalar` yields an empty
    /// mapping, matching the coercion rules of [`crate::merge`].
    pub fn empty_container(shape: Shape) -> Value {
        match shape {
            Shape::List => Value::List(Vec::new()),
            _ => Value::Map(Storage::new()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Identity test for the hidden-key marker.
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Value::Tombstone)
    }

    /// True for mappings, lists, and delegate nodes.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::List(_) | Value::Node(_))
    }

    pub fn shape(&self) -> Shape {
        match self {
            Value::List(_) => Shape::List,
            Value::Map(_) => Shape::Mapping,
            _ => Shape::Scalar,
        }
    }

    /// Direct (non-delegating) lookup of a child value. Delegate nodes are
    /// read through their plain storage; custom getters are not consulted.
    pub fn child(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            Value::List(list) => list.get(list_index(key)?),
            Value::Node(node) => node.storage().get(key),
            _ => None,
        }
    }

    /// Mutable direct handle to a child value. Delegate nodes answer through
    /// their [`DelegateNode::child_mut`] hook.
    pub fn child_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Map(map) => map.get_mut(key),
            Value::List(list) => {
                let idx = list_index(key)?;
                list.get_mut(idx)
            }
            Value::Node(node) => node.child_mut(key),
            _ => None,
        }
    }

    /// Own entries of a container, in enumeration order. Lists yield their
    /// indices as keys, delegate nodes their plain storage, everything else
    /// nothing.
    pub fn entries(&self) -> Vec<(String, &Value)> {
        match self {
            Value::Map(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
            Value::Node(node) => node.storage().iter().map(|(k, v)| (k.clone(), v)).collect(),
            Value::List(list) => list
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Parse a string key as a list index.
///
/// Only canonical non-negative integers qualify; leading zeros (other than
/// `"0"` itself) do not name an index.
///
/// # Example
///
/// ```
/// use nested::value::list_index;
///
/// assert_eq!(list_index("0"), Some(0));
/// assert_eq!(list_index("12"), Some(12));
/// assert_eq!(list_index("01"), None);
/// assert_eq!(list_index("-1"), None);
/// assert_eq!(list_index("x"), None);
/// ```
pub fn list_index(key: &str) -> Option<usize> {
    let bytes = key.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return None;
    }
    if !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            // Delegate nodes compare by their plain storage.
            (Value::Node(a), Value::Node(b)) => a.storage() == b.storage(),
            (Value::Tombstone, Value::Tombstone) => true,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<f64> for Value {
    /// Non-finite numbers become `Null`, matching serde_json's convention.
    fn from(n: f64) -> Self {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(list: Vec<Value>) -> Self {
        Value::List(list)
    }
}

impl From<Storage> for Value {
    fn from(map: Storage) -> Self {
        Value::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shape_classification() {
        assert_eq!(Value::Null.shape(), Shape::Scalar);
        assert_eq!(Value::from(1).shape(), Shape::Scalar);
        assert_eq!(Value::Tombstone.shape(), Shape::Scalar);
        assert_eq!(Value::List(vec![]).shape(), Shape::List);
        assert_eq!(Value::Map(Storage::new()).shape(), Shape::Mapping);
    }

    #[test]
    fn tombstone_equals_only_itself() {
        assert_eq!(Value::Tombstone, Value::Tombstone);
        assert_ne!(Value::Tombstone, Value::Null);
        assert_ne!(Value::Tombstone, Value::Map(Storage::new()));
        assert_ne!(Value::Tombstone, Value::from(""));
    }

    #[test]
    fn direct_child_lookup() {
        let doc = Value::from(json!({"a": 1, "b": [10, 20]}));
        assert_eq!(doc.child("a"), Some(&Value::from(1)));
        assert_eq!(doc.child("missing"), None);

        let list = Value::from(json!([10, 20]));
        assert_eq!(list.child("1"), Some(&Value::from(20)));
        assert_eq!(list.child("2"), None);
        assert_eq!(list.child("x"), None);
    }

    #[test]
    fn entries_enumeration_order() {
        let doc = Value::from(json!({"z": 1, "a": 2}));
        let keys: Vec<String> = doc.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a"]);

        let list = Value::from(json!(["x", "y"]));
        let keys: Vec<String> = list.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["0", "1"]);
    }

    #[test]
    fn scalar_has_no_entries() {
        assert!(Value::from(5).entries().is_empty());
        assert!(Value::Null.entries().is_empty());
    }
}
