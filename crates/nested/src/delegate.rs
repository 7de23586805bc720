//! Delegate accessor — get/set/unset primitives on a single node.
//!
//! Each operation probes the node for the matching capability
//! ([`Getter`](crate::node::Getter), [`Setter`](crate::node::Setter),
//! [`Deleter`](crate::node::Deleter)) and falls back to direct storage when
//! the node does not override it. Absent (`Null`) and scalar nodes never
//! error: reads answer nothing, writes are no-ops.

use crate::options::NestedOptions;
use crate::value::{list_index, Value};

/// Get the value at `key` from `node` if present, returning `default`
/// otherwise.
///
/// A `Null` node answers `None` without consulting the default; a scalar
/// node holds no keys and answers the default. Delegate nodes with a getter
/// capability answer through it.
///
/// # Example
///
/// ```
/// use nested::{delegate, Value, DEFAULT_NESTED_OPTIONS};
/// use serde_json::json;
///
/// let node = Value::from(json!({"a": 1}));
/// let opts = DEFAULT_NESTED_OPTIONS;
/// assert_eq!(delegate::get(&node, "a", None, &opts), Some(Value::from(1)));
/// assert_eq!(delegate::get(&node, "b", Some(&Value::from(9)), &opts), Some(Value::from(9)));
/// assert_eq!(delegate::get(&Value::Null, "a", Some(&Value::from(9)), &opts), None);
/// ```
pub fn get(node: &Value, key: &str, default: Option<&Value>, opts: &NestedOptions) -> Option<Value> {
    match node {
        Value::Null => None,
        Value::Node(n) => match n.as_getter() {
            Some(getter) => getter.get(key, default, opts),
            None => n.storage().get(key).cloned().or_else(|| default.cloned()),
        },
        Value::Map(_) | Value::List(_) => node.child(key).cloned().or_else(|| default.cloned()),
        _ => default.cloned(),
    }
}

/// Put `value` at `key` on `node`.
///
/// Writes to absent or scalar nodes are silent no-ops. List nodes index by
/// canonical numeric key and pad with `Null` up to the index.
pub fn set_one(node: &mut Value, key: &str, value: Value, opts: &NestedOptions) {
    match node {
        Value::Map(map) => {
            map.insert(key.to_string(), value);
        }
        Value::List(list) => {
            if let Some(idx) = list_index(key) {
                if idx >= list.len() {
                    list.resize(idx + 1, Value::Null);
                }
                list[idx] = value;
            }
        }
        Value::Node(n) => match n.as_setter_mut() {
            Some(setter) => setter.set(key, value, opts),
            None => {
                n.storage_mut().insert(key.to_string(), value);
            }
        },
        _ => {}
    }
}

/// Put several key/value pairs on `node`, each through the same per-key
/// path as [`set_one`], in iteration order. The writes are individual, not
/// atomic: a delegate setter sees one call per pair.
pub fn set_many<I>(node: &mut Value, entries: I, opts: &NestedOptions)
where
    I: IntoIterator<Item = (String, Value)>,
{
    for (key, value) in entries {
        set_one(node, &key, value, opts);
    }
}

/// Delete `key` from `node`, returning the value it held immediately before
/// removal (or `None` if it was absent).
///
/// # Example
///
/// ```
/// use nested::{delegate, Value, DEFAULT_NESTED_OPTIONS};
/// use serde_json::json;
///
/// let mut node = Value::from(json!({"a": 1}));
/// assert_eq!(delegate::unset(&mut node, "a", &DEFAULT_NESTED_OPTIONS), Some(Value::from(1)));
/// assert_eq!(delegate::unset(&mut node, "a", &DEFAULT_NESTED_OPTIONS), None);
/// ```
pub fn unset(node: &mut Value, key: &str, opts: &NestedOptions) -> Option<Value> {
    match node {
        Value::Map(map) => map.shift_remove(key),
        Value::List(list) => {
            let idx = list_index(key)?;
            if idx < list.len() {
                Some(list.remove(idx))
            } else {
                None
            }
        }
        Value::Node(n) => match n.as_deleter_mut() {
            Some(deleter) => deleter.unset(key, opts),
            None => n.storage_mut().shift_remove(key),
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Storage;
    use serde_json::json;

    fn opts() -> NestedOptions {
        NestedOptions::default()
    }

    #[test]
    fn get_prefers_stored_value_over_default() {
        let node = Value::from(json!({"a": null}));
        // An explicitly stored null is still a stored value.
        assert_eq!(
            get(&node, "a", Some(&Value::from(9)), &opts()),
            Some(Value::Null)
        );
    }

    #[test]
    fn get_on_scalar_answers_default() {
        assert_eq!(get(&Value::from(5), "a", None, &opts()), None);
        assert_eq!(
            get(&Value::from(5), "a", Some(&Value::from(9)), &opts()),
            Some(Value::from(9))
        );
    }

    #[test]
    fn get_on_absent_node_ignores_default() {
        assert_eq!(get(&Value::Null, "a", Some(&Value::from(9)), &opts()), None);
    }

    #[test]
    fn list_get_by_index() {
        let node = Value::from(json!([10, 20]));
        assert_eq!(get(&node, "1", None, &opts()), Some(Value::from(20)));
        assert_eq!(get(&node, "5", None, &opts()), None);
    }

    #[test]
    fn set_on_scalar_is_noop() {
        let mut node = Value::from(5);
        set_one(&mut node, "a", Value::from(1), &opts());
        assert_eq!(node, Value::from(5));
    }

    #[test]
    fn list_set_pads_with_null() {
        let mut node = Value::from(json!([1]));
        set_one(&mut node, "3", Value::from(4), &opts());
        assert_eq!(node, Value::from(json!([1, null, null, 4])));
    }

    #[test]
    fn list_set_with_non_index_key_is_noop() {
        let mut node = Value::from(json!([1]));
        set_one(&mut node, "x", Value::from(4), &opts());
        assert_eq!(node, Value::from(json!([1])));
    }

    #[test]
    fn set_many_applies_in_iteration_order() {
        let mut node = Value::Map(Storage::new());
        let entries = vec![
            ("b".to_string(), Value::from(1)),
            ("a".to_string(), Value::from(2)),
            ("b".to_string(), Value::from(3)),
        ];
        set_many(&mut node, entries, &opts());
        let keys: Vec<String> = node.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(node.child("b"), Some(&Value::from(3)));
    }

    #[test]
    fn unset_list_removes_by_index() {
        let mut node = Value::from(json!([10, 20, 30]));
        assert_eq!(unset(&mut node, "1", &opts()), Some(Value::from(20)));
        assert_eq!(node, Value::from(json!([10, 30])));
    }

    #[test]
    fn unset_on_absent_node_is_noop() {
        assert_eq!(unset(&mut Value::Null, "a", &opts()), None);
    }
}
