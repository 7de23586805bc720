use nested::Value;

/// Performs a deep structural equality check between two graph values.
///
/// Values compare recursively: scalars by value, lists element by element,
/// mappings key by key. Delegate nodes compare by their plain storage; the
/// tombstone marker equals only itself.
///
/// # Examples
///
/// ```
/// use nested::Value;
/// use nested_util::deep_equal;
/// use serde_json::json;
///
/// let a = Value::from(json!({"foo": [1, 2, 3]}));
/// let b = Value::from(json!({"foo": [1, 2, 3]}));
/// let c = Value::from(json!({"foo": [1, 2, 4]}));
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Tombstone, Value::Tombstone) => true,

        (Value::List(list_a), Value::List(list_b)) => {
            if list_a.len() != list_b.len() {
                return false;
            }
            list_a.iter().zip(list_b).all(|(x, y)| deep_equal(x, y))
        }

        (Value::Map(_), Value::Map(_))
        | (Value::Map(_), Value::Node(_))
        | (Value::Node(_), Value::Map(_))
        | (Value::Node(_), Value::Node(_)) => {
            let entries_a = a.entries();
            if entries_a.len() != b.entries().len() {
                return false;
            }
            entries_a.iter().all(|(key, val_a)| match b.child(key) {
                Some(val_b) => deep_equal(val_a, val_b),
                None => false,
            })
        }

        // Different kinds are never equal
        _ => false,
    }
}
