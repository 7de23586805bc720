use nested::Value;

/// Tests whether a value holds nothing: `Null`, an empty string, an empty
/// list, or a mapping/delegate node with no entries. Scalars and the
/// tombstone marker are never empty.
///
/// # Examples
///
/// ```
/// use nested::Value;
/// use nested_util::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty(&Value::Null));
/// assert!(is_empty(&Value::from(json!({}))));
/// assert!(is_empty(&Value::from(json!([]))));
/// assert!(!is_empty(&Value::from(json!({"a": 1}))));
/// assert!(!is_empty(&Value::from(0)));
/// ```
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::List(list) => list.is_empty(),
        Value::Map(map) => map.is_empty(),
        Value::Node(node) => node.storage().is_empty(),
        _ => false,
    }
}
