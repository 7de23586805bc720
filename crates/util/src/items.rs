use nested::Value;

/// Converts a collection to a list of its items:
/// - Mappings (and delegate-node storage) become a list of `[key, value]`
///   pairs.
/// - Lists are copied.
/// - Strings become a list of one-character strings.
/// - Everything else yields an empty list.
///
/// # Examples
///
/// ```
/// use nested::Value;
/// use nested_util::items;
/// use serde_json::json;
///
/// assert_eq!(
///     items(&Value::from(json!({"a": 1}))),
///     vec![Value::from(json!(["a", 1]))]
/// );
/// assert_eq!(
///     items(&Value::from("ab")),
///     vec![Value::from("a"), Value::from("b")]
/// );
/// ```
pub fn items(value: &Value) -> Vec<Value> {
    match value {
        Value::Map(_) | Value::Node(_) => value
            .entries()
            .into_iter()
            .map(|(k, v)| Value::List(vec![Value::String(k), v.clone()]))
            .collect(),
        Value::List(list) => list.clone(),
        Value::String(s) => s.chars().map(|c| Value::String(c.to_string())).collect(),
        _ => Vec::new(),
    }
}
