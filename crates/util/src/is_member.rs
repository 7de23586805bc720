use nested::Value;

use crate::deep_equal::deep_equal;

/// Tests whether all `values` are contained in the given collection.
///
/// The collection's values are its list elements or mapping values;
/// duplicates among `values` count once. Scalars contain nothing.
///
/// # Examples
///
/// ```
/// use nested::Value;
/// use nested_util::is_member;
/// use serde_json::json;
///
/// let coll = Value::from(json!({"a": 1, "b": 2}));
/// assert!(is_member(&coll, &[Value::from(1)]));
/// assert!(is_member(&coll, &[Value::from(2), Value::from(1)]));
/// assert!(!is_member(&coll, &[Value::from(3)]));
/// ```
pub fn is_member(collection: &Value, values: &[Value]) -> bool {
    let held: Vec<&Value> = collection.entries().into_iter().map(|(_, v)| v).collect();
    let mut unique: Vec<&Value> = Vec::new();
    for value in values {
        if !unique.iter().any(|u| deep_equal(u, value)) {
            unique.push(value);
        }
    }
    unique
        .iter()
        .all(|value| held.iter().any(|h| deep_equal(h, value)))
}
