use nested::Value;

use crate::deep_equal::deep_equal;

/// In-place removal of values from a list or mapping.
///
/// For a list, the first element structurally equal to each given value is
/// removed. For a mapping (or a delegate node's storage), every key whose
/// value matches any given value is removed. Scalars are left untouched.
///
/// # Examples
///
/// ```
/// use nested::Value;
/// use nested_util::remove;
/// use serde_json::json;
///
/// let mut list = Value::from(json!([1, 2, 1, 3]));
/// remove(&mut list, &[Value::from(1)]);
/// assert_eq!(list, Value::from(json!([2, 1, 3])));
///
/// let mut map = Value::from(json!({"a": 1, "b": 2, "c": 1}));
/// remove(&mut map, &[Value::from(1)]);
/// assert_eq!(map, Value::from(json!({"b": 2})));
/// ```
pub fn remove(target: &mut Value, values: &[Value]) {
    match target {
        Value::List(list) => {
            for value in values {
                if let Some(idx) = list.iter().position(|e| deep_equal(e, value)) {
                    list.remove(idx);
                }
            }
        }
        Value::Map(map) => {
            map.retain(|_, e| !values.iter().any(|v| deep_equal(e, v)));
        }
        Value::Node(node) => {
            node.storage_mut()
                .retain(|_, e| !values.iter().any(|v| deep_equal(e, v)));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_removal_takes_one_occurrence_per_value() {
        let mut list = Value::from(json!(["x", "y", "x"]));
        remove(&mut list, &[Value::from("x"), Value::from("x")]);
        assert_eq!(list, Value::from(json!(["y"])));
    }

    #[test]
    fn mapping_removal_takes_every_matching_key() {
        let mut map = Value::from(json!({"a": 1, "b": 2, "c": 1}));
        remove(&mut map, &[Value::from(1), Value::from(2)]);
        assert_eq!(map, Value::from(json!({})));
    }

    #[test]
    fn missing_values_change_nothing() {
        let mut list = Value::from(json!([1, 2]));
        remove(&mut list, &[Value::from(9)]);
        assert_eq!(list, Value::from(json!([1, 2])));
    }

    #[test]
    fn scalars_are_untouched() {
        let mut v = Value::from(5);
        remove(&mut v, &[Value::from(5)]);
        assert_eq!(v, Value::from(5));
    }

    #[test]
    fn structural_matches_are_removed() {
        let mut list = Value::from(json!([{"k": 1}, {"k": 2}]));
        remove(&mut list, &[Value::from(json!({"k": 1}))]);
        assert_eq!(list, Value::from(json!([{"k": 2}])));
    }
}
