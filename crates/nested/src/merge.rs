//! Structural merge — recursively combining donor graphs into a target.
//!
//! Merging overlays donors left to right without clobbering shared
//! substructure: container donor values recurse into the matching child,
//! scalar donor values overwrite, and keys absent from a donor never touch
//! the target. Writes go through the delegate accessor, so a target subtree
//! backed by a custom setter sees every write.
//!
//! Shape conflicts are resolved by the donor: when the current child is not
//! of the donor value's shape, it is replaced by an empty container of that
//! shape before recursing. A mapping donor value additionally accepts a
//! delegate-node child and merges into it rather than replacing it.
//!
//! Lists merge by index — an overlay, not a concatenation.

use crate::delegate;
use crate::options::NestedOptions;
use crate::value::{Shape, Value};

/// Merge any number of donor graphs into a target, returning the target.
///
/// An absent target (or a scalar one) is replaced by an empty container
/// shaped like the first donor: a list for a list donor, a mapping
/// otherwise. `Null` donors are skipped.
///
/// # Example
///
/// ```
/// use nested::{merge, Value};
/// use serde_json::json;
///
/// let target = Value::from(json!({"a": {"x": 1}}));
/// let donor = Value::from(json!({"a": {"y": 2}}));
/// let merged = merge(Some(target), &[donor]);
/// assert_eq!(merged.to_json().unwrap(), json!({"a": {"x": 1, "y": 2}}));
/// ```
pub fn merge(target: Option<Value>, donors: &[Value]) -> Value {
    let mut target = match target {
        Some(v) if v.is_container() => v,
        _ => Value::empty_container(donors.first().map(Value::shape).unwrap_or(Shape::Mapping)),
    };
    for donor in donors {
        merge_into(&mut target, donor);
    }
    target
}

/// Merge a single donor into `target` in place.
///
/// # Example
///
/// ```
/// use nested::{merge_into, Value};
/// use serde_json::json;
///
/// let mut target = Value::from(json!({"a": 1}));
/// merge_into(&mut target, &Value::from(json!({"a": {"x": 1}})));
/// // A scalar under a container donor value is coerced to the donor's shape.
/// assert_eq!(target.to_json().unwrap(), json!({"a": {"x": 1}}));
/// ```
pub fn merge_into(target: &mut Value, donor: &Value) {
    if donor.is_null() {
        return;
    }
    let opts = NestedOptions::default();
    let donor_entries: Vec<(String, Value)> = donor
        .entries()
        .into_iter()
        .map(|(k, v)| (k, v.clone()))
        .collect();
    for (key, value) in donor_entries {
        match value.shape() {
            Shape::Mapping | Shape::List => {
                let mut child = child_for(target, &key, value.shape());
                merge_into(&mut child, &value);
                delegate::set_one(target, &key, child, &opts);
            }
            Shape::Scalar => {
                delegate::set_one(target, &key, value, &opts);
            }
        }
    }
}

/// The child of `target` at `key` that a container donor value of `shape`
/// merges into: the current child when compatible, a fresh empty container
/// of the donor's shape otherwise.
fn child_for(target: &Value, key: &str, shape: Shape) -> Value {
    match target.child(key) {
        Some(current)
            if current.shape() == shape
                || (shape == Shape::Mapping && matches!(current, Value::Node(_))) =>
        {
            current.clone()
        }
        _ => Value::empty_container(shape),
    }
}
