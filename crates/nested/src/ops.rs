//! Derived path operations — get/set/unset through a segment chain.
//!
//! Thin layers over [`resolve`](crate::resolve::resolve) and
//! [`resolve_mut`](crate::resolve::resolve_mut): the resolver finds the
//! owning node, the delegate accessor performs the final read or write with
//! the same threaded options.

use crate::delegate;
use crate::options::NestedOptions;
use crate::path::Path;
use crate::resolve::{resolve, resolve_mut, Reference, ReferenceMut};
use crate::value::Value;

/// Get the value at `path` below `root`, returning `default` when
/// resolution fails or the leaf is empty.
///
/// # Example
///
/// ```
/// use nested::{get_path, Path, Value, DEFAULT_NESTED_OPTIONS};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"a": {"b": 2}}));
/// let opts = DEFAULT_NESTED_OPTIONS;
/// assert_eq!(get_path(&doc, &Path::from("a.b"), None, &opts), Some(Value::from(2)));
/// assert_eq!(
///     get_path(&doc, &Path::from("a.x"), Some(&Value::from("DEF")), &opts),
///     Some(Value::from("DEF"))
/// );
/// ```
pub fn get_path(
    root: &Value,
    path: &Path,
    default: Option<&Value>,
    opts: &NestedOptions,
) -> Option<Value> {
    match resolve(root, path, opts) {
        Some(Reference { val: Some(val), .. }) => Some(val),
        _ => default.cloned(),
    }
}

/// Put `value` at `path` below `root`, returning the previous value at the
/// leaf.
///
/// Without `opts.ensure`, a path whose intermediates do not exist silently
/// fails: nothing is written and `None` is returned. With `ensure`, missing
/// intermediate mappings are created on the way down.
///
/// # Example
///
/// ```
/// use nested::{get_path, set_path, NestedOptions, Path, Value, DEFAULT_NESTED_OPTIONS};
/// use serde_json::json;
///
/// let mut doc = Value::from(json!({}));
///
/// // No ensure: the write has nowhere to land.
/// assert_eq!(set_path(&mut doc, &Path::from("a.b"), Value::from(5), &DEFAULT_NESTED_OPTIONS), None);
/// assert_eq!(doc, Value::from(json!({})));
///
/// assert_eq!(set_path(&mut doc, &Path::from("a.b"), Value::from(5), &NestedOptions::ensured()), None);
/// assert_eq!(doc.to_json().unwrap(), json!({"a": {"b": 5}}));
/// ```
pub fn set_path(root: &mut Value, path: &Path, value: Value, opts: &NestedOptions) -> Option<Value> {
    let ReferenceMut { key, val, obj, opts } = resolve_mut(root, path, opts)?;
    delegate::set_one(obj, &key, value, &opts);
    val
}

/// Remove the value at `path` below `root`, returning the value it held.
///
/// # Example
///
/// ```
/// use nested::{unset_path, Path, Value, DEFAULT_NESTED_OPTIONS};
/// use serde_json::json;
///
/// let mut doc = Value::from(json!({"a": {"b": 5}}));
/// assert_eq!(
///     unset_path(&mut doc, &Path::from("a.b"), &DEFAULT_NESTED_OPTIONS),
///     Some(Value::from(5))
/// );
/// assert_eq!(doc.to_json().unwrap(), json!({"a": {}}));
/// ```
pub fn unset_path(root: &mut Value, path: &Path, opts: &NestedOptions) -> Option<Value> {
    let ReferenceMut { key, val, obj, opts } = resolve_mut(root, path, opts)?;
    delegate::unset(obj, &key, &opts);
    val
}
