//! Path resolution — walking a segment chain through a node graph.
//!
//! Resolution is a left fold over the path segments with the current node as
//! accumulator, reading each hop through the delegate accessor so custom
//! getters are honored transparently. It either produces a reference record
//! for the final segment or fails for the whole path:
//!
//! - an absent (`Null`) accumulator before any segment fails resolution;
//! - a [`Value::Tombstone`] answer at any hop fails resolution — the key is
//!   deliberately hidden from nested traversal, whatever `ensure` says (the
//!   permissive reading of that combination was never observable in
//!   practice, so the strict one is implemented);
//! - the final segment always produces a [`Reference`], even when its value
//!   is absent — a found-but-empty leaf is distinct from a failed
//!   resolution.
//!
//! [`resolve`] is the borrowed read path; [`resolve_mut`] descends in place
//! and, with `ensure`, creates missing intermediate mappings as it goes.

use std::borrow::Cow;

use crate::delegate;
use crate::options::NestedOptions;
use crate::path::Path;
use crate::value::{list_index, Storage, Value};

/// The result of a successful read resolution.
///
/// `obj` is a clone of the node that directly owns `key` — never an
/// ancestor. `val` is the value answered for `key`, `None` when the leaf
/// exists in no form. `opts` is the effective record threaded through every
/// hop of the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub key: String,
    pub val: Option<Value>,
    pub obj: Value,
    pub opts: NestedOptions,
}

/// The result of a successful mutable resolution: like [`Reference`], but
/// `obj` borrows the owning node in place so the caller can write through
/// it.
#[derive(Debug)]
pub struct ReferenceMut<'a> {
    pub key: String,
    pub val: Option<Value>,
    pub obj: &'a mut Value,
    pub opts: NestedOptions,
}

/// Resolve `path` against `root` without mutating the graph.
///
/// Returns `None` when resolution fails for the whole path: an empty path,
/// an absent intermediate, or a tombstone hit. `ensure` has no effect here;
/// intermediate creation belongs to [`resolve_mut`].
///
/// # Example
///
/// ```
/// use nested::{resolve, Path, Value, DEFAULT_NESTED_OPTIONS};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"a": {"b": 2}}));
/// let meta = resolve(&doc, &Path::from("a.b"), &DEFAULT_NESTED_OPTIONS).unwrap();
/// assert_eq!(meta.key, "b");
/// assert_eq!(meta.val, Some(Value::from(2)));
/// assert_eq!(meta.obj, Value::from(json!({"b": 2})));
///
/// // A missing intermediate fails the entire resolution.
/// assert!(resolve(&doc, &Path::from("x.y"), &DEFAULT_NESTED_OPTIONS).is_none());
/// ```
pub fn resolve(root: &Value, path: &Path, opts: &NestedOptions) -> Option<Reference> {
    let segments = path.segments();
    let last = segments.len().checked_sub(1)?;
    let mut cur: Cow<'_, Value> = Cow::Borrowed(root);
    for (idx, segment) in segments.iter().enumerate() {
        if cur.as_ref().is_null() {
            return None;
        }
        let val = delegate::get(cur.as_ref(), segment, None, opts);
        if matches!(val, Some(Value::Tombstone)) {
            return None;
        }
        if idx == last {
            return Some(Reference {
                key: segment.clone(),
                val,
                obj: cur.into_owned(),
                opts: opts.clone(),
            });
        }
        match val {
            // Computed values from custom getters are owned; descend into
            // them by value. Scalars descend too and fail one hop later,
            // like any node that holds no keys.
            Some(next) => cur = Cow::Owned(next),
            None => return None,
        }
    }
    None
}

/// Resolve `path` against `root`, descending in place so the caller can
/// mutate through the returned reference.
///
/// With `opts.ensure`, a missing intermediate is filled with a new empty
/// mapping, attached through the delegate setter before descent so it is
/// live in the graph rather than orphaned. Descent through a delegate node
/// uses its [`child_mut`](crate::node::DelegateNode::child_mut) hook; a node
/// that cannot hand out an in-place child fails resolution.
///
/// # Example
///
/// ```
/// use nested::{resolve_mut, delegate, NestedOptions, Path, Value};
/// use serde_json::json;
///
/// let mut doc = Value::from(json!({}));
/// let opts = NestedOptions::ensured();
/// let meta = resolve_mut(&mut doc, &Path::from("a.b"), &opts).unwrap();
/// assert_eq!(meta.val, None);
/// delegate::set_one(meta.obj, &meta.key, Value::from(5), &meta.opts);
/// assert_eq!(doc.to_json().unwrap(), json!({"a": {"b": 5}}));
/// ```
pub fn resolve_mut<'a>(
    root: &'a mut Value,
    path: &Path,
    opts: &NestedOptions,
) -> Option<ReferenceMut<'a>> {
    let segments = path.segments();
    let last = segments.len().checked_sub(1)?;
    let mut cur: &'a mut Value = root;
    for (idx, segment) in segments.iter().enumerate() {
        if cur.is_null() {
            return None;
        }
        let val = delegate::get(cur, segment, None, opts);
        if matches!(val, Some(Value::Tombstone)) {
            return None;
        }
        if idx == last {
            return Some(ReferenceMut {
                key: segment.clone(),
                val,
                obj: cur,
                opts: opts.clone(),
            });
        }
        if val.is_none() {
            if !opts.ensure {
                return None;
            }
            delegate::set_one(cur, segment, Value::Map(Storage::new()), opts);
        }
        cur = match cur {
            Value::Map(map) => map.get_mut(segment.as_str())?,
            Value::List(list) => {
                let i = list_index(segment)?;
                list.get_mut(i)?
            }
            Value::Node(node) => node.child_mut(segment)?,
            _ => return None,
        };
    }
    None
}
