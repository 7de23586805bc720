//! nested — delegating accessors, dotted-path resolution, and structural
//! merge for hierarchical key-value graphs.
//!
//! A graph is a tree of [`Value`]s. Any mapping position may instead hold a
//! delegate node ([`DelegateNode`]) that overrides how single keys are read,
//! written, or removed; path traversal and merging stay oblivious to which
//! nodes are plain and which are custom. A reserved [`Value::Tombstone`]
//! marker hides a key from nested traversal even when a delegate could
//! answer it.
//!
//! Ordinary missing-data conditions never error: absence is communicated
//! structurally through `Option` and defaults.
//!
//! # Example
//!
//! ```
//! use nested::{get_path, set_path, NestedOptions, Path, Value, DEFAULT_NESTED_OPTIONS};
//! use serde_json::json;
//!
//! let mut doc = Value::from(json!({"a": {"b": 2}}));
//! assert_eq!(
//!     get_path(&doc, &Path::from("a.b"), None, &DEFAULT_NESTED_OPTIONS),
//!     Some(Value::from(2))
//! );
//!
//! assert_eq!(
//!     set_path(&mut doc, &Path::from("a.c"), Value::from(3), &NestedOptions::ensured()),
//!     None
//! );
//! assert_eq!(doc.to_json().unwrap(), json!({"a": {"b": 2, "c": 3}}));
//! ```

pub mod cli;
pub mod convert;
pub mod delegate;
pub mod merge;
pub mod node;
pub mod ops;
pub mod options;
pub mod path;
pub mod resolve;
pub mod value;

pub use convert::ConvertError;
pub use merge::{merge, merge_into};
pub use node::{DelegateNode, Deleter, Getter, Setter};
pub use ops::{get_path, set_path, unset_path};
pub use options::{NestedOptions, DEFAULT_NESTED_OPTIONS};
pub use path::Path;
pub use resolve::{resolve, resolve_mut, Reference, ReferenceMut};
pub use value::{Shape, Storage, Value};
