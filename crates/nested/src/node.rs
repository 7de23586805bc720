//! Delegate nodes — per-node accessor overrides.
//!
//! A [`Value::Node`](crate::Value::Node) carries a `Box<dyn DelegateNode>`.
//! The delegate accessor ([`crate::delegate`]) probes the node's capabilities
//! at call time: a node that answers [`DelegateNode::as_getter`] (or the
//! setter/deleter probes) handles the operation itself; otherwise the
//! operation falls back to the node's plain [`Storage`].
//!
//! This lets any position in a graph implement virtualized or computed
//! storage — lazy sections, validated fields — while path resolution and
//! merge stay oblivious to which nodes are plain and which are custom.

use std::fmt;

use crate::options::NestedOptions;
use crate::value::{Storage, Value};

/// Custom read behavior for single keys on a node.
pub trait Getter {
    /// Answer a key lookup. `None` means the key is absent; returning
    /// [`Value::Tombstone`](crate::Value::Tombstone) hides the key from
    /// nested traversal entirely.
    fn get(&self, key: &str, default: Option<&Value>, opts: &NestedOptions) -> Option<Value>;
}

/// Custom write behavior for single keys on a node.
pub trait Setter {
    fn set(&mut self, key: &str, value: Value, opts: &NestedOptions);
}

/// Custom removal behavior for single keys on a node.
pub trait Deleter {
    /// Remove a key, returning the value it held immediately before removal.
    fn unset(&mut self, key: &str, opts: &NestedOptions) -> Option<Value>;
}

/// A graph node that may override any of the three accessor primitives.
///
/// Implementations always expose plain storage; the capability probes
/// default to `None`, which selects the direct-storage path for that
/// operation.
pub trait DelegateNode: fmt::Debug {
    /// Plain key-value storage backing this node.
    fn storage(&self) -> &Storage;
    fn storage_mut(&mut self) -> &mut Storage;

    /// Custom getter capability, if this node has one.
    fn as_getter(&self) -> Option<&dyn Getter> {
        None
    }

    /// Custom setter capability, if this node has one.
    fn as_setter_mut(&mut self) -> Option<&mut dyn Setter> {
        None
    }

    /// Custom deleter capability, if this node has one.
    fn as_deleter_mut(&mut self) -> Option<&mut dyn Deleter> {
        None
    }

    /// In-place handle to a child value, used by the mutating resolver to
    /// descend through this node. Nodes whose children are computed rather
    /// than stored may return `None`, which fails resolution of paths that
    /// would write through them.
    fn child_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.storage_mut().get_mut(key)
    }

    fn clone_node(&self) -> Box<dyn DelegateNode>;
}

impl Clone for Box<dyn DelegateNode> {
    fn clone(&self) -> Self {
        self.clone_node()
    }
}
