//! nested-util — collection helpers for nested key-value graphs.
//!
//! Small value-level utilities consumed at the boundary of the core
//! accessor protocol: structural equality, membership and emptiness tests,
//! in-place removal, and collection-to-item-list conversion.

pub mod deep_equal;
pub mod is_empty;
pub mod is_member;
pub mod items;
pub mod remove;

// Re-exports for convenience
pub use deep_equal::deep_equal;
pub use is_empty::is_empty;
pub use is_member::is_member;
pub use items::items;
pub use remove::remove;
