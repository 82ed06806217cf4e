//! # strata
//!
//! Persistent versioned collections for Rust.
//!
//! ## Overview
//!
//! This library provides immutable collections where every mutating
//! operation returns a new logical version while every previously produced
//! version remains valid and independently usable:
//!
//! - **Persistent Collections**: [`TrieArray`], [`PathList`], [`AvlMap`],
//!   copy-on-write structures built on structural sharing
//! - **Recursive Values**: [`Value`], a closed tagged union that lets the
//!   collections nest inside one another
//! - **Version History**: [`VersionHistory`], a linear undo/redo cursor over
//!   any snapshot type
//!
//! Producing a new version copies only the nodes along the path from the
//! root to the modified location ("path copying"); every untouched subtree
//! is shared between versions by reference counting. The one documented
//! exception is [`PathList`], whose bidirectional immutable links force
//! whole-chain reconstruction on structural change.
//!
//! ## Feature Flags
//!
//! - `arc`: share nodes with `Arc` instead of `Rc`, making frozen versions
//!   readable from multiple threads
//!
//! ## Example
//!
//! ```rust
//! use strata::persistent::AvlMap;
//! use strata::history::VersionHistory;
//!
//! let empty: AvlMap<String, i64> = AvlMap::new();
//! let mut history = VersionHistory::new(empty);
//!
//! let next = history.current().insert("answer".to_string(), 42);
//! history.update(next);
//!
//! assert_eq!(history.current().get("answer"), Some(&42));
//! assert_eq!(history.undo().get("answer"), None);
//! ```
//!
//! [`TrieArray`]: persistent::TrieArray
//! [`PathList`]: persistent::PathList
//! [`AvlMap`]: persistent::AvlMap
//! [`Value`]: value::Value
//! [`VersionHistory`]: history::VersionHistory

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::CollectionError;
    pub use crate::history::VersionHistory;
    pub use crate::persistent::{AvlMap, PathList, TrieArray};
    pub use crate::value::Value;
}

pub mod error;
pub mod history;
pub mod persistent;
pub mod value;
