//! Persistent (immutable) collections.
//!
//! This module provides the three copy-on-write collection engines:
//!
//! - [`TrieArray`]: persistent random-access array (32-way radix trie)
//! - [`PathList`]: persistent doubly-navigable list
//! - [`AvlMap`]: persistent ordered map (height-balanced binary tree)
//!
//! # Structural Sharing
//!
//! Every mutating operation returns a brand-new collection instance and
//! leaves the receiver untouched. A new version allocates only the nodes on
//! the path from the root to the modified location and shares every other
//! node with its predecessors, so any number of versions can coexist at a
//! memory cost proportional to the edits between them. [`PathList`] is the
//! documented exception: its bidirectional immutable links force the whole
//! node chain to be rebuilt on structural change (see the module docs).
//!
//! # Examples
//!
//! ## `TrieArray`
//!
//! ```rust
//! use strata::persistent::TrieArray;
//!
//! let array: TrieArray<i32> = TrieArray::from_slice(&[1, 2, 3]);
//! let updated = array.set(1, 100).unwrap();
//!
//! assert_eq!(array.get(1).unwrap(), Some(&2));     // Original unchanged
//! assert_eq!(updated.get(1).unwrap(), Some(&100)); // New version
//! ```
//!
//! ## `PathList`
//!
//! ```rust
//! use strata::persistent::PathList;
//!
//! let list = PathList::new().push_back(1).push_back(2).push_back(3);
//! let shorter = list.remove_at(1).unwrap();
//!
//! assert_eq!(list.len(), 3);    // Original unchanged
//! assert_eq!(shorter.len(), 2); // New version
//! assert_eq!(shorter.get(1).unwrap(), Some(3));
//! ```
//!
//! ## `AvlMap`
//!
//! ```rust
//! use strata::persistent::AvlMap;
//!
//! let map = AvlMap::new()
//!     .insert("one".to_string(), 1)
//!     .insert("two".to_string(), 2);
//! let removed = map.remove("one");
//!
//! assert_eq!(map.len(), 2);     // Original unchanged
//! assert_eq!(removed.len(), 1); // New version
//! assert_eq!(removed.get("one"), None);
//! ```

// =============================================================================
// Shared Pointer Type Aliases
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, which is
/// thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Non-owning counterpart of [`ReferenceCounter`].
///
/// [`PathList`] stores its backward links as weak references so that the
/// forward chain remains the sole owner of the nodes and no reference cycle
/// can form.
#[cfg(feature = "arc")]
pub(crate) type WeakReference<T> = std::sync::Weak<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type WeakReference<T> = std::rc::Weak<T>;

/// Write-once cell used to wire backward links during chain construction.
///
/// A [`PathList`] node is published only after its cell has been
/// initialized, so the nodes are immutable from every observer's point of
/// view.
#[cfg(feature = "arc")]
pub(crate) type LinkCell<T> = std::sync::OnceLock<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type LinkCell<T> = std::cell::OnceCell<T>;

mod avl_map;
mod path_list;
mod trie_array;

pub use avl_map::AvlMap;
pub use avl_map::AvlMapIterator;
pub use path_list::PathList;
pub use path_list::PathListIterator;
pub use trie_array::TrieArray;
pub use trie_array::TrieArrayIterator;

// =============================================================================
// Tests
// =============================================================================
