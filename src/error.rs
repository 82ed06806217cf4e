//! Error types shared by the persistent collections.
//!
//! Every fallible operation is a pure function from its inputs to either a
//! new immutable instance or a [`CollectionError`]; a failure never mutates
//! the receiver or any previously produced version, so there is no partial
//! failure to recover from.

use thiserror::Error;

/// The failure taxonomy of the persistent collections.
///
/// # Examples
///
/// ```rust
/// use strata::error::CollectionError;
/// use strata::persistent::TrieArray;
///
/// let array: TrieArray<i32> = TrieArray::of_size(3);
/// assert_eq!(
///     array.get(7),
///     Err(CollectionError::InvalidIndex { index: 7, length: 3 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An index outside the valid range was passed to an indexed operation.
    ///
    /// The valid range is `[0, length)` for `get`/`set`/`remove_at` and
    /// `[0, length]` for `insert`.
    #[error("index {index} out of bounds for length {length}")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// The length of the collection at the time of the call.
        length: usize,
    },

    /// A removal was attempted on a collection with no elements.
    #[error("cannot remove from an empty collection")]
    EmptyCollection,

    /// An internal structural invariant was found broken during traversal.
    ///
    /// This indicates a defect in the library, never a user error, and is
    /// not recoverable.
    #[error("corrupted structure: {0}")]
    CorruptedStructure(&'static str),
}
