//! Linear undo/redo cursor over snapshots.
//!
//! This module provides [`VersionHistory`], a generic timeline of retained
//! snapshots with a movable cursor. It pairs naturally with the persistent
//! collections: each mutating operation produces a new version, the caller
//! records it with [`update`](VersionHistory::update), and
//! [`undo`](VersionHistory::undo)/[`redo`](VersionHistory::redo) navigate
//! the recorded versions at no structural cost, since the snapshots share
//! their unchanged nodes.
//!
//! The history is strictly linear: recording a new version after an undo
//! discards the abandoned future, it never branches.
//!
//! The cursor and timeline are ordinary mutable state. Concurrent use of
//! one history instance must be serialized by the caller; the snapshots
//! themselves stay freely shareable.
//!
//! # Examples
//!
//! ```rust
//! use strata::history::VersionHistory;
//!
//! let mut history = VersionHistory::new(0);
//! history.update(1);
//! history.update(2);
//!
//! assert_eq!(*history.undo(), 1);
//! assert_eq!(*history.undo(), 0);
//! assert_eq!(*history.redo(), 1);
//!
//! history.update(5); // discards the redo branch holding 2
//! assert!(!history.can_redo());
//! assert_eq!(*history.current(), 5);
//! ```

/// A linear undo/redo cursor over snapshots of type `T`.
///
/// # Invariants
///
/// The timeline always holds at least the initial snapshot, and the cursor
/// always points inside it, so [`current`](VersionHistory::current) never
/// fails.
///
/// # Time Complexity
///
/// Every operation is O(1), except for the memory retained by the
/// snapshots themselves: a snapshot is only released when
/// [`update`](VersionHistory::update) truncates an abandoned future.
#[derive(Debug, Clone)]
pub struct VersionHistory<T> {
    /// Retained snapshots, oldest first.
    timeline: Vec<T>,
    /// Index of the current snapshot.
    cursor: usize,
}

impl<T> VersionHistory<T> {
    /// Creates a history whose timeline holds the initial snapshot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::history::VersionHistory;
    ///
    /// let history = VersionHistory::new("draft");
    /// assert_eq!(*history.current(), "draft");
    /// assert!(!history.can_undo());
    /// assert!(!history.can_redo());
    /// ```
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            timeline: vec![initial],
            cursor: 0,
        }
    }

    /// Returns the snapshot under the cursor.
    #[inline]
    #[must_use]
    pub fn current(&self) -> &T {
        &self.timeline[self.cursor]
    }

    /// Records a new version: discards every snapshot beyond the cursor,
    /// appends `version`, and moves the cursor onto it.
    ///
    /// This is the only way a version enters the timeline, and it always
    /// forfeits an undone-but-not-redone future.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::history::VersionHistory;
    ///
    /// let mut history = VersionHistory::new(0);
    /// history.update(1);
    /// history.undo();
    /// history.update(2); // 1 is gone for good
    ///
    /// assert!(!history.can_redo());
    /// assert_eq!(*history.current(), 2);
    /// ```
    pub fn update(&mut self, version: T) -> &T {
        self.timeline.truncate(self.cursor + 1);
        self.timeline.push(version);
        self.cursor = self.timeline.len() - 1;
        self.current()
    }

    /// Moves the cursor one step back and returns the snapshot there.
    ///
    /// A no-op at the oldest snapshot.
    pub fn undo(&mut self) -> &T {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Moves the cursor one step forward and returns the snapshot there.
    ///
    /// A no-op at the newest snapshot.
    pub fn redo(&mut self) -> &T {
        if self.cursor + 1 < self.timeline.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Returns `true` if an older snapshot exists.
    #[inline]
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns `true` if an undone snapshot can be restored.
    #[inline]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.timeline.len()
    }

    /// Number of retained snapshots, the initial one included.
    #[inline]
    #[must_use]
    pub fn version_count(&self) -> usize {
        self.timeline.len()
    }

    /// Position of the cursor within the timeline, for diagnostics.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }
}
