//! The registration trait for snapshot iteration.

use crate::iter::SnapshotIter;

/// A collection that can hand out snapshot iterators over its elements.
///
/// Implementing this trait is how a collection plugs into generic
/// iteration: callers written against `Iterable` can walk any such
/// collection without knowing its internal layout.
///
/// The returned iterator must be a **snapshot** — backed by a private
/// copy of the elements taken at call time, so that later mutation of
/// the collection (including reallocation of its storage) is never
/// observed through an iterator created earlier.
pub trait Iterable {
    /// The element type yielded by the snapshot.
    type Item;

    /// Take a snapshot of the current elements, in collection order.
    fn iter_snapshot(&self) -> SnapshotIter<Self::Item>;
}
