//! Sequence-backed snapshot iterators.
//!
//! A [`SnapshotIter`] owns a private copy of the elements it yields. A
//! collection builds one by pushing each of its current elements in
//! order; from that point on the iterator is fully decoupled from the
//! collection it came from.

use std::collections::VecDeque;
use std::iter::FusedIterator;

/// An iterator over an independent copy of a collection's elements.
///
/// Built element-by-element via [`push`](SnapshotIter::push) and
/// consumed front-to-back, so elements come out in the order they went
/// in. The iterator is finite and not restartable: once exhausted it
/// yields `None` forever.
///
/// Because the backing store is owned, a `SnapshotIter` may outlive the
/// collection it was taken from, and is `Send` whenever its element
/// type is.
///
/// # Examples
///
/// ```
/// use strand_core::SnapshotIter;
///
/// let mut iter = SnapshotIter::with_capacity(2);
/// iter.push("a");
/// iter.push("b");
/// assert_eq!(iter.len(), 2);
/// assert_eq!(iter.collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
#[derive(Clone, Debug)]
pub struct SnapshotIter<T> {
    items: VecDeque<T>,
}

impl<T> SnapshotIter<T> {
    /// Create an empty snapshot iterator.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Create an empty snapshot iterator with room for `n` elements.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(n),
        }
    }

    /// Append one element to the back of the snapshot.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Number of elements not yet yielded.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the iterator has no elements left to yield.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for SnapshotIter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Iterator for SnapshotIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.items.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for SnapshotIter<T> {}

impl<T> FusedIterator for SnapshotIter<T> {}

impl<T> Extend<T> for SnapshotIter<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for SnapshotIter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
