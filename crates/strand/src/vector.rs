//! The [`Strand`] container and its operation contracts.

use std::fmt;
use std::ops::{Index, IndexMut};

use strand_core::{Iterable, SnapshotIter, StrandError};

use crate::buffer::SlotBuffer;

/// An ordered, growable sequence of elements.
///
/// Elements keep their insertion/positional order. Indexed access is
/// O(1); append is amortized O(1); positional insert and remove are
/// O(n) because of the element shift. When an append or insert would
/// exceed capacity, capacity doubles; it never shrinks, not even on
/// [`clear`](Strand::clear).
///
/// The fallible operations (`get`, `set`, `insert`, `remove`) return
/// [`StrandError::IndexOutOfRange`] on a bad index and leave the
/// container untouched. The [`Index`]/[`IndexMut`] operators expose the
/// same contract as a panic for callers that treat a bad index as a
/// programming error.
///
/// # Examples
///
/// ```
/// use strand::Strand;
///
/// let mut seq = Strand::new();
/// for n in 1..=3 {
///     seq.push(n * 10);
/// }
/// assert_eq!(seq.len(), 3);
/// assert_eq!(*seq.get(1).unwrap(), 20);
///
/// seq.set(1, 25).unwrap();
/// assert_eq!(seq[1], 25);
/// assert!(seq.get(3).is_err());
/// ```
pub struct Strand<T> {
    buf: SlotBuffer<T>,
}

impl<T> Strand<T> {
    /// Capacity of a container created by [`new`](Strand::new).
    ///
    /// Any positive value works; larger values postpone the first
    /// growth step at the cost of more up-front memory per container.
    pub const INITIAL_CAPACITY: usize = 10;

    /// Create an empty container with [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY) slots.
    pub fn new() -> Self {
        Self {
            buf: SlotBuffer::new(Self::INITIAL_CAPACITY),
        }
    }

    /// Create a container that takes ownership of `items`.
    ///
    /// Capacity equals the item count exactly (minimum 1), with no
    /// slack: the next [`push`](Strand::push) triggers a growth step.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            buf: SlotBuffer::from_vec(items),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    /// Current allocated slot count.
    ///
    /// Grows by doubling as elements are added and never decreases.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The element at `index`.
    ///
    /// Returns `Err(StrandError::IndexOutOfRange)` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, StrandError> {
        self.buf.get(index).ok_or(StrandError::IndexOutOfRange {
            op: "get",
            index,
            len: self.buf.len(),
        })
    }

    /// Overwrite the element at `index` with `value`.
    ///
    /// Same bounds contract as [`get`](Strand::get). Never resizes.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), StrandError> {
        let len = self.buf.len();
        match self.buf.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(StrandError::IndexOutOfRange {
                op: "set",
                index,
                len,
            }),
        }
    }

    /// Append `value` at the end.
    ///
    /// Doubles capacity first when the container is full. Amortized
    /// O(1); a growth step costs O(n) for the element copy.
    pub fn push(&mut self, value: T) {
        if self.buf.is_full() {
            self.buf.grow();
        }
        self.buf.push(value);
    }

    /// Insert `value` at `index`, shifting later elements right.
    ///
    /// The valid range is `[0, len()]` inclusive — inserting at `len()`
    /// is equivalent to [`push`](Strand::push). Doubles capacity first
    /// when the container is full. O(n).
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), StrandError> {
        if index > self.buf.len() {
            return Err(StrandError::IndexOutOfRange {
                op: "insert",
                index,
                len: self.buf.len(),
            });
        }
        if self.buf.is_full() {
            self.buf.grow();
        }
        self.buf.insert(index, value);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later
    /// elements left. Capacity is never reduced. O(n).
    pub fn remove(&mut self, index: usize) -> Result<T, StrandError> {
        if index >= self.buf.len() {
            return Err(StrandError::IndexOutOfRange {
                op: "remove",
                index,
                len: self.buf.len(),
            });
        }
        Ok(self.buf.remove(index))
    }

    /// Drop all elements. Capacity and allocation are untouched.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// The elements as a borrowed slice, in order.
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }
}

impl<T: Clone> Strand<T> {
    /// Create a container by copying `items` in order.
    ///
    /// Same tight-capacity contract as [`from_vec`](Strand::from_vec).
    pub fn from_slice(items: &[T]) -> Self {
        Self::from_vec(items.to_vec())
    }

    /// Copy the elements into a plain `Vec`, in order, without a
    /// terminator. The explicit-length counterpart of
    /// [`to_array`](Strand::to_array).
    pub fn to_vec(&self) -> Vec<T> {
        self.buf.as_slice().to_vec()
    }

    /// Copy the elements into a sentinel-terminated sequence.
    ///
    /// The result has `len() + 1` slots: each element in order wrapped
    /// in `Some`, then one `None` terminator, for consumers that expect
    /// a sentinel rather than an explicit length. The terminator is
    /// present even when the container is empty.
    pub fn to_array(&self) -> Vec<Option<T>> {
        let mut out: Vec<Option<T>> = Vec::with_capacity(self.buf.len() + 1);
        out.extend(self.buf.as_slice().iter().cloned().map(Some));
        out.push(None);
        out
    }
}

impl<T> Default for Strand<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Strand<T> {
    /// Clone into an independent container with the same length **and
    /// the same capacity** (the storage is not shrunk to fit).
    ///
    /// Elements are cloned shallowly in the `T: Clone` sense: a shared
    /// element type such as `Rc<U>` still aliases the same referent in
    /// both containers.
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Strand<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.as_slice()).finish()
    }
}

impl<T: Clone> From<&[T]> for Strand<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T> From<Vec<T>> for Strand<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

// ── Fatal indexing surface ───────────────────────────────────────────

impl<T> Index<usize> for Strand<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with the [`StrandError::IndexOutOfRange`] message if
    /// `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for Strand<T> {
    /// # Panics
    ///
    /// Panics with the [`StrandError::IndexOutOfRange`] message if
    /// `index >= len()`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.buf.len();
        match self.buf.get_mut(index) {
            Some(value) => value,
            None => {
                let err = StrandError::IndexOutOfRange {
                    op: "set",
                    index,
                    len,
                };
                panic!("{err}")
            }
        }
    }
}

// ── Snapshot iteration ───────────────────────────────────────────────

impl<T: Clone> Iterable for Strand<T> {
    type Item = T;

    /// Copy the current elements, in index order, into an independent
    /// [`SnapshotIter`]. Later mutation of this container — including
    /// reallocation on growth — is never observed by the snapshot, and
    /// the snapshot never yields elements added after its creation.
    fn iter_snapshot(&self) -> SnapshotIter<T> {
        let mut iter = SnapshotIter::with_capacity(self.buf.len());
        for item in self.buf.as_slice() {
            iter.push(item.clone());
        }
        iter
    }
}

impl<T: Clone> IntoIterator for &Strand<T> {
    type Item = T;
    type IntoIter = SnapshotIter<T>;

    fn into_iter(self) -> SnapshotIter<T> {
        self.iter_snapshot()
    }
}
