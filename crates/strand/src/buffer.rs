//! Slot storage for the container.
//!
//! A [`SlotBuffer`] owns a contiguous store of element slots with an
//! explicit capacity that is managed here, never by the backing `Vec`'s
//! own growth policy. Growth is the allocate / copy / release dance:
//! a fresh store of double the capacity is allocated, the live elements
//! are moved across, and the old store is released.

use std::fmt;

/// Contiguous element storage with explicitly-managed capacity.
///
/// Slots `[0, len)` hold live elements; the remaining capacity is
/// unallocated headroom. Callers are responsible for growing before a
/// write that would exceed capacity — `push` and `insert` assume room
/// exists. Capacity is always at least 1 and never decreases.
pub(crate) struct SlotBuffer<T> {
    /// Live elements. The `Vec` is allocated up-front to `capacity`
    /// slots so that writes within capacity never reallocate behind
    /// our back.
    slots: Vec<T>,
    /// Allocated slot count. Tracked separately from `slots.capacity()`,
    /// which the allocator is free to round up.
    capacity: usize,
}

impl<T> SlotBuffer<T> {
    /// Allocate an empty buffer with the given capacity (minimum 1).
    pub(crate) fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Allocate a buffer holding exactly `items`, with capacity equal
    /// to the item count (minimum 1). No slack: the next push grows.
    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        let capacity = items.len().max(1);
        let mut slots = Vec::with_capacity(capacity);
        slots.extend(items);
        Self { slots, capacity }
    }

    /// Number of live elements.
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Allocated slot count.
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether every slot holds a live element.
    pub(crate) fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Double the capacity: allocate a new store, move the live
    /// elements into it, release the old store.
    pub(crate) fn grow(&mut self) {
        let doubled = self.capacity * 2;
        let mut next = Vec::with_capacity(doubled);
        next.append(&mut self.slots);
        // The old (now empty) store is released here.
        self.slots = next;
        self.capacity = doubled;
    }

    /// Write `value` into the first free slot.
    ///
    /// The caller must have ensured room via [`grow`](Self::grow).
    pub(crate) fn push(&mut self, value: T) {
        debug_assert!(self.slots.len() < self.capacity);
        self.slots.push(value);
    }

    /// Shift the elements at `[index, len)` one slot right and write
    /// `value` at `index`.
    ///
    /// The caller must have validated `index <= len` and ensured room.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        debug_assert!(self.slots.len() < self.capacity);
        debug_assert!(index <= self.slots.len());
        self.slots.insert(index, value);
    }

    /// Remove and return the element at `index`, shifting the elements
    /// at `[index + 1, len)` one slot left. Capacity is unchanged.
    ///
    /// The caller must have validated `index < len`.
    pub(crate) fn remove(&mut self, index: usize) -> T {
        debug_assert!(index < self.slots.len());
        self.slots.remove(index)
    }

    /// Shared reference to the element at `index`, if live.
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    /// Mutable reference to the element at `index`, if live.
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    /// Drop all live elements. Capacity is unchanged.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    /// The live elements as a slice.
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.slots
    }
}

impl<T: Clone> Clone for SlotBuffer<T> {
    /// Clone into an independent store sized to the source's current
    /// capacity, not just its length.
    fn clone(&self) -> Self {
        let mut slots = Vec::with_capacity(self.capacity);
        slots.extend(self.slots.iter().cloned());
        Self {
            slots,
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotBuffer")
            .field("len", &self.slots.len())
            .field("capacity", &self.capacity)
            .field("slots", &self.slots)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_capacity_to_one() {
        let buf: SlotBuffer<i32> = SlotBuffer::new(0);
        assert_eq!(buf.capacity(), 1);
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn from_vec_has_no_slack() {
        let buf = SlotBuffer::from_vec(vec![1, 2, 3]);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.capacity(), 3);
        assert!(buf.is_full());
    }

    #[test]
    fn from_empty_vec_keeps_minimum_capacity() {
        let buf: SlotBuffer<i32> = SlotBuffer::from_vec(vec![]);
        assert_eq!(buf.capacity(), 1);
        assert!(!buf.is_full());
    }

    #[test]
    fn grow_doubles_and_preserves_elements() {
        let mut buf = SlotBuffer::new(2);
        buf.push(10);
        buf.push(20);
        assert!(buf.is_full());
        buf.grow();
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.as_slice(), &[10, 20]);
    }

    #[test]
    fn grow_never_shrinks() {
        let mut buf: SlotBuffer<i32> = SlotBuffer::new(4);
        buf.grow();
        buf.grow();
        assert_eq!(buf.capacity(), 16);
    }

    #[test]
    fn insert_shifts_right() {
        let mut buf = SlotBuffer::new(4);
        buf.push(1);
        buf.push(3);
        buf.insert(1, 2);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn remove_shifts_left_and_keeps_capacity() {
        let mut buf = SlotBuffer::from_vec(vec![1, 2, 3]);
        assert_eq!(buf.remove(1), 2);
        assert_eq!(buf.as_slice(), &[1, 3]);
        assert_eq!(buf.capacity(), 3);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buf = SlotBuffer::from_vec(vec![1, 2, 3]);
        buf.clear();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 3);
    }

    #[test]
    fn clone_preserves_capacity() {
        let mut buf = SlotBuffer::new(8);
        buf.push(1);
        let copy = buf.clone();
        assert_eq!(copy.len(), 1);
        assert_eq!(copy.capacity(), 8);
    }
}
