//! A growable indexed sequence container with snapshot iteration.
//!
//! [`Strand`] is an ordered, dynamically-resizable collection with O(1)
//! indexed access, O(1) amortized append, and O(n) positional insert
//! and remove. Capacity grows by doubling and never shrinks.
//!
//! # Architecture
//!
//! ```text
//! Strand<T> (operation contracts: bounds checks, growth policy)
//! └── SlotBuffer<T> (slot storage: allocate / copy / release)
//!
//! Strand<T> implements strand_core::Iterable by copying its current
//! elements into a strand_core::SnapshotIter, which is fully
//! independent of the source container.
//! ```
//!
//! # Examples
//!
//! ```
//! use strand::Strand;
//!
//! let mut seq = Strand::new();
//! seq.push("red");
//! seq.push("blue");
//! seq.insert(1, "green").unwrap();
//! assert_eq!(seq.as_slice(), &["red", "green", "blue"]);
//! assert_eq!(seq.remove(0).unwrap(), "red");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod buffer;
pub mod vector;

pub use vector::Strand;

// Re-export the iteration framework so `strand` works as a single dependency.
pub use strand_core::{Iterable, SnapshotIter, StrandError};
