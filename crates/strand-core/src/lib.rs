//! Core types for the strand container crates.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error type shared by all container operations and the generic
//! iteration framework: the [`Iterable`] registration trait and the
//! sequence-backed [`SnapshotIter`] that collections fill with a copy
//! of their current elements.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod iter;
pub mod traits;

// Public re-exports for the primary API surface.
pub use error::StrandError;
pub use iter::SnapshotIter;
pub use traits::Iterable;
