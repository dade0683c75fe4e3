//! Benchmark fixtures for the strand container.
//!
//! Provides pre-built containers at the sizes the benches exercise, so
//! every bench measures the same shapes:
//!
//! - [`sequential`]: a container holding `0..n` in order
//! - [`tight`]: the same content but with zero spare capacity, so the
//!   first mutation pays a growth step

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strand::Strand;

/// Build a container holding `0..n`, grown organically by pushing.
pub fn sequential(n: usize) -> Strand<u64> {
    let mut seq = Strand::new();
    for i in 0..n {
        seq.push(i as u64);
    }
    seq
}

/// Build a container holding `0..n` at exactly `n` capacity.
///
/// The next growth-triggering mutation reallocates immediately, which
/// makes this the worst-case starting point for append benches.
pub fn tight(n: usize) -> Strand<u64> {
    Strand::from_vec((0..n as u64).collect())
}
