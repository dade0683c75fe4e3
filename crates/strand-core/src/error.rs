//! Error types shared by the strand container operations.

use std::error::Error;
use std::fmt;

/// Errors that can occur during container operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StrandError {
    /// An index outside the operation's valid range.
    ///
    /// For `get`, `set`, and `remove` the valid range is `[0, len)`;
    /// for `insert` it is `[0, len]` inclusive.
    IndexOutOfRange {
        /// Name of the offending operation ("get", "set", "insert", "remove").
        op: &'static str,
        /// The index that was supplied.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for StrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { op, index, len } => {
                write!(f, "{op}: index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for StrandError {}
