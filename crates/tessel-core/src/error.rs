//! Container error types.

use std::error::Error;
use std::fmt;

/// A fallible allocation could not reserve the requested buffer.
///
/// Only returned by the `try_*` operations. The infallible operations
/// abort through the global allocator's failure handler instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapacityError {
    /// Number of elements requested.
    pub requested: usize,
    /// Size of one element in bytes.
    pub element_size: usize,
}

impl CapacityError {
    /// Build an error for `requested` elements of type `T`.
    pub fn new<T>(requested: usize) -> Self {
        Self {
            requested,
            element_size: std::mem::size_of::<T>(),
        }
    }

    /// Total bytes the failed allocation asked for, saturating on overflow.
    pub fn requested_bytes(&self) -> usize {
        self.requested.saturating_mul(self.element_size)
    }
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not allocate {} elements ({} bytes)",
            self.requested,
            self.requested_bytes()
        )
    }
}

impl Error for CapacityError {}
