//! Error type for allocation operations
//!
//! The error taxonomy is deliberately narrow: the only runtime failure an
//! allocator reports is resource exhaustion. Layout arithmetic that cannot
//! be represented (`count * size_of::<T>()` overflowing `isize`) is caught
//! before the allocator is ever asked and reported as [`AllocError::SizeOverflow`].

use core::alloc::Layout;

/// Result type for allocation operations.
pub type AllocResult<T> = Result<T, AllocError>;

/// Error returned by allocation operations.
///
/// Exhaustion is fatal to the in-progress operation and is propagated, never
/// retried. Callers that need partial-progress semantics (e.g. a container's
/// bulk insert) get them by construction: memory owned before the failing
/// call is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// The underlying memory source could not satisfy the request.
    #[error("allocation of {size} bytes (align {align}) failed")]
    Exhausted {
        /// Requested size in bytes.
        size: usize,
        /// Requested alignment in bytes.
        align: usize,
    },

    /// The total size of an array allocation overflowed.
    #[error("layout overflow allocating {count} elements of {elem_size} bytes")]
    SizeOverflow {
        /// Number of elements requested.
        count: usize,
        /// Size of a single element in bytes.
        elem_size: usize,
    },
}

impl AllocError {
    /// Creates an exhaustion error for the given layout.
    #[inline]
    pub fn exhausted(layout: Layout) -> Self {
        AllocError::Exhausted {
            size: layout.size(),
            align: layout.align(),
        }
    }

    /// Creates an overflow error for an array of `count` elements of type `T`.
    #[inline]
    pub fn array_overflow<T>(count: usize) -> Self {
        AllocError::SizeOverflow {
            count,
            elem_size: core::mem::size_of::<T>(),
        }
    }

    /// Returns `true` if this error reports resource exhaustion.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, AllocError::Exhausted { .. })
    }

    /// Returns `true` if this error reports a layout overflow.
    pub fn is_size_overflow(&self) -> bool {
        matches!(self, AllocError::SizeOverflow { .. })
    }
}
