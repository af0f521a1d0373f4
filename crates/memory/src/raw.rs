//! The raw memory capability
//!
//! [`RawAllocator`] is the boundary between the typed allocation layer and
//! whatever actually provides bytes: the system heap, a tracked wrapper, or
//! anything a caller injects. Everything above this trait treats it as an
//! opaque capability: request a [`Layout`], get uninitialized bytes back.
//!
//! # Safety
//!
//! Implementors must uphold the usual allocator contract:
//! - Returned pointers are valid for reads and writes of `layout.size()`
//!   bytes and aligned to `layout.align()` until deallocated.
//! - `deallocate` is only sound for a pointer previously returned by
//!   `allocate` on the same allocator with the same layout; double-free is
//!   undefined behavior.
//! - Zero-sized layouts succeed with a dangling, well-aligned pointer, and
//!   deallocating such a pointer is a no-op.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::AllocResult;

/// Raw memory provider over [`Layout`].
///
/// Out-of-memory is the sole runtime failure and is reported as
/// [`AllocError::Exhausted`](crate::AllocError::Exhausted); it propagates to
/// the caller and is never retried internally.
pub unsafe trait RawAllocator {
    /// Allocates uninitialized memory for the given layout.
    ///
    /// # Safety
    /// The returned memory is uninitialized and must be initialized before
    /// any typed read. The caller must eventually release it with
    /// [`deallocate`](Self::deallocate) using the same layout.
    unsafe fn allocate(&self, layout: Layout) -> AllocResult<NonNull<[u8]>>;

    /// Releases memory previously obtained from [`allocate`](Self::allocate).
    ///
    /// This is a no-throw operation.
    ///
    /// # Safety
    /// - `ptr` must have been returned by `allocate` on this allocator.
    /// - `layout` must match the original allocation exactly.
    /// - `ptr` must not be used after this call.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

// SAFETY: Forwarding preserves the inner allocator's contract; dereferencing
// `&A` adds no unsafe operations.
unsafe impl<A: RawAllocator + ?Sized> RawAllocator for &A {
    unsafe fn allocate(&self, layout: Layout) -> AllocResult<NonNull<[u8]>> {
        // SAFETY: same contract as (**self).allocate.
        unsafe { (**self).allocate(layout) }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: same contract as (**self).deallocate.
        unsafe { (**self).deallocate(ptr, layout) }
    }
}
