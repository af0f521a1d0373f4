//! Tracked allocator implementation
//!
//! Wraps another [`RawAllocator`] and counts every operation that passes
//! through it. The containers' test-suites lean on this to prove their
//! no-leak guarantees: after a container is dropped, allocation and
//! deallocation counts must balance.
//!
//! Statistics use relaxed atomics; they are counters, not synchronization.

use core::alloc::Layout;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::AllocResult;
use crate::raw::RawAllocator;

/// A wrapper allocator that records allocation statistics.
///
/// Transparent with respect to the underlying allocator's behavior: every
/// request is forwarded unchanged, and only the counters are updated.
/// Containers use it by reference (`&TrackedAllocator<A>` is itself a
/// [`RawAllocator`]), so a single instance can observe a whole container's
/// lifetime from the outside.
#[derive(Debug, Default)]
pub struct TrackedAllocator<A> {
    inner: A,
    allocations: AtomicUsize,
    deallocations: AtomicUsize,
    live_bytes: AtomicUsize,
    peak_bytes: AtomicUsize,
    failures: AtomicUsize,
}

impl<A> TrackedAllocator<A> {
    /// Creates a tracker around the given allocator.
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            allocations: AtomicUsize::new(0),
            deallocations: AtomicUsize::new(0),
            live_bytes: AtomicUsize::new(0),
            peak_bytes: AtomicUsize::new(0),
            failures: AtomicUsize::new(0),
        }
    }

    /// Returns a reference to the wrapped allocator.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Consumes the tracker and returns the wrapped allocator.
    pub fn into_inner(self) -> A {
        self.inner
    }

    /// Total number of successful allocations.
    pub fn allocation_count(&self) -> usize {
        self.allocations.load(Ordering::Relaxed)
    }

    /// Total number of deallocations.
    pub fn deallocation_count(&self) -> usize {
        self.deallocations.load(Ordering::Relaxed)
    }

    /// Bytes currently allocated and not yet released.
    pub fn live_bytes(&self) -> usize {
        self.live_bytes.load(Ordering::Relaxed)
    }

    /// High-water mark of live bytes.
    pub fn peak_bytes(&self) -> usize {
        self.peak_bytes.load(Ordering::Relaxed)
    }

    /// Number of failed allocation attempts.
    pub fn failed_allocations(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }

    /// Returns `true` if more allocations than deallocations were observed.
    pub fn has_leaks(&self) -> bool {
        self.allocation_count() > self.deallocation_count()
    }

    fn record_allocation(&self, bytes: usize) {
        self.allocations.fetch_add(1, Ordering::Relaxed);
        let live = self.live_bytes.fetch_add(bytes, Ordering::Relaxed) + bytes;
        self.peak_bytes.fetch_max(live, Ordering::Relaxed);
    }

    fn record_deallocation(&self, bytes: usize) {
        self.deallocations.fetch_add(1, Ordering::Relaxed);
        self.live_bytes.fetch_sub(bytes, Ordering::Relaxed);
    }
}

// SAFETY: All operations forward to the inner allocator with unchanged
// arguments; counter updates have no effect on memory validity.
unsafe impl<A: RawAllocator> RawAllocator for TrackedAllocator<A> {
    unsafe fn allocate(&self, layout: Layout) -> AllocResult<NonNull<[u8]>> {
        // SAFETY: same contract as inner.allocate.
        match unsafe { self.inner.allocate(layout) } {
            Ok(ptr) => {
                self.record_allocation(layout.size());
                Ok(ptr)
            }
            Err(err) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                Err(err)
            }
        }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: ptr was produced by self.allocate, which forwards to inner,
        // so releasing through inner with the same layout is sound.
        unsafe { self.inner.deallocate(ptr, layout) };
        self.record_deallocation(layout.size());
    }
}
