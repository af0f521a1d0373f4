//! Chain ownership and node lifecycle
//!
//! [`ListBase`] owns the head of the node chain together with the allocator
//! handles, and packages the four-step allocator protocol into whole-node
//! operations: create (allocate + construct), destroy (destroy + deallocate),
//! and take (move the value out, then release storage). Chain topology, who
//! links to whom, is deliberately not its concern; the container layer does
//! all pointer surgery and calls down here only to make or unmake individual
//! nodes.
//!
//! # Safety
//!
//! Every node handed out by [`create_node`](ListBase::create_node) is fully
//! initialized (`next` starts as `None`). Node pointers passed back into
//! [`destroy_node`](ListBase::destroy_node) / [`take_node`](ListBase::take_node)
//! must originate from this base's allocator chain and must already be
//! unlinked; the base never follows `next` except in [`clear`](ListBase::clear).

use core::ptr::{addr_of_mut, NonNull};

use filament_memory::{AllocResult, Allocator, RawAllocator};

use crate::node::{Link, Node};

/// Owns the head reference and the allocator pair.
///
/// Two typed handles are kept: one for node storage and a second, rebound
/// from it, for the element type, so value construction and node allocation
/// can be accounted separately by allocator designs that track them at
/// different granularity.
pub(crate) struct ListBase<T, R: RawAllocator> {
    head: Link<T>,
    nodes: Allocator<Node<T>, R>,
    values: Allocator<T, R>,
}

impl<T, R: RawAllocator + Clone> ListBase<T, R> {
    /// Creates an empty base over the given raw capability.
    pub(crate) fn new(raw: R) -> Self {
        let nodes: Allocator<Node<T>, R> = Allocator::new(raw);
        let values = nodes.rebind();
        Self {
            head: None,
            nodes,
            values,
        }
    }
}

impl<T, R: RawAllocator> ListBase<T, R> {
    /// Returns the first link of the chain.
    #[inline]
    pub(crate) fn head(&self) -> Link<T> {
        self.head
    }

    /// Returns a mutable slot for the first link.
    #[inline]
    pub(crate) fn head_mut(&mut self) -> &mut Link<T> {
        &mut self.head
    }

    /// Detaches the whole chain, leaving this base empty.
    #[inline]
    pub(crate) fn take_head(&mut self) -> Link<T> {
        self.head.take()
    }

    /// Replaces the first link.
    #[inline]
    pub(crate) fn set_head(&mut self, link: Link<T>) {
        self.head = link;
    }

    /// Returns the raw allocator capability.
    #[inline]
    pub(crate) fn raw(&self) -> &R {
        self.nodes.raw()
    }

    /// Obtains uninitialized storage for one node. No construction happens.
    pub(crate) fn allocate_node(&self) -> AllocResult<NonNull<Node<T>>> {
        // SAFETY: storage is initialized by the caller before any typed read.
        unsafe { self.nodes.allocate(1) }
    }

    /// Allocates a node and constructs `value` into it.
    ///
    /// The new node's `next` link starts as `None`; linking it into a chain
    /// is the caller's responsibility.
    pub(crate) fn create_node(&self, value: T) -> AllocResult<NonNull<Node<T>>> {
        self.create_node_with(|| value)
    }

    /// Like [`create_node`](Self::create_node), but the value is produced
    /// only after node storage has been obtained.
    pub(crate) fn create_node_with(
        &self,
        make: impl FnOnce() -> T,
    ) -> AllocResult<NonNull<Node<T>>> {
        let node = self.allocate_node()?;
        let ptr = node.as_ptr();

        // SAFETY: ptr is fresh storage for one Node<T>; the value field is
        // constructed through the element allocator and the link is
        // initialized, so the node is fully live afterwards.
        unsafe {
            self.values.construct(addr_of_mut!((*ptr).value), make());
            addr_of_mut!((*ptr).next).write(None);
        }

        Ok(node)
    }

    /// Destroys the value and releases the node storage.
    ///
    /// # Safety
    /// `node` must have been produced by this base's allocator, hold a live
    /// value, and be unlinked from any chain.
    pub(crate) unsafe fn destroy_node(&self, node: NonNull<Node<T>>) {
        let ptr = node.as_ptr();
        // SAFETY: the value is live (caller contract); storage matches an
        // allocate(1) from the node allocator.
        unsafe {
            self.values.destroy(addr_of_mut!((*ptr).value));
            self.nodes.deallocate(node, 1);
        }
    }

    /// Moves the value out of the node and releases its storage.
    ///
    /// # Safety
    /// Same contract as [`destroy_node`](Self::destroy_node); the value's
    /// ownership transfers to the caller instead of being dropped.
    pub(crate) unsafe fn take_node(&self, node: NonNull<Node<T>>) -> T {
        let ptr = node.as_ptr();
        // SAFETY: the value is live and is moved out exactly once; the
        // storage is then released without running its destructor.
        unsafe {
            let value = addr_of_mut!((*ptr).value).read();
            self.nodes.deallocate(node, 1);
            value
        }
    }

    /// Destroys every node reachable from the head, leaving the base empty.
    ///
    /// Idempotent: clearing an empty base is a no-op. Iterative, so deep
    /// chains cannot overflow the stack through recursive drops.
    pub(crate) fn clear(&mut self) {
        let mut cur = self.take_head();
        #[cfg(feature = "logging")]
        let mut destroyed = 0usize;

        while let Some(node) = cur {
            // SAFETY: node is owned by this chain and is detached from it
            // before destruction.
            unsafe {
                cur = (*node.as_ptr()).take_next();
                self.destroy_node(node);
            }
            #[cfg(feature = "logging")]
            {
                destroyed += 1;
            }
        }

        #[cfg(feature = "logging")]
        if destroyed > 0 {
            tracing::trace!(nodes = destroyed, "chain teardown");
        }
    }
}

impl<T, R: RawAllocator> Drop for ListBase<T, R> {
    fn drop(&mut self) {
        self.clear();
    }
}

// SAFETY: the base exclusively owns its nodes and allocator handles; sending
// it moves T values and R with it, so the usual auto-trait bounds apply. The
// impls are explicit only because NonNull suppresses the derivation.
unsafe impl<T: Send, R: RawAllocator + Send> Send for ListBase<T, R> {}
// SAFETY: shared access exposes &T and &R only.
unsafe impl<T: Sync, R: RawAllocator + Sync> Sync for ListBase<T, R> {}
