//! Positioned mutation of the chain
//!
//! [`CursorMut`] designates a node inside a mutably borrowed list and allows
//! inserting, removing and splicing *after* that position, the operations a
//! forward-only chain supports in O(1). Because the cursor borrows its list,
//! a position can never outlive the list or be replayed against a different
//! one; the classic misuse class of "iterator from a foreign container" does
//! not compile.

use core::ptr::addr_of_mut;

use filament_memory::{AllocResult, RawAllocator};

use crate::list::SList;
use crate::node::Link;

/// A mutable cursor over a list.
///
/// The cursor is either positioned *on* a node, or detached (`current()`
/// returns `None`), the state it starts in on an empty list and ends in
/// after advancing past the last node. A detached cursor still designates a
/// position: the front of the list, so `insert_after`, `remove_after` and
/// `splice_after` act there.
pub struct CursorMut<'a, T, R: RawAllocator> {
    current: Link<T>,
    list: &'a mut SList<T, R>,
}

impl<'a, T, R: RawAllocator> CursorMut<'a, T, R> {
    pub(crate) fn new(list: &'a mut SList<T, R>) -> Self {
        let current = list.base.head();
        Self { current, list }
    }

    /// Returns the element the cursor is positioned on.
    pub fn current(&mut self) -> Option<&mut T> {
        // SAFETY: current is a node of the exclusively borrowed list.
        self.current
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Advances to the next node. Returns `true` if the cursor is positioned
    /// on a node afterwards.
    pub fn move_next(&mut self) -> bool {
        if let Some(node) = self.current {
            // SAFETY: node belongs to the borrowed list.
            self.current = unsafe { (*node.as_ptr()).next };
        }
        self.current.is_some()
    }

    /// Returns the element after the cursor's position without advancing.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        // SAFETY: both current and its successor belong to the borrowed list.
        unsafe {
            let next = match self.current {
                Some(node) => (*node.as_ptr()).next,
                None => self.list.base.head(),
            };
            next.map(|node| &mut (*node.as_ptr()).value)
        }
    }

    /// Slot holding the link that follows the cursor's position: the
    /// current node's `next`, or the list head when detached.
    fn after_slot(&mut self) -> *mut Link<T> {
        match self.current {
            // SAFETY: current is a live node of the borrowed list.
            Some(node) => unsafe { addr_of_mut!((*node.as_ptr()).next) },
            None => self.list.base.head_mut(),
        }
    }

    /// Inserts a new element immediately after the cursor's position.
    ///
    /// On a detached cursor this prepends to the list.
    pub fn insert_after(&mut self, value: T) -> AllocResult<()> {
        let node = self.list.base.create_node(value)?;
        let slot = self.after_slot();

        // SAFETY: slot is a live link slot of the borrowed list; the new
        // node takes over whatever chain hung off it.
        unsafe {
            (*node.as_ptr()).next = (*slot).take();
            *slot = Some(node);
        }
        Ok(())
    }

    /// Removes and returns the element immediately after the cursor's
    /// position. On a detached cursor this pops the front.
    pub fn remove_after(&mut self) -> Option<T> {
        let slot = self.after_slot();

        // SAFETY: slot is a live link slot; the removed node is detached
        // from the chain before its storage is released.
        unsafe {
            let node = (*slot).take()?;
            *slot = (*node.as_ptr()).take_next();
            Some(self.list.base.take_node(node))
        }
    }

    /// Moves the entire contents of `other` into this cursor's list,
    /// immediately after the cursor's position. `other` is left empty.
    ///
    /// No nodes are copied or reallocated, so the nodes must have come from
    /// an allocator interchangeable with this list's (they will eventually be
    /// released through it). Walking `other` to find its tail makes this
    /// O(len of `other`); the node relinking itself is O(1).
    pub fn splice_after(&mut self, other: &mut SList<T, R>) {
        let Some(other_head) = other.base.take_head() else {
            return;
        };

        // SAFETY: other_head and every node after it were exclusively owned
        // by `other` and have just been detached from it; after relinking
        // they are reachable only from this list.
        unsafe {
            let mut tail = other_head;
            while let Some(next) = (*tail.as_ptr()).next {
                tail = next;
            }

            let slot = self.after_slot();
            (*tail.as_ptr()).next = (*slot).take();
            *slot = Some(other_head);
        }
    }
}
