//! The public singly linked list container

use core::fmt;
use core::mem;
use core::ptr::addr_of_mut;

use filament_memory::{AllocResult, RawAllocator, SystemAllocator};

use crate::base::ListBase;
use crate::cursor::CursorMut;
use crate::iter::{IntoIter, Iter, IterMut};
use crate::node::Link;

/// A singly linked list with a pluggable allocator capability.
///
/// All storage is obtained through the injected [`RawAllocator`], one node
/// per element. The list is front-biased: insertion, removal and growth all
/// happen at the head, and iteration runs front to back. There is no cached
/// length; [`len`](Self::len) walks the chain.
///
/// Operations that allocate return [`AllocResult`]; exhaustion of the
/// underlying allocator is the only runtime error and aborts the operation
/// without leaking nodes the list already owned (multi-step operations such
/// as [`assign`](Self::assign) may leave partial progress behind, see the
/// individual methods).
///
/// Not synchronized: wrap it externally for concurrent use.
///
/// # Example
///
/// ```
/// use filament_list::SList;
///
/// let mut list: SList<i32> = SList::new();
/// list.push_front(3)?;
/// list.push_front(2)?;
/// list.push_front(1)?;
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// # Ok::<(), filament_list::AllocError>(())
/// ```
pub struct SList<T, R: RawAllocator = SystemAllocator> {
    pub(crate) base: ListBase<T, R>,
}

impl<T, R: RawAllocator + Clone + Default> SList<T, R> {
    /// Creates an empty list using a default-constructed allocator.
    pub fn new() -> Self {
        Self::with_allocator(R::default())
    }
}

impl<T, R: RawAllocator + Clone + Default> Default for SList<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: RawAllocator + Clone> SList<T, R> {
    /// Creates an empty list over the given allocator capability.
    ///
    /// The capability must be cheaply clonable (stateless, or a shared
    /// handle): the list internally derives a second, element-typed handle
    /// from it.
    pub fn with_allocator(raw: R) -> Self {
        Self {
            base: ListBase::new(raw),
        }
    }

    /// Copies this list element by element.
    ///
    /// The copy is built by walking this list front to back and pushing each
    /// clone to the copy's front, so **the copy's order is the reverse of
    /// the source's**. This mirrors the container's front-biased building
    /// convention; callers wanting the source order can
    /// [`reverse`](Self::reverse) the copy.
    ///
    /// A failed allocation drops the partially built copy (releasing its
    /// nodes) and leaves `self` untouched.
    pub fn try_clone(&self) -> AllocResult<Self>
    where
        T: Clone,
    {
        let mut copy = Self::with_allocator(self.base.raw().clone());
        copy.extend_reversed(self)?;
        Ok(copy)
    }

    /// Replaces this list's contents with a copy of `source`'s.
    ///
    /// Same order-reversing behavior as [`try_clone`](Self::try_clone). The
    /// prior contents are released first; on allocation failure the list
    /// keeps whatever prefix of the copy was already built.
    pub fn assign_from(&mut self, source: &Self) -> AllocResult<()>
    where
        T: Clone,
    {
        self.clear();
        self.extend_reversed(source)
    }

    fn extend_reversed(&mut self, source: &Self) -> AllocResult<()>
    where
        T: Clone,
    {
        for value in source.iter() {
            self.push_front(value.clone())?;
        }
        Ok(())
    }
}

impl<T, R: RawAllocator> SList<T, R> {
    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base.head().is_none()
    }

    /// Returns the number of elements by walking the chain. O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns a reference to the first element.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: the head node is owned by this list and borrowed shared.
        self.base.head().map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns a mutable reference to the first element.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: exclusive borrow of the list.
        self.base
            .head()
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Returns the allocator capability this list was built over.
    pub fn allocator(&self) -> &R {
        self.base.raw()
    }

    /// Pushes an element to the front. O(1).
    pub fn push_front(&mut self, value: T) -> AllocResult<()> {
        self.emplace_front(|| value)?;
        Ok(())
    }

    /// Pushes an element constructed in place at the front.
    ///
    /// The closure runs only after node storage has been obtained, so a
    /// failed allocation never constructs the value. Returns a reference to
    /// the new element.
    pub fn emplace_front(&mut self, make: impl FnOnce() -> T) -> AllocResult<&mut T> {
        let node = self.base.create_node_with(make)?;

        // SAFETY: node is fresh and takes ownership of the current chain.
        unsafe {
            (*node.as_ptr()).next = self.base.take_head();
        }
        self.base.set_head(Some(node));

        // SAFETY: node is the live head of this exclusively borrowed list.
        Ok(unsafe { &mut (*node.as_ptr()).value })
    }

    /// Removes and returns the first element, or `None` if the list is
    /// empty. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.base.take_head()?;

        // SAFETY: node was the exclusively owned head; its successor becomes
        // the new head before the node's storage is released.
        unsafe {
            let next = (*node.as_ptr()).take_next();
            self.base.set_head(next);
            Some(self.base.take_node(node))
        }
    }

    /// Replaces the contents with `count` copies of `value`.
    ///
    /// Prior contents are released first. On allocation failure the list
    /// keeps the copies pushed so far.
    pub fn assign(&mut self, count: usize, value: &T) -> AllocResult<()>
    where
        T: Clone,
    {
        self.clear();
        for _ in 0..count {
            self.push_front(value.clone())?;
        }
        Ok(())
    }

    /// Grows or shrinks the list to exactly `count` elements.
    ///
    /// Growth pushes copies of `value` at the front; shrinking pops from the
    /// front, which removes the most recently pushed elements first. The
    /// current length is determined by an O(n) scan.
    pub fn resize(&mut self, count: usize, value: &T) -> AllocResult<()>
    where
        T: Clone,
    {
        let len = self.len();
        if len < count {
            for _ in len..count {
                self.push_front(value.clone())?;
            }
        } else {
            for _ in count..len {
                self.pop_front();
            }
        }
        Ok(())
    }

    /// Removes every element. Idempotent.
    pub fn clear(&mut self) {
        self.base.clear();
    }

    /// Exchanges the contents and allocators of two lists. O(1); no node is
    /// touched.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.base, &mut other.base);
    }

    /// Merges `other` into `self`, leaving `other` empty.
    ///
    /// Both lists must already be sorted ascending; merging unsorted input
    /// (not validated) produces unspecified ordering. For equal elements the
    /// one originating from `other` ends up first. Nodes move without being
    /// copied, so `other`'s allocator must be interchangeable with this
    /// list's. O(len of both).
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        // Walk a raw pointer to the link slot under inspection so nodes can
        // be spliced in front of the slot's target in place.
        let mut slot: *mut Link<T> = self.base.head_mut();

        // SAFETY: slot always points at a live link slot of self (the head,
        // then successive `next` fields); every node moved out of `other` is
        // detached from it before being linked into self.
        unsafe {
            while let Some(incoming) = other.base.head() {
                match *slot {
                    None => {
                        // self is exhausted: adopt the rest of other's chain.
                        *slot = other.base.take_head();
                        break;
                    }
                    Some(cur) => {
                        if (*cur.as_ptr()).value < (*incoming.as_ptr()).value {
                            slot = addr_of_mut!((*cur.as_ptr()).next);
                        } else {
                            other.base.set_head((*incoming.as_ptr()).take_next());
                            (*incoming.as_ptr()).next = Some(cur);
                            *slot = Some(incoming);
                            slot = addr_of_mut!((*incoming.as_ptr()).next);
                        }
                    }
                }
            }
        }
    }

    /// Removes every element equal to `value`, preserving the relative order
    /// of the survivors. Returns the number removed; removing an absent
    /// value is a no-op. O(n).
    pub fn remove(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_if(|v| v == value)
    }

    /// Removes every element satisfying the predicate, preserving the
    /// relative order of the survivors. Returns the number removed. Single
    /// forward pass, O(n).
    pub fn remove_if(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let mut removed = 0;
        let mut slot: *mut Link<T> = self.base.head_mut();

        // SAFETY: slot always points at a live link slot of self; a matching
        // node is unlinked (its successor moves into the slot) before being
        // destroyed.
        unsafe {
            while let Some(cur) = *slot {
                if pred(&(*cur.as_ptr()).value) {
                    *slot = (*cur.as_ptr()).take_next();
                    self.base.destroy_node(cur);
                    removed += 1;
                } else {
                    slot = addr_of_mut!((*cur.as_ptr()).next);
                }
            }
        }

        removed
    }

    /// Reverses the list in place. O(n) time, O(1) extra space.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut cur = self.base.take_head();

        // SAFETY: each node is detached from the remaining chain and pushed
        // onto the reversed chain exactly once.
        unsafe {
            while let Some(node) = cur {
                cur = (*node.as_ptr()).take_next();
                (*node.as_ptr()).next = reversed;
                reversed = Some(node);
            }
        }

        self.base.set_head(reversed);
    }

    /// Removes elements equal to their immediate predecessor, so only
    /// consecutive duplicates are dropped: on a sorted list this removes
    /// all duplicates, on an unsorted one the non-adjacent survive. Returns
    /// the number removed. O(n).
    pub fn unique(&mut self) -> usize
    where
        T: PartialEq,
    {
        let mut removed = 0;
        let Some(mut cur) = self.base.head() else {
            return 0;
        };

        // SAFETY: cur always designates a live node; a duplicate successor
        // is unlinked before destruction.
        unsafe {
            while let Some(next) = (*cur.as_ptr()).next {
                if (*next.as_ptr()).value == (*cur.as_ptr()).value {
                    (*cur.as_ptr()).next = (*next.as_ptr()).take_next();
                    self.base.destroy_node(next);
                    removed += 1;
                } else {
                    cur = next;
                }
            }
        }

        removed
    }

    /// Returns a forward iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.base.head())
    }

    /// Returns a forward iterator yielding mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.base.head())
    }

    /// Returns a mutable cursor positioned at the front of the list.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, R> {
        CursorMut::new(self)
    }
}

impl<T, R: RawAllocator> IntoIterator for SList<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T, R>;

    fn into_iter(self) -> IntoIter<T, R> {
        IntoIter { list: self }
    }
}

impl<'a, T, R: RawAllocator> IntoIterator for &'a SList<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, R: RawAllocator> IntoIterator for &'a mut SList<T, R> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: fmt::Debug, R: RawAllocator> fmt::Debug for SList<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, R: RawAllocator> PartialEq for SList<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq, R: RawAllocator> Eq for SList<T, R> {}
