//! Integration tests for the list container
//!
//! Exercises the public surface end to end, including the properties that
//! define this design: front-biased building, the order-reversing copy, the
//! merge tie-break, whole-chain splicing without node movement, and balanced
//! allocation accounting.

use std::cmp::Ordering;

use pretty_assertions::assert_eq;

use filament_list::{SList, SystemAllocator, TrackedAllocator};

type TrackedList<'a, T> = SList<T, &'a TrackedAllocator<SystemAllocator>>;

/// Builds a list whose front-to-back order equals `values`.
fn list_of<T: Clone>(values: &[T]) -> SList<T> {
    let mut list = SList::new();
    for v in values.iter().rev() {
        list.push_front(v.clone()).unwrap();
    }
    list
}

fn contents<T: Clone, R: filament_list::RawAllocator>(list: &SList<T, R>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn push_front_yields_reverse_push_order() {
    let mut list: SList<i32> = SList::new();
    for v in [10, 20, 30] {
        list.push_front(v).unwrap();
    }
    assert_eq!(contents(&list), vec![30, 20, 10]);
}

#[test]
fn empty_tracks_net_pushes() {
    let mut list: SList<u8> = SList::new();
    assert!(list.is_empty());
    list.push_front(1).unwrap();
    assert!(!list.is_empty());
    assert_eq!(list.pop_front(), Some(1));
    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None);
}

#[test]
fn copy_reverses_order() {
    let original = list_of(&['a', 'b', 'c']);

    let copy = original.try_clone().unwrap();
    assert_eq!(contents(&copy), vec!['c', 'b', 'a']);
    // The source is untouched.
    assert_eq!(contents(&original), vec!['a', 'b', 'c']);

    let mut assigned: SList<char> = list_of(&['z']);
    assigned.assign_from(&original).unwrap();
    assert_eq!(contents(&assigned), vec!['c', 'b', 'a']);

    // Reversing the copy recovers the source order.
    let mut copy = copy;
    copy.reverse();
    assert_eq!(contents(&copy), contents(&original));
}

#[test]
fn assign_fills_with_copies() {
    let mut list = list_of(&[9, 9]);
    list.assign(3, &7).unwrap();
    assert_eq!(contents(&list), vec![7, 7, 7]);

    list.assign(0, &7).unwrap();
    assert!(list.is_empty());
}

#[test]
fn resize_grows_at_front_and_shrinks_at_front() {
    // Front-to-back [1, 2]; growth fills at the front.
    let mut list = list_of(&[1, 2]);
    list.resize(5, &0).unwrap();
    assert_eq!(contents(&list), vec![0, 0, 0, 1, 2]);

    // Pushing 1, 2, 3 gives front-to-back [3, 2, 1]; shrinking pops the most
    // recently pushed elements first, leaving the earliest push.
    let mut list: SList<i32> = SList::new();
    for v in [1, 2, 3] {
        list.push_front(v).unwrap();
    }
    list.resize(1, &0).unwrap();
    assert_eq!(contents(&list), vec![1]);

    // Resizing to the current length is a no-op.
    list.resize(1, &0).unwrap();
    assert_eq!(contents(&list), vec![1]);
}

#[test]
fn swap_exchanges_contents_without_touching_nodes() {
    let mut a = list_of(&[1, 2]);
    let mut b = list_of(&[3]);

    let a_addrs: Vec<*const i32> = a.iter().map(|v| v as *const i32).collect();

    a.swap(&mut b);

    assert_eq!(contents(&a), vec![3]);
    assert_eq!(contents(&b), vec![1, 2]);

    // The nodes formerly owned by `a` now sit in `b`, at the same addresses.
    let b_addrs: Vec<*const i32> = b.iter().map(|v| v as *const i32).collect();
    assert_eq!(a_addrs, b_addrs);
}

/// Ordered by key alone; `origin` is payload, invisible to comparisons.
#[derive(Debug, Clone)]
struct Keyed {
    key: i32,
    origin: &'static str,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

fn keyed(origin: &'static str, keys: &[i32]) -> SList<Keyed> {
    let mut list = SList::new();
    for &key in keys.iter().rev() {
        list.push_front(Keyed { key, origin }).unwrap();
    }
    list
}

#[test]
fn merge_interleaves_sorted_input() {
    let mut this = keyed("this", &[1, 3, 5]);
    let mut other = keyed("other", &[2, 3, 4]);

    this.merge(&mut other);
    assert!(other.is_empty());

    let keys: Vec<i32> = this.iter().map(|k| k.key).collect();
    assert_eq!(keys, vec![1, 2, 3, 3, 4, 5]);

    // Tie-break: for equal keys the element that came from `other` precedes
    // the one that was already here.
    let origins: Vec<&str> = this
        .iter()
        .filter(|k| k.key == 3)
        .map(|k| k.origin)
        .collect();
    assert_eq!(origins, vec!["other", "this"]);
}

#[test]
fn merge_with_empty_lists() {
    let mut this = keyed("this", &[1, 2]);
    let mut other = keyed("other", &[]);
    this.merge(&mut other);
    assert_eq!(this.len(), 2);

    let mut empty = keyed("this", &[]);
    let mut full = keyed("other", &[1, 2]);
    empty.merge(&mut full);
    assert!(full.is_empty());
    let keys: Vec<i32> = empty.iter().map(|k| k.key).collect();
    assert_eq!(keys, vec![1, 2]);
}

#[test]
fn splice_after_moves_whole_chain() {
    let mut dst = list_of(&['a', 'b', 'c']);
    let mut src = list_of(&['x', 'y']);

    let src_addrs: Vec<*const char> = src.iter().map(|v| v as *const char).collect();

    {
        let mut cursor = dst.cursor_front_mut();
        assert_eq!(cursor.current(), Some(&mut 'a'));
        cursor.splice_after(&mut src);
    }

    assert!(src.is_empty());
    assert_eq!(contents(&dst), vec!['a', 'x', 'y', 'b', 'c']);

    // The spliced elements kept their node storage.
    let dst_addrs: Vec<*const char> = dst.iter().map(|v| v as *const char).collect();
    assert_eq!(&dst_addrs[1..3], &src_addrs[..]);
}

#[test]
fn splice_after_detached_cursor_prepends() {
    let mut dst: SList<i32> = SList::new();
    let mut src = list_of(&[1, 2]);

    dst.cursor_front_mut().splice_after(&mut src);
    assert!(src.is_empty());
    assert_eq!(contents(&dst), vec![1, 2]);
}

#[test]
fn cursor_insert_and_remove_after() {
    let mut list = list_of(&[1, 3]);

    {
        let mut cursor = list.cursor_front_mut();
        cursor.insert_after(2).unwrap();
        assert_eq!(cursor.peek_next(), Some(&mut 2));
    }
    assert_eq!(contents(&list), vec![1, 2, 3]);

    {
        let mut cursor = list.cursor_front_mut();
        assert!(cursor.move_next());
        assert_eq!(cursor.remove_after(), Some(3));
        assert_eq!(cursor.remove_after(), None);
    }
    assert_eq!(contents(&list), vec![1, 2]);

    // Detached cursor acts at the front.
    {
        let mut cursor = list.cursor_front_mut();
        while cursor.move_next() {}
        assert_eq!(cursor.remove_after(), Some(1));
        cursor.insert_after(0).unwrap();
    }
    assert_eq!(contents(&list), vec![0, 2]);
}

#[test]
fn remove_and_unique_per_contract() {
    let mut list = list_of(&[1, 2, 1, 3, 1]);
    assert_eq!(list.remove(&1), 3);
    assert_eq!(contents(&list), vec![2, 3]);
    assert_eq!(list.remove(&9), 0);

    let mut sorted = list_of(&[1, 1, 2, 2, 2, 3]);
    assert_eq!(sorted.unique(), 3);
    assert_eq!(contents(&sorted), vec![1, 2, 3]);

    let mut unsorted = list_of(&[1, 2, 1]);
    assert_eq!(unsorted.unique(), 0);
    assert_eq!(contents(&unsorted), vec![1, 2, 1]);
}

#[test]
fn iter_mut_and_front_mut_allow_in_place_updates() {
    let mut list = list_of(&[1, 2, 3]);
    for v in list.iter_mut() {
        *v *= 10;
    }
    assert_eq!(contents(&list), vec![10, 20, 30]);

    if let Some(front) = list.front_mut() {
        *front += 1;
    }
    assert_eq!(list.front(), Some(&11));
}

#[test]
fn into_iter_drains_front_to_back() {
    let list = list_of(&[1, 2, 3]);
    let drained: Vec<i32> = list.into_iter().collect();
    assert_eq!(drained, vec![1, 2, 3]);
}

#[test]
fn allocation_accounting_balances() {
    let tracked = TrackedAllocator::new(SystemAllocator::new());

    {
        let mut list: TrackedList<'_, u64> = SList::with_allocator(&tracked);
        for v in 0..100 {
            list.push_front(v).unwrap();
        }
        assert_eq!(tracked.allocation_count(), 100);

        // A mix of releasing paths: pop, predicate removal, dedup, clear.
        list.pop_front();
        list.remove_if(|v| v % 3 == 0);
        list.clear();
    }

    assert_eq!(tracked.allocation_count(), tracked.deallocation_count());
    assert!(!tracked.has_leaks());
    assert_eq!(tracked.live_bytes(), 0);
}

#[test]
fn moved_nodes_are_released_by_the_destination() {
    let tracked = TrackedAllocator::new(SystemAllocator::new());

    {
        let mut a: TrackedList<'_, i32> = SList::with_allocator(&tracked);
        let mut b: TrackedList<'_, i32> = SList::with_allocator(&tracked);
        for v in [5, 3, 1] {
            a.push_front(v).unwrap();
        }
        for v in [6, 4, 2] {
            b.push_front(v).unwrap();
        }

        a.merge(&mut b);
        drop(b);

        let merged: Vec<i32> = a.iter().copied().collect();
        assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
    }

    assert!(!tracked.has_leaks());
}

#[test]
fn partially_consumed_into_iter_releases_the_rest() {
    let tracked = TrackedAllocator::new(SystemAllocator::new());

    {
        let mut list: TrackedList<'_, u32> = SList::with_allocator(&tracked);
        for v in 0..10 {
            list.push_front(v).unwrap();
        }

        let mut iter = list.into_iter();
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        // The remaining eight nodes go down with the iterator.
    }

    assert!(!tracked.has_leaks());
}
