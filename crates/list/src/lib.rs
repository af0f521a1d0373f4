//! Singly linked list over a pluggable allocator capability
//!
//! [`SList`] is a front-biased, forward-only linked container: every element
//! lives in its own node, every node comes from an injected
//! [`RawAllocator`], and all structural operations are expressed as
//! ownership transfer of node links. On top of the basic push/pop surface it
//! carries the whole-list algorithms: [`merge`](SList::merge),
//! [`reverse`](SList::reverse), [`unique`](SList::unique),
//! [`remove_if`](SList::remove_if), and splicing through a
//! [`CursorMut`].
//!
//! # Example
//!
//! ```
//! use filament_list::SList;
//!
//! let mut evens: SList<i32> = SList::new();
//! let mut odds: SList<i32> = SList::new();
//! for v in [6, 4, 2] {
//!     evens.push_front(v)?;
//! }
//! for v in [5, 3, 1] {
//!     odds.push_front(v)?;
//! }
//!
//! evens.merge(&mut odds);
//! assert!(odds.is_empty());
//! assert_eq!(evens.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);
//! # Ok::<(), filament_list::AllocError>(())
//! ```
//!
//! # Features
//!
//! - `logging` (default): emit `tracing` events on chain teardown and
//!   allocation failure

#![warn(missing_docs)]

mod base;
mod cursor;
mod iter;
mod list;
mod node;

pub use cursor::CursorMut;
pub use iter::{IntoIter, Iter, IterMut};
pub use list::SList;

// The allocator surface callers need to name in signatures.
pub use filament_memory::{AllocError, AllocResult, RawAllocator, SystemAllocator, TrackedAllocator};
