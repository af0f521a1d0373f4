//! Allocator capability layer for the filament containers
//!
//! This crate provides the memory-management primitives the filament
//! containers are built on:
//!
//! - [`RawAllocator`]: the opaque byte-level capability (allocate/deallocate
//!   over [`core::alloc::Layout`])
//! - [`SystemAllocator`]: the platform heap behind that trait
//! - [`TrackedAllocator`]: a counting wrapper used for leak accounting
//! - [`Allocator`]: the typed, rebindable handle exposing the four separable
//!   lifecycle steps (allocate / construct / destroy / deallocate)
//!
//! # Example
//!
//! ```
//! use filament_memory::Allocator;
//!
//! let alloc: Allocator<u64> = Allocator::default();
//! unsafe {
//!     let slot = alloc.allocate(1)?;
//!     alloc.construct(slot.as_ptr(), 42);
//!     assert_eq!(*slot.as_ptr(), 42);
//!     alloc.destroy(slot.as_ptr());
//!     alloc.deallocate(slot, 1);
//! }
//! # Ok::<(), filament_memory::AllocError>(())
//! ```
//!
//! # Features
//!
//! - `logging` (default): emit `tracing` events on allocation failure

#![warn(missing_docs)]

mod error;
mod raw;
mod system;
mod tracked;
mod typed;

pub use error::{AllocError, AllocResult};
pub use raw::RawAllocator;
pub use system::SystemAllocator;
pub use tracked::TrackedAllocator;
pub use typed::Allocator;
