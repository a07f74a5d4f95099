//! Allocation-aware bookkeeping collections for manycore runtimes.
//!
//! This crate provides the linked-list layer used by runtime services that
//! track open-ended sets of records: pending application placements, queues
//! of requests awaiting a resource, rosters of registered entities. The key
//! design decision is to separate storage from structure:
//!
//! ```text
//! Arena (slab)   - owns the payloads, hands out stable keys
//! List           - coordinates keys, never owns data
//! OwnedList      - bundles the two when nothing shares the pool
//! ```
//!
//! Benefits:
//! - **Stable keys**: remove from the middle without invalidating other keys
//! - **No allocation after startup**: the arena is sized once, up front
//! - **O(1) unlink**: internal links make removal position-independent
//! - **Explicit exhaustion**: a full arena returns the rejected value
//!   instead of aborting, so callers can retry or shed load
//!
//! # Quick Start
//!
//! ```
//! use mosaic_collections::OwnedList;
//!
//! let mut queue: OwnedList<u64> = OwnedList::with_capacity(100);
//!
//! let key = queue.try_push_back(42).unwrap();
//! assert_eq!(queue.len(), 1);
//!
//! // O(1) removal from anywhere, payload handed back
//! assert_eq!(queue.remove(key), Some(42));
//! ```
//!
//! # Ownership at teardown
//!
//! Two bulk teardown operations cover the two ownership regimes:
//!
//! | Operation | Nodes | Payloads | Use when |
//! |-----------|-------|----------|----------|
//! | [`List::clear`] | released | dropped | the list solely owns its payloads |
//! | [`List::drain`] | released | yielded to caller | payload ownership continues elsewhere |
//!
//! The same pair exists on [`OwnedList`]. Picking the wrong teardown is a
//! compile-visible decision here (drain's items must go somewhere), not a
//! naming convention.
//!
//! # Shared storage
//!
//! Several lists can coordinate keys into one [`Arena`] pool. All
//! operations on a list must use the storage it was built against, and keys
//! must only be passed back to the list that returned them; the crate
//! documents rather than checks this discipline (same as `slab`).
//!
//! # Feature Flags
//!
//! - `slab` - [`Storage`] impl for `slab::Slab`, for growable pools with
//!   infallible insertion

#![warn(missing_docs)]

pub mod key;
pub mod list;
pub mod owned;
pub mod storage;

pub use key::Key;
pub use list::{Drain, Iter, Keys, List, ListArena, ListNode};
pub use owned::OwnedList;
pub use storage::{Arena, BoundedStorage, Full, Storage, UnboundedStorage};

#[cfg(feature = "slab")]
pub use list::SlabListStorage;
