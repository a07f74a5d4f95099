//! Storage traits and the fixed-capacity [`Arena`].
//!
//! Storage provides insert/remove/get with stable keys: a key stays valid
//! until the slot it names is explicitly removed. Node-based structures
//! ([`List`](crate::List)) hold keys instead of pointers, so one storage
//! pool can back several structures and removal never shifts other entries.

use crate::Key;

/// Slab-like storage with stable keys.
///
/// # Requirements
///
/// - **Stable keys**: a key remains valid until explicitly removed
/// - **O(1)** remove and get
/// - **Slot reuse**: removed slots may be reused by later insertions
///
/// Insertion lives on [`BoundedStorage`] (fallible) and
/// [`UnboundedStorage`] (infallible), since fixed-capacity and growable
/// backends cannot share a single signature.
pub trait Storage<T> {
    /// Key type handed out by this storage.
    type Key: Key;

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns `true` if `key` names an occupied slot.
    #[inline]
    fn contains(&self, key: Self::Key) -> bool {
        self.get(key).is_some()
    }
}

/// Fixed-capacity storage: insertion fails when every slot is occupied.
pub trait BoundedStorage<T>: Storage<T> {
    /// Inserts a value, returning its key.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` when no slot is free, handing the value
    /// back to the caller.
    fn try_insert(&mut self, value: T) -> Result<Self::Key, Full<T>>;
}

/// Growable storage: insertion always succeeds.
pub trait UnboundedStorage<T>: Storage<T> {
    /// Inserts a value, returning its key.
    fn insert(&mut self, value: T) -> Self::Key;
}

/// Error returned when fixed-capacity storage has no free slot.
///
/// Carries the rejected value so the caller can retry or drop it without
/// losing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for Full<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "storage is full")
    }
}

impl<T: core::fmt::Debug> std::error::Error for Full<T> {}

// =============================================================================
// Arena - fixed capacity, free-chain slot reuse
// =============================================================================

enum Slot<T, K> {
    Vacant { next_free: K },
    Occupied(T),
}

/// Fixed-capacity storage with a vacant free-chain.
///
/// All slots are allocated up front; insertion and removal after
/// construction never touch the allocator. Freed slots are reused in LIFO
/// order.
///
/// # Example
///
/// ```
/// use mosaic_collections::{Arena, BoundedStorage, Storage};
///
/// let mut arena: Arena<u64> = Arena::with_capacity(8);
///
/// let key = arena.try_insert(42).unwrap();
/// assert_eq!(arena.get(key), Some(&42));
/// assert_eq!(arena.remove(key), Some(42));
/// assert_eq!(arena.get(key), None);
/// ```
pub struct Arena<T, K: Key = u32> {
    slots: Vec<Slot<T, K>>,
    next_free: K,
    len: usize,
}

impl<T, K: Key> Arena<T, K> {
    /// Creates an arena with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or does not fit below the key type's
    /// sentinel value.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        assert!(
            capacity < K::NONE.as_usize(),
            "capacity exceeds key type maximum"
        );

        // Chain every slot into the free list: 0 -> 1 -> ... -> NONE
        let mut slots = Vec::with_capacity(capacity);
        for i in 1..capacity {
            slots.push(Slot::Vacant {
                next_free: K::from_usize(i),
            });
        }
        slots.push(Slot::Vacant { next_free: K::NONE });

        Self {
            slots,
            next_free: K::from_usize(0),
            len: 0,
        }
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.next_free.is_none()
    }

    /// Drops every stored value and rebuilds the free chain.
    ///
    /// Any structure still holding keys into this arena is left with stale
    /// keys; clear those structures first.
    pub fn clear(&mut self) {
        let capacity = self.slots.len();
        self.slots.clear();
        for i in 1..capacity {
            self.slots.push(Slot::Vacant {
                next_free: K::from_usize(i),
            });
        }
        self.slots.push(Slot::Vacant { next_free: K::NONE });
        self.next_free = K::from_usize(0);
        self.len = 0;
    }
}

impl<T, K: Key> Storage<T> for Arena<T, K> {
    type Key = K;

    #[inline]
    fn remove(&mut self, key: K) -> Option<T> {
        let i = key.as_usize();
        if i >= self.slots.len() || matches!(self.slots[i], Slot::Vacant { .. }) {
            return None;
        }

        let slot = core::mem::replace(
            &mut self.slots[i],
            Slot::Vacant {
                next_free: self.next_free,
            },
        );
        self.next_free = key;
        self.len -= 1;

        match slot {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => unreachable!("slot checked occupied above"),
        }
    }

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        match self.slots.get(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        match self.slots.get_mut(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }
}

impl<T, K: Key> BoundedStorage<T> for Arena<T, K> {
    #[inline]
    fn try_insert(&mut self, value: T) -> Result<K, Full<T>> {
        if self.next_free.is_none() {
            return Err(Full(value));
        }

        let key = self.next_free;
        let slot = core::mem::replace(&mut self.slots[key.as_usize()], Slot::Occupied(value));
        self.next_free = match slot {
            Slot::Vacant { next_free } => next_free,
            Slot::Occupied(_) => unreachable!("free chain points at occupied slot"),
        };
        self.len += 1;

        Ok(key)
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        self.get(key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        self.get_mut(key)
    }
}

#[cfg(feature = "slab")]
impl<T> UnboundedStorage<T> for slab::Slab<T> {
    #[inline]
    fn insert(&mut self, value: T) -> usize {
        self.insert(value)
    }
}
