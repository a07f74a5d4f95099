//! Circular byte store with explicit full/empty tracking.
//!
//! # Cursor geometry
//!
//! `head` is the next byte to read, `tail` the next byte to write, both in
//! `[0, capacity)`. When the cursors coincide the offsets alone cannot say
//! whether the buffer holds everything or nothing, so two booleans track
//! which it is. The flags are updated only by [`RingBuffer::write`],
//! [`RingBuffer::read`], and [`RingBuffer::reset`] - they are never
//! recomputed from the offsets. This spends two bytes of state instead of
//! reserving a slot, so a ring of capacity C really stores C bytes.
//!
//! # Partial transfers
//!
//! Writes and reads move as many bytes as both sides allow and report the
//! count. A short or zero count is a normal outcome to check, not an error:
//! writing to a full ring and reading from an empty ring both return 0 and
//! leave the buffer untouched.

use crate::AllocError;

/// Fixed-capacity circular byte buffer.
///
/// The backing region is allocated once at construction and freed on drop.
/// Transfers wrap around the physical end of the region; a single call
/// moves at most `capacity` bytes.
///
/// # Example
///
/// ```
/// use mosaic_ring::RingBuffer;
///
/// let mut ring = RingBuffer::with_capacity(8);
///
/// assert_eq!(ring.write(b"hello"), 5);
/// assert!(!ring.is_empty());
///
/// let mut out = [0u8; 5];
/// assert_eq!(ring.read(&mut out), 5);
/// assert_eq!(&out, b"hello");
/// assert!(ring.is_empty());
/// ```
#[derive(PartialEq)]
pub struct RingBuffer {
    data: Box<[u8]>,
    head: usize,
    tail: usize,
    full: bool,
    empty: bool,
}

impl RingBuffer {
    /// Creates a ring buffer backed by a `capacity` byte region.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::ZeroCapacity`] for a zero capacity and
    /// [`AllocError::RegionExhausted`] when the region cannot be obtained.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        if capacity == 0 {
            return Err(AllocError::ZeroCapacity);
        }

        let mut region = Vec::new();
        region
            .try_reserve_exact(capacity)
            .map_err(|_| AllocError::RegionExhausted { capacity })?;
        region.resize(capacity, 0);

        Ok(Self {
            data: region.into_boxed_slice(),
            head: 0,
            tail: 0,
            full: false,
            empty: true,
        })
    }

    /// Creates a ring buffer backed by a `capacity` byte region.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or the region cannot be allocated. Use
    /// [`try_with_capacity`](Self::try_with_capacity) to handle either as
    /// a value.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).expect("ring buffer allocation")
    }

    /// Returns the size of the backing region in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    ///
    /// Reads the tracked flag; O(1).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.empty
    }

    /// Returns `true` if the buffer holds `capacity` bytes.
    ///
    /// Reads the tracked flag; O(1).
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.full
    }

    /// Returns the number of bytes currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        if self.full {
            self.data.len()
        } else {
            // Not full, so head == tail can only mean empty
            (self.tail + self.data.len() - self.head) % self.data.len()
        }
    }

    /// Returns the number of bytes that can still be written.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.len()
    }

    /// Copies bytes from `src` into the buffer, returning the count moved.
    ///
    /// The transfer is capped by `src.len()`, by the capacity, and by the
    /// free space between `tail` and `head`; it wraps around the physical
    /// end of the region when needed. Returns 0 without touching the
    /// buffer when it is already full or `src` is empty.
    pub fn write(&mut self, src: &[u8]) -> usize {
        if self.full || src.is_empty() {
            return 0;
        }

        let capacity = self.data.len();
        let write_len = src.len().min(capacity);

        // Free space runs from tail up to `top`, and - once wrapped - from
        // the physical start up to head. With head ahead of tail the top is
        // head itself and there is no second run.
        let (top, wrapped) = if self.head > self.tail {
            (self.head, 0)
        } else {
            (capacity, self.head)
        };

        let first = (top - self.tail).min(write_len);
        let second = (write_len - first).min(wrapped);

        self.data[self.tail..self.tail + first].copy_from_slice(&src[..first]);
        self.data[..second].copy_from_slice(&src[first..first + second]);

        let transferred = first + second;
        self.tail = (self.tail + transferred) % capacity;

        // A write fills the buffer exactly when the cursors meet again,
        // and a nonzero write always clears emptiness.
        self.full = self.tail == self.head;
        self.empty = false;

        transferred
    }

    /// Copies bytes from the buffer into `dst`, returning the count moved.
    ///
    /// The transfer is capped by `dst.len()`, by the capacity, and by the
    /// bytes available between `head` and `tail`; it wraps around the
    /// physical end of the region when needed. Returns 0 without touching
    /// the buffer when it is already empty or `dst` is empty.
    pub fn read(&mut self, dst: &mut [u8]) -> usize {
        if self.empty || dst.is_empty() {
            return 0;
        }

        let capacity = self.data.len();
        let read_len = dst.len().min(capacity);

        // Stored bytes run from head up to `top`, and - once wrapped - from
        // the physical start up to tail. With tail ahead of head the top is
        // tail itself and there is no second run.
        let (top, wrapped) = if self.tail > self.head {
            (self.tail, 0)
        } else {
            (capacity, self.tail)
        };

        let first = (top - self.head).min(read_len);
        let second = (read_len - first).min(wrapped);

        dst[..first].copy_from_slice(&self.data[self.head..self.head + first]);
        dst[first..first + second].copy_from_slice(&self.data[..second]);

        let transferred = first + second;
        self.head = (self.head + transferred) % capacity;

        // A read empties the buffer exactly when the cursors meet again,
        // and a nonzero read always clears fullness.
        self.full = false;
        self.empty = self.head == self.tail;

        transferred
    }

    /// Discards all stored bytes, returning the buffer to its initial
    /// state without reallocating.
    ///
    /// Stale region contents are unreachable afterwards; they are
    /// overwritten by subsequent writes before any read can return them.
    pub fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.full = false;
        self.empty = true;
    }
}

impl core::fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.data.len())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("full", &self.full)
            .field("empty", &self.empty)
            .finish()
    }
}
