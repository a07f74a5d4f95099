//! # mosaic-ring
//!
//! Fixed-capacity circular byte buffer for staging variable-length
//! payloads ahead of a fixed-size transport frame.
//!
//! ## Design Goals
//!
//! - Single allocation at construction, none afterwards
//! - Partial transfers: writes and reads move what fits and report the
//!   count instead of failing
//! - Full capacity usable: the head == tail ambiguity is resolved by two
//!   tracked flags, not by sacrificing a slot
//! - No silent loss: a full buffer rejects the whole write (count 0)
//!   rather than overwriting unread bytes
//!
//! ## Example
//!
//! ```
//! use mosaic_ring::RingBuffer;
//!
//! let mut staging = RingBuffer::with_capacity(64);
//!
//! // Producer side: push what fits, keep the rest for the next round
//! let payload = b"sensor frame 0042";
//! let accepted = staging.write(payload);
//! assert_eq!(accepted, payload.len());
//!
//! // Consumer side: drain into a fixed-size frame
//! let mut frame = [0u8; 32];
//! let drained = staging.read(&mut frame);
//! assert_eq!(&frame[..drained], payload);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ring;

pub use error::AllocError;
pub use ring::RingBuffer;
