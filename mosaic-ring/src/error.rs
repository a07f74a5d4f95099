//! Error types for ring buffer construction.

use core::fmt;

/// Failure to obtain the backing byte region at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// A capacity of zero was requested. A zero-byte ring can satisfy no
    /// transfer and leaves the cursor arithmetic without a modulus.
    ZeroCapacity,
    /// The allocator could not provide the requested region.
    RegionExhausted {
        /// Number of bytes that were requested.
        capacity: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "ring buffer capacity must be nonzero"),
            Self::RegionExhausted { capacity } => {
                write!(f, "failed to allocate {capacity} byte ring buffer region")
            }
        }
    }
}

impl std::error::Error for AllocError {}
