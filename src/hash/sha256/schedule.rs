//! Message schedule expansion.

use super::computations::{small_sigma0, small_sigma1};
use super::{Block, SCHEDULE_LEN, Schedule};

/// Expands a 512-bit block into the 64-word message schedule.
///
/// Words 0..16 are the block read as big-endian `u32`; every following
/// word mixes four earlier ones:
/// `W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]` (mod 2³²).
pub fn expand(block: &Block) -> Schedule {
    let mut w = [0u32; SCHEDULE_LEN];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for t in 16..SCHEDULE_LEN {
        w[t] = w[t - 16]
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma1(w[t - 2]));
    }

    w
}
