//! 256-bit digest value
//!
//! This module defines the fixed-size output type of SHA-256.
//!
//! It is a **simple, explicit value type**: 32 bytes in big-endian order,
//! exactly as they come out of the final hash state. Formatting is
//! lowercase hexadecimal, two characters per byte, most significant byte
//! first.

use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};

/// A 256-bit (32-byte) SHA-256 digest.
///
/// The bytes are stored in **big-endian** order, i.e. the serialization of
/// the eight final state words H0..H7.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub(crate) [u8; 32]);

impl Digest {
    /// Digest length in bytes.
    pub const LEN: usize = 32;

    /// Length of the hexadecimal rendering.
    pub const HEX_LEN: usize = 2 * Self::LEN;

    /// Returns the digest bytes.
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Returns the eight big-endian state words the digest was built from.
    pub fn words(&self) -> [u32; 8] {
        let mut out = [0u32; 8];

        for (o, chunk) in out.iter_mut().zip(self.0.chunks_exact(4)) {
            *o = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        out
    }

    /// Renders the digest as 64 lowercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Number of bits that differ between two digests.
    pub fn hamming_distance(&self, other: &Digest) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(l, r)| (l ^ r).count_ones())
            .sum()
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl UpperHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}
