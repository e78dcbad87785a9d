//! Conversions between `Digest` and its byte, word and text forms
//!
//! All conversions preserve the big-endian layout of the digest.

use std::str::FromStr;

use super::Digest;
use crate::error::HashError;

/// Serializes eight state words big-endian into a digest.
impl From<[u32; 8]> for Digest {
    fn from(value: [u32; 8]) -> Self {
        let mut out = [0u8; Digest::LEN];

        for (chunk, word) in out.chunks_exact_mut(4).zip(value) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        Digest(out)
    }
}

impl From<Digest> for [u32; 8] {
    fn from(value: Digest) -> Self {
        value.words()
    }
}

impl From<[u8; 32]> for Digest {
    fn from(value: [u8; 32]) -> Self {
        Digest(value)
    }
}

impl From<Digest> for [u8; 32] {
    fn from(value: Digest) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8; 32]> for Digest {
    fn as_ref(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Attempts to build a digest from an arbitrary byte slice.
impl TryFrom<&[u8]> for Digest {
    type Error = HashError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; Digest::LEN] = value
            .try_into()
            .map_err(|_| HashError::InvalidDigestLength { len: value.len() })?;

        Ok(Digest(bytes))
    }
}

/// Parses 64 hexadecimal characters (either case) into a digest.
impl FromStr for Digest {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;

        Digest::try_from(bytes.as_slice())
    }
}
