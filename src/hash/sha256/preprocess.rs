//! Message padding and block segmentation.
//!
//! The padded stream is never built bit by bit. Full blocks are copied
//! straight out of the message and only the tail (remaining bytes, the
//! `0x80` marker, zero padding and the 64-bit length) is assembled, in
//! one block or two depending on how much room the remainder leaves.

use log::debug;

use super::{BLOCK_LEN, Block};
use crate::error::HashError;

/// Offset of the 64-bit length field inside the final block.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Returns the message length in bits as encoded in the length field.
///
/// Fails instead of truncating when the bit count does not fit in 64 bits.
pub fn bit_length(len: usize) -> Result<u64, HashError> {
    u64::try_from(len)
        .ok()
        .and_then(|bytes| bytes.checked_mul(8))
        .ok_or_else(|| {
            debug!("rejecting {} byte message: bit length overflows u64", len);
            HashError::MessageTooLong { len }
        })
}

/// Number of 512-bit blocks produced for a message of `len` bytes.
///
/// Equals `ceil((len * 8 + 1 + 64) / 512)`.
pub fn block_count(len: usize) -> Result<usize, HashError> {
    bit_length(len)?;

    let full = len / BLOCK_LEN;
    let tail = if len % BLOCK_LEN < LENGTH_OFFSET { 1 } else { 2 };

    Ok(full + tail)
}

/// Splits `message` into padded 512-bit blocks.
///
/// The returned iterator borrows the message and yields exactly
/// [`block_count`] blocks. The empty message yields a single block.
pub fn preprocess(message: &[u8]) -> Result<Blocks<'_>, HashError> {
    let bit_len = bit_length(message.len())?;
    let total = block_count(message.len())?;

    Ok(Blocks {
        message,
        bit_len,
        next: 0,
        total,
    })
}

/// Materializes the whole padded stream as a flat byte buffer.
///
/// The hashing path uses [`preprocess`] instead; this is meant for
/// inspecting the padding.
pub fn pad(message: &[u8]) -> Result<Vec<u8>, HashError> {
    let blocks = preprocess(message)?;
    let mut out = Vec::with_capacity(blocks.len() * BLOCK_LEN);

    for block in blocks {
        out.extend_from_slice(&block);
    }

    Ok(out)
}

/// Iterator over the padded blocks of a message.
#[derive(Clone, Debug)]
pub struct Blocks<'a> {
    message: &'a [u8],
    bit_len: u64,
    next: usize,
    total: usize,
}

impl Blocks<'_> {
    /// Original message length in bits.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Builds block `index` of the padded stream.
    fn block(&self, index: usize) -> Block {
        let mut block = [0u8; BLOCK_LEN];
        let start = index * BLOCK_LEN;
        let len = self.message.len();

        if start + BLOCK_LEN <= len {
            block.copy_from_slice(&self.message[start..start + BLOCK_LEN]);
            return block;
        }

        // Tail block: remaining bytes, then the marker if it has not been
        // written into a previous block yet.
        if start <= len {
            let rem = len - start;
            block[..rem].copy_from_slice(&self.message[start..]);
            block[rem] = 0x80;
        }

        if index + 1 == self.total {
            block[LENGTH_OFFSET..].copy_from_slice(&self.bit_len.to_be_bytes());
        }

        block
    }
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if self.next >= self.total {
            return None;
        }

        let block = self.block(self.next);
        self.next += 1;

        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Blocks<'_> {}
