//! SHA-256 core hashing functions
//!
//! This module chains the pipeline stages over a complete message:
//! the message is padded and split by [`preprocess`], every block is
//! expanded and compressed into the running digest, starting from
//! [`H256_INIT`], and the final state is serialized big-endian.
//!
//! Blocks are processed strictly in order since each compression starts
//! from the digest left by the previous block.

use log::trace;

use super::H256_INIT;
use super::compress::compress_block;
use super::preprocess::preprocess;
use crate::error::HashError;
use crate::primitives::Digest;

/// Computes the SHA-256 digest of `input`.
///
/// The input is taken as raw bytes; text must be encoded by the caller
/// (`str::as_bytes` gives UTF-8).
///
/// # Errors
/// [`HashError::MessageTooLong`] if the bit-length of `input` does not fit
/// in the 64-bit length field.
pub fn sha256(input: &[u8]) -> Result<Digest, HashError> {
    let blocks = preprocess(input)?;

    trace!("sha256: {} bytes, {} blocks", input.len(), blocks.len());

    let state = blocks.fold(H256_INIT, |state, block| compress_block(&block, state));

    Ok(Digest::from(state))
}

/// Computes the SHA-256 digest of `input` as 64 lowercase hex characters.
pub fn sha256_hex(input: &[u8]) -> Result<String, HashError> {
    Ok(sha256(input)?.to_hex())
}
