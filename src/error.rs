//! Error type shared by the hashing pipeline and the digest primitive.

/// Errors reported by this crate.
///
/// Word arithmetic inside the compression function wraps modulo 2³² and
/// never produces an error; the only failure of the hash itself is a
/// message too large for the 64-bit length field.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// The message bit-length does not fit in 64 bits (≥ 2⁶¹ bytes).
    #[error("message of {len} bytes exceeds the 64-bit SHA-256 length field")]
    MessageTooLong { len: usize },

    /// A textual digest contained non-hexadecimal characters.
    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// A textual digest decoded to the wrong number of bytes.
    #[error("digest must be 32 bytes, got {len}")]
    InvalidDigestLength { len: usize },
}
