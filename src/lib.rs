//! SHA-256 from first principles
//!
//! This crate computes SHA-256 digests (FIPS 180-4) without relying on any
//! platform or third-party cryptography implementation.
//!
//! The focus is on **clarity, predictability, and auditability**: every
//! stage of the algorithm is a small, pure function that can be inspected
//! and tested on its own.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-256 pipeline: padding and block segmentation, message
//!   schedule expansion, the 64-round compression function and the driver
//!   chaining them over a message.
//!
//! - `primitives`
//!   The fixed-size `Digest` value type with its hex rendering and
//!   conversions.
//!
//! - `error`
//!   The `HashError` type returned by fallible operations.
//!
//! # Example
//!
//! ```
//! let digest = sha256_digest::sha256(b"abc").unwrap();
//!
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! # Design goals
//!
//! - No heap allocations while hashing
//! - Minimal and explicit APIs
//! - Wrapping 32-bit arithmetic everywhere, never widened
//! - Input is raw bytes; no implicit text encoding

pub mod error;
pub mod hash;
pub mod primitives;

pub use error::HashError;
pub use hash::{sha256, sha256_hex};
pub use primitives::Digest;
