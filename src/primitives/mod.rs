//! Primitive types
//!
//! Fixed-size value types with explicit, big-endian semantics used by the
//! hash implementation.
//!
//! Current primitives include:
//! - `Digest`: the 256-bit output of SHA-256

mod digest;

pub use digest::Digest;
