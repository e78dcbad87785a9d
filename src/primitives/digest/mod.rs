//! Fixed-size digest primitive.
//!
//! - `core`: the `Digest` type and its formatting.
//! - `conv`: conversions to and from bytes, words and hex text.

mod conv;
mod core;

pub use self::core::Digest;
