//! Reproducible bit generation.
//!
//! This module turns a 64-bit seed into a fixed-length stream of
//! single bits. Every call builds its own ChaCha20 instance, so two
//! generations with the same seed never influence each other.

mod generator;
mod stream;

pub use generator::{generate, BitSource};
pub use stream::{BitSourceError, Bitstream};
