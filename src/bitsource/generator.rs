//! Seeded bit generation backed by ChaCha20.
//!
//! The generator is created fresh for every request from the 64-bit
//! seed, so the output depends on nothing but `(seed, count)`. Bits are
//! taken from successive 64-bit outputs, least significant bit first,
//! which makes a shorter request a prefix of a longer one.
//!
//! This is a reproducibility tool, not a source of secret randomness.

use super::Bitstream;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

/// A reproducible source of bits for one seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitSource {
    seed: u64,
}

impl BitSource {
    /// Creates a bit source for the given seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Returns the seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates exactly `count` bits.
    pub fn generate(&self, count: usize) -> Bitstream {
        let mut rng = ChaCha20Rng::seed_from_u64(self.seed);
        let mut bits = Vec::with_capacity(count);

        while bits.len() < count {
            let word = rng.next_u64();
            let take = (count - bits.len()).min(64);
            bits.extend((0..take).map(|i| ((word >> i) & 1) as u8));
        }

        tracing::trace!(seed = self.seed, bits = count, "Generated bitstream");

        Bitstream::from_bits_unchecked(bits)
    }
}

/// Generates `count` bits from `seed`.
pub fn generate(seed: u64, count: usize) -> Bitstream {
    BitSource::new(seed).generate(count)
}
