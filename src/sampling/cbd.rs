//! CBD transform over an explicit bitstream.
//!
//! For each coefficient the sampler reads a window of `2 * eta` bits,
//! splits it into halves `A` and `B` of `eta` bits each, and emits
//! `popcount(A) - popcount(B)`. Windows are consumed strictly in order.

use crate::bitsource::Bitstream;
use thiserror::Error;

/// Errors raised by the CBD transform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplingError {
    /// Eta is zero or its window width overflows.
    #[error("invalid argument: eta {0} must be positive with 2 * eta fitting in usize")]
    InvalidArgument(usize),

    /// The stream is shorter than the sizing rule guarantees.
    #[error("insufficient data: coefficient {index} needs {needed} bits, {available} remain")]
    InsufficientData {
        /// Coefficient that could not be produced.
        index: usize,
        /// Window width in bits.
        needed: usize,
        /// Bits left after the cursor.
        available: usize,
    },
}

/// Number of bits consumed per coefficient, or `None` on overflow.
#[inline]
pub fn window_bits(eta: usize) -> Option<usize> {
    eta.checked_mul(2)
}

/// Centered binomial sampler for a fixed `eta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CbdSampler {
    eta: usize,
    width: usize,
}

impl CbdSampler {
    /// Creates a sampler, rejecting `eta == 0` and windows wider than `usize`.
    pub fn new(eta: usize) -> Result<Self, SamplingError> {
        match window_bits(eta) {
            Some(width) if eta > 0 => Ok(Self { eta, width }),
            _ => Err(SamplingError::InvalidArgument(eta)),
        }
    }

    /// Returns the distribution parameter.
    pub fn eta(&self) -> usize {
        self.eta
    }

    /// Samples `count` coefficients from the start of `stream`.
    ///
    /// Fails with [`SamplingError::InsufficientData`] as soon as a window
    /// would run past the end of the stream; no partial output is returned.
    pub fn sample(&self, stream: &Bitstream, count: usize) -> Result<Vec<i32>, SamplingError> {
        let bits = stream.bits();
        let width = self.width;
        let mut coeffs = Vec::with_capacity(count);
        let mut cursor = 0;

        for index in 0..count {
            let available = bits.len() - cursor;
            if available < width {
                return Err(SamplingError::InsufficientData {
                    index,
                    needed: width,
                    available,
                });
            }

            let (a, b) = bits[cursor..cursor + width].split_at(self.eta);
            coeffs.push(Self::weight(a) - Self::weight(b));
            cursor += width;
        }

        tracing::trace!(
            eta = self.eta,
            count,
            consumed = cursor,
            "Sampled CBD coefficients"
        );

        Ok(coeffs)
    }

    fn weight(half: &[u8]) -> i32 {
        half.iter().map(|&b| i32::from(b)).sum()
    }
}

/// Samples `count` coefficients with parameter `eta` from `stream`.
pub fn sample(stream: &Bitstream, eta: usize, count: usize) -> Result<Vec<i32>, SamplingError> {
    CbdSampler::new(eta)?.sample(stream, count)
}
