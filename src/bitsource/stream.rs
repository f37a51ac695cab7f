//! Immutable bitstream type shared by the sampler and the encoders.

use thiserror::Error;

/// Errors raised when building a bitstream from caller-supplied bits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitSourceError {
    /// An element other than 0 or 1.
    #[error("invalid argument: bit at index {index} has value {value}, expected 0 or 1")]
    InvalidArgument {
        /// Position of the offending element.
        index: usize,
        /// Its value.
        value: u8,
    },
}

/// An ordered, fixed-length sequence of bits.
///
/// Each element is stored as a `u8` holding 0 or 1. Once built the
/// stream is never mutated; consumers borrow it through [`Bitstream::bits`].
#[derive(Clone, PartialEq, Eq)]
pub struct Bitstream {
    /// One entry per bit, each 0 or 1.
    bits: Vec<u8>,
}

impl Bitstream {
    /// Builds a bitstream from explicit bit values.
    ///
    /// Fails if any element is not 0 or 1.
    pub fn from_bits(bits: Vec<u8>) -> Result<Self, BitSourceError> {
        if let Some(index) = bits.iter().position(|&b| b > 1) {
            return Err(BitSourceError::InvalidArgument {
                index,
                value: bits[index],
            });
        }
        Ok(Self { bits })
    }

    /// Wraps bits already known to be 0 or 1.
    pub(crate) fn from_bits_unchecked(bits: Vec<u8>) -> Self {
        debug_assert!(bits.iter().all(|&b| b <= 1));
        Self { bits }
    }

    /// Returns the bits as a slice.
    #[inline]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Returns the number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Counts the number of set bits.
    pub fn popcount(&self) -> usize {
        self.bits.iter().map(|&b| b as usize).sum()
    }

    /// Calculates bit bias as deviation from 0.5.
    ///
    /// Returns a value in [-0.5, 0.5] where 0.0 is unbiased.
    pub fn bit_bias(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        (self.popcount() as f64 / self.len() as f64) - 0.5
    }
}

impl std::fmt::Debug for Bitstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitstream")
            .field("bits", &self.bits.len())
            .field("bit_bias", &format!("{:.4}", self.bit_bias()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_binary_values() {
        let result = Bitstream::from_bits(vec![0, 1, 2, 1]);
        assert_eq!(
            result,
            Err(BitSourceError::InvalidArgument { index: 2, value: 2 })
        );
    }

    #[test]
    fn test_alternating_bits_unbiased() {
        let bits: Vec<u8> = (0..100).map(|i| (i % 2) as u8).collect();
        let stream = Bitstream::from_bits(bits).unwrap();

        assert_eq!(stream.popcount(), 50);
        assert!(stream.bit_bias().abs() < 0.001);
    }

    #[test]
    fn test_all_ones_bias() {
        let stream = Bitstream::from_bits(vec![1; 64]).unwrap();
        assert!((stream.bit_bias() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_empty_stream() {
        let stream = Bitstream::from_bits(Vec::new()).unwrap();
        assert!(stream.is_empty());
        assert_eq!(stream.bit_bias(), 0.0);
    }
}
