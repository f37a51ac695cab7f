//! Sizing and in-memory generation of a single case.

use super::VectorError;
use crate::bitsource::{BitSource, Bitstream};
use crate::encoding::{self, WORD_BITS};
use crate::sampling::{window_bits, CbdSampler};

/// Number of bits to generate for `count` coefficients.
///
/// The minimum `count * 2 * eta` rounded up to a whole number of
/// 128-bit words. Padding bits come from the generator, never zeros.
/// Returns `None` if the length does not fit in `usize`.
pub fn padded_bit_length(count: usize, eta: usize) -> Option<usize> {
    let needed = count.checked_mul(window_bits(eta)?)?;
    let word = WORD_BITS as usize;
    needed.div_ceil(word).checked_mul(word)
}

/// Validated parameters of one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseParams {
    eta: usize,
    count: usize,
    seed: u64,
    padded_bits: usize,
}

impl CaseParams {
    /// Validates raw parameters.
    ///
    /// `count` is signed because it arrives from user input; a negative
    /// value fails here, before any bits are generated, as does a case
    /// whose padded bit length would overflow `usize`.
    pub fn new(eta: usize, count: i64, seed: u64) -> Result<Self, VectorError> {
        if eta == 0 {
            return Err(VectorError::InvalidArgument("eta must be positive".into()));
        }
        let count = usize::try_from(count).map_err(|_| {
            VectorError::InvalidArgument(format!("coefficient count {} is negative", count))
        })?;
        let padded_bits = padded_bit_length(count, eta).ok_or_else(|| {
            VectorError::InvalidArgument(format!(
                "{} coefficients with eta={} exceed the addressable bit length",
                count, eta
            ))
        })?;
        Ok(Self {
            eta,
            count,
            seed,
            padded_bits,
        })
    }

    /// Derives a case from the shared base seed (`base_seed + eta`).
    pub fn from_base_seed(eta: usize, count: i64, base_seed: u64) -> Result<Self, VectorError> {
        Self::new(eta, count, base_seed.wrapping_add(eta as u64))
    }

    /// Returns the distribution parameter.
    pub fn eta(&self) -> usize {
        self.eta
    }

    /// Returns the number of coefficients.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the effective seed of this case.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Bits generated for this case.
    pub fn padded_bits(&self) -> usize {
        self.padded_bits
    }
}

/// A fully generated case held in memory.
#[derive(Debug, Clone)]
pub struct TestVectorCase {
    params: CaseParams,
    bitstream: Bitstream,
    coefficients: Vec<i32>,
    words: Vec<u128>,
}

impl TestVectorCase {
    /// Generates the bitstream, coefficients and words for `params`.
    pub fn generate(params: CaseParams) -> Result<Self, VectorError> {
        let bitstream = BitSource::new(params.seed).generate(params.padded_bits());

        let coefficients = CbdSampler::new(params.eta)?.sample(&bitstream, params.count)?;
        let words = encoding::pack_words(&bitstream, WORD_BITS)?;

        tracing::debug!(
            eta = params.eta,
            count = params.count,
            seed = params.seed,
            bits = bitstream.len(),
            words = words.len(),
            "Generated case"
        );

        Ok(Self {
            params,
            bitstream,
            coefficients,
            words,
        })
    }

    /// Returns the case parameters.
    pub fn params(&self) -> &CaseParams {
        &self.params
    }

    /// Returns the padded bitstream.
    pub fn bitstream(&self) -> &Bitstream {
        &self.bitstream
    }

    /// Returns the sampled coefficients.
    pub fn coefficients(&self) -> &[i32] {
        &self.coefficients
    }

    /// Returns the packed 128-bit words.
    pub fn words(&self) -> &[u128] {
        &self.words
    }

    /// Text of the randomness artifact.
    pub fn rand_hex(&self) -> String {
        encoding::render_words(&self.words, WORD_BITS)
    }

    /// Text of the coefficients artifact.
    pub fn coeffs_hex(&self) -> String {
        encoding::render_coefficients(&self.coefficients)
    }
}
