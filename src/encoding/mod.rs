//! Hex serialization of bitstreams and coefficients.
//!
//! Two independent views over data already produced by the bit source
//! and the sampler:
//!
//! - the bitstream packed into little-endian words, one hex word per line
//! - each coefficient as its two's-complement byte, one hex byte per line
//!
//! Parsers for both formats are provided so written artifacts can be
//! read back and checked.

mod hex;
mod words;

pub use hex::{parse_coefficients, parse_words, render_coefficients, render_words};
pub use words::{pack_words, unpack_words, word_count, WORD_BITS};

use thiserror::Error;

/// Errors raised while packing or parsing encoded data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Word width outside `1..=128`.
    #[error("invalid argument: word width {0} must be between 1 and 128 bits")]
    InvalidArgument(u32),

    /// Malformed or insufficient encoded input.
    #[error("parse error on line {line}: {reason}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}
