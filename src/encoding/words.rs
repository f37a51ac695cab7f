//! Little-endian word packing.
//!
//! Bit `i` of a chunk becomes bit `i` of the word. A final chunk
//! shorter than the word width packs only the bits present.

use super::EncodingError;
use crate::bitsource::Bitstream;

/// Word width used for the randomness artifact.
pub const WORD_BITS: u32 = 128;

fn check_width(width: u32) -> Result<usize, EncodingError> {
    if width == 0 || width > u128::BITS {
        return Err(EncodingError::InvalidArgument(width));
    }
    Ok(width as usize)
}

/// Number of words needed to hold `bit_len` bits.
pub fn word_count(bit_len: usize, width: u32) -> Result<usize, EncodingError> {
    let width = check_width(width)?;
    Ok(bit_len.div_ceil(width))
}

/// Packs the stream into consecutive `width`-bit words.
pub fn pack_words(stream: &Bitstream, width: u32) -> Result<Vec<u128>, EncodingError> {
    let width = check_width(width)?;

    Ok(stream
        .bits()
        .chunks(width)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u128, |word, (i, &bit)| word | (u128::from(bit & 1) << i))
        })
        .collect())
}

/// Unpacks `bit_len` bits from words produced by [`pack_words`].
///
/// Fails if the words cannot supply `bit_len` bits.
pub fn unpack_words(words: &[u128], width: u32, bit_len: usize) -> Result<Bitstream, EncodingError> {
    let width = check_width(width)?;
    let capacity = words.len() * width;
    if bit_len > capacity {
        return Err(EncodingError::Parse {
            line: words.len(),
            reason: format!("{} words hold {} bits, {} requested", words.len(), capacity, bit_len),
        });
    }

    let bits = (0..bit_len)
        .map(|pos| ((words[pos / width] >> (pos % width)) & 1) as u8)
        .collect();

    Ok(Bitstream::from_bits_unchecked(bits))
}
