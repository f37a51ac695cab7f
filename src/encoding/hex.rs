//! Line-oriented lowercase hex rendering and parsing.

use super::EncodingError;

fn hex_digits(width: u32) -> usize {
    width.div_ceil(4) as usize
}

/// Renders each word as a zero-padded hex line of `ceil(width / 4)` digits.
pub fn render_words(words: &[u128], width: u32) -> String {
    let digits = hex_digits(width);
    words
        .iter()
        .map(|word| format!("{:0digits$x}\n", word, digits = digits))
        .collect()
}

/// Renders each coefficient as its two's-complement byte.
///
/// `-1` becomes `ff`, `-2` becomes `fe`.
pub fn render_coefficients(coeffs: &[i32]) -> String {
    coeffs
        .iter()
        .map(|&value| format!("{:02x}\n", (value & 0xff) as u8))
        .collect()
}

fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.trim_end()
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
}

fn check_line(line_no: usize, line: &str, digits: usize) -> Result<(), EncodingError> {
    if line.len() != digits {
        return Err(EncodingError::Parse {
            line: line_no,
            reason: format!("expected {} hex digits, found {:?}", digits, line),
        });
    }
    if !line.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)) {
        return Err(EncodingError::Parse {
            line: line_no,
            reason: format!("not lowercase hex: {:?}", line),
        });
    }
    Ok(())
}

/// Parses text produced by [`render_words`].
pub fn parse_words(text: &str, width: u32) -> Result<Vec<u128>, EncodingError> {
    if width == 0 || width > u128::BITS {
        return Err(EncodingError::InvalidArgument(width));
    }
    let digits = hex_digits(width);

    lines(text)
        .map(|(line_no, line)| {
            check_line(line_no, line, digits)?;
            let word = u128::from_str_radix(line, 16).map_err(|e| EncodingError::Parse {
                line: line_no,
                reason: e.to_string(),
            })?;
            if width < u128::BITS && word >> width != 0 {
                return Err(EncodingError::Parse {
                    line: line_no,
                    reason: format!("value exceeds {} bits", width),
                });
            }
            Ok(word)
        })
        .collect()
}

/// Parses text produced by [`render_coefficients`], sign-extending each byte.
pub fn parse_coefficients(text: &str) -> Result<Vec<i32>, EncodingError> {
    lines(text)
        .map(|(line_no, line)| {
            check_line(line_no, line, 2)?;
            let byte = u8::from_str_radix(line, 16).map_err(|e| EncodingError::Parse {
                line: line_no,
                reason: e.to_string(),
            })?;
            Ok(i32::from(byte as i8))
        })
        .collect()
}
