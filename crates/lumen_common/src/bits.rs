//! Bit-string parsing and formatting for input and output vectors.
//!
//! Bit strings are written most-significant bit first, the way a Verilog
//! binary literal reads: `"10110001"` sets index 0 and index 7. An optional
//! `0b` prefix and `_` separators are accepted.

/// Error returned when a bit string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBitsError {
    /// The string contained no bits.
    #[error("empty bit string")]
    Empty,

    /// The string contained a character other than `0`, `1` or `_`.
    #[error("invalid character '{ch}' in bit string '{input}'")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// The full input string.
        input: String,
    },

    /// The string has more bits than the target vector.
    #[error("bit string '{input}' has {len} bits but the vector is {width} wide")]
    TooWide {
        /// The full input string.
        input: String,
        /// Number of bits in the string.
        len: usize,
        /// Width of the target vector.
        width: usize,
    },
}

/// Parses an MSB-first bit string into a vector indexed LSB first.
pub fn parse_bits(input: &str) -> Result<Vec<bool>, ParseBitsError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0b")
        .or_else(|| trimmed.strip_prefix("0B"))
        .unwrap_or(trimmed);

    let mut bits = Vec::with_capacity(digits.len());
    for ch in digits.chars().rev() {
        match ch {
            '0' => bits.push(false),
            '1' => bits.push(true),
            '_' => {}
            _ => {
                return Err(ParseBitsError::InvalidChar {
                    ch,
                    input: input.to_string(),
                })
            }
        }
    }

    if bits.is_empty() {
        return Err(ParseBitsError::Empty);
    }
    Ok(bits)
}

/// Parses a bit string and zero-extends it to exactly `width` bits.
///
/// Strings longer than `width` are rejected rather than truncated.
pub fn parse_bits_with_width(input: &str, width: usize) -> Result<Vec<bool>, ParseBitsError> {
    let mut bits = parse_bits(input)?;
    if bits.len() > width {
        return Err(ParseBitsError::TooWide {
            input: input.to_string(),
            len: bits.len(),
            width,
        });
    }
    bits.resize(width, false);
    Ok(bits)
}

/// Formats a vector (index 0 = LSB) as an MSB-first bit string.
pub fn format_bits(bits: &[bool]) -> String {
    bits.iter().rev().map(|&b| if b { '1' } else { '0' }).collect()
}

/// Expands the low `width` bits of `value` into a vector indexed LSB first.
pub fn bits_from_u64(value: u64, width: usize) -> Vec<bool> {
    (0..width)
        .map(|i| i < 64 && (value >> i) & 1 != 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msb_first_ordering() {
        let bits = parse_bits("10110001").unwrap();
        assert_eq!(
            bits,
            vec![true, false, false, false, true, true, false, true]
        );
    }

    #[test]
    fn prefix_and_separators() {
        assert_eq!(parse_bits("0b10_01").unwrap(), vec![true, false, false, true]);
        assert_eq!(parse_bits(" 1 ").unwrap(), vec![true]);
    }

    #[test]
    fn invalid_char_rejected() {
        let err = parse_bits("10x1").unwrap_err();
        assert_eq!(
            err,
            ParseBitsError::InvalidChar {
                ch: 'x',
                input: "10x1".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid character 'x' in bit string '10x1'");
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(parse_bits("").unwrap_err(), ParseBitsError::Empty);
        assert_eq!(parse_bits("0b__").unwrap_err(), ParseBitsError::Empty);
    }

    #[test]
    fn zero_extension() {
        let bits = parse_bits_with_width("11", 5).unwrap();
        assert_eq!(bits, vec![true, true, false, false, false]);
    }

    #[test]
    fn too_wide_rejected() {
        let err = parse_bits_with_width("111111", 5).unwrap_err();
        assert!(matches!(err, ParseBitsError::TooWide { len: 6, width: 5, .. }));
    }

    #[test]
    fn format_is_inverse_of_parse() {
        assert_eq!(format_bits(&parse_bits("0010110").unwrap()), "0010110");
        assert_eq!(format_bits(&[]), "");
    }

    #[test]
    fn from_u64() {
        assert_eq!(bits_from_u64(0b101, 4), vec![true, false, true, false]);
        assert_eq!(bits_from_u64(u64::MAX, 66).len(), 66);
        assert!(!bits_from_u64(u64::MAX, 66)[65]);
    }
}
