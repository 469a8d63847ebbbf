//! Repeated multiply-and-carry conversion between base 256 and base N.
//!
//! Both directions keep a little-endian accumulator that grows as carries
//! overflow it, so the cost is quadratic in the input length. Leading zeros
//! carry no numeric value and are re-added as explicit padding, one zero
//! digit per zero byte and vice versa.

use crate::core::alphabet::{Alphabet, Digit};
use crate::encoders::errors::DecodeError;

/// Converts `data` (big-endian base 256) into most-significant-first digits
/// in `0..base`.
///
/// Leading zero bytes are counted only while more than one byte remains, so
/// an all-zero input of length M still yields M zero digits: M-1 of padding
/// and one from converting the final zero byte.
///
/// # Panics
///
/// Panics if `data` is non-empty and `base < 2`, or if `base` does not fit
/// in a [`Digit`] plus one.
pub(crate) fn encode_to_digits(data: &[u8], base: usize) -> Vec<Digit> {
    if data.is_empty() {
        return Vec::new();
    }

    assert!(
        base >= 2,
        "alphabet must have at least two symbols to encode data (base is {})",
        base
    );
    let base = base as u64;
    assert!(
        base <= u64::from(Digit::MAX) + 1,
        "base {} is too large for digit values",
        base
    );

    let mut digits: Vec<Digit> = vec![0];
    for &byte in data {
        let mut carry = u64::from(byte);
        for digit in digits.iter_mut() {
            carry += u64::from(*digit) << 8;
            *digit = (carry % base) as Digit;
            carry /= base;
        }

        while carry > 0 {
            digits.push((carry % base) as Digit);
            carry /= base;
        }
    }

    let leading_zeros = count_leading_zeros(data);
    digits.extend(std::iter::repeat_n(0, leading_zeros));
    digits.reverse();
    digits
}

/// Converts most-significant-first `digits` in `0..base` back into bytes.
///
/// Mirrors [`encode_to_digits`]: each leading zero digit (while more than
/// one digit remains) becomes one leading zero byte.
pub(crate) fn decode_from_digits(digits: &[Digit], base: usize) -> Vec<u8> {
    if digits.is_empty() {
        return Vec::new();
    }

    let base = base as u64;

    let mut bytes: Vec<u8> = vec![0];
    for &digit in digits {
        let mut carry = u64::from(digit);
        for byte in bytes.iter_mut() {
            carry += u64::from(*byte) * base;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }

        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let leading_zeros = count_leading_zeros(digits);
    bytes.extend(std::iter::repeat_n(0, leading_zeros));
    bytes.reverse();
    bytes
}

/// Maps digits to their symbols.
///
/// Digits must come from [`encode_to_digits`] with the same alphabet; an
/// out-of-range digit is a caller bug and panics.
pub(crate) fn render(digits: &[Digit], alphabet: &Alphabet) -> String {
    let symbols = alphabet.symbols();
    digits.iter().map(|&d| symbols[d as usize]).collect()
}

/// Maps each character of `encoded` to its digit value.
pub(crate) fn parse(encoded: &str, alphabet: &Alphabet) -> Result<Vec<Digit>, DecodeError> {
    encoded
        .chars()
        .enumerate()
        .map(|(position, c)| {
            alphabet
                .digit(c)
                .ok_or_else(|| DecodeError::invalid_character(c, position, encoded, alphabet.as_str()))
        })
        .collect()
}

/// Zero values at the front of `values`, never counting the last one.
fn count_leading_zeros<T: Copy + Default + PartialEq>(values: &[T]) -> usize {
    let zero = T::default();
    values[..values.len() - 1]
        .iter()
        .take_while(|&&v| v == zero)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(encode_to_digits(&[], 58).is_empty());
        assert!(decode_from_digits(&[], 58).is_empty());
    }

    #[test]
    fn test_empty_input_allowed_for_degenerate_base() {
        assert!(encode_to_digits(&[], 0).is_empty());
        assert!(encode_to_digits(&[], 1).is_empty());
    }

    #[test]
    fn test_single_byte_base10() {
        assert_eq!(encode_to_digits(&[255], 10), vec![2, 5, 5]);
        assert_eq!(decode_from_digits(&[2, 5, 5], 10), vec![255]);
    }

    #[test]
    fn test_multi_byte_base16() {
        assert_eq!(encode_to_digits(&[0x12, 0x34], 16), vec![1, 2, 3, 4]);
        assert_eq!(decode_from_digits(&[1, 2, 3, 4], 16), vec![0x12, 0x34]);
    }

    #[test]
    fn test_leading_zero_padding() {
        assert_eq!(encode_to_digits(&[0, 0, 1], 58), vec![0, 0, 1]);
        assert_eq!(decode_from_digits(&[0, 0, 1], 58), vec![0, 0, 1]);
    }

    #[test]
    fn test_all_zero_input_keeps_length() {
        assert_eq!(encode_to_digits(&[0], 58), vec![0]);
        assert_eq!(encode_to_digits(&[0, 0, 0, 0], 58), vec![0, 0, 0, 0]);
        assert_eq!(decode_from_digits(&[0, 0, 0], 58), vec![0, 0, 0]);
    }

    #[test]
    fn test_large_base() {
        // 0x0400 == 1024 == "10" in base 1024
        assert_eq!(encode_to_digits(&[0x04, 0x00], 1024), vec![1, 0]);
        assert_eq!(decode_from_digits(&[1, 0], 1024), vec![0x04, 0x00]);
        assert_eq!(decode_from_digits(&[1023], 1024), vec![0x03, 0xff]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    #[should_panic(expected = "too large for digit values")]
    fn test_base_beyond_digit_range_panics() {
        encode_to_digits(&[1, 0, 0, 0, 0], (1usize << 32) + 5);
    }

    #[test]
    fn test_largest_char_alphabet_base_fits() {
        // Alphabet bases are char counts, far below Digit::MAX
        let base = char::MAX as usize + 1;
        let digits = encode_to_digits(&[0xff; 8], base);
        assert!(digits.iter().all(|&d| (d as usize) < base));
        assert_eq!(decode_from_digits(&digits, base), vec![0xff; 8]);
    }

    #[test]
    fn test_count_leading_zeros_stops_before_last() {
        assert_eq!(count_leading_zeros(&[0u8, 0, 0]), 2);
        assert_eq!(count_leading_zeros(&[0u8, 7, 0]), 1);
        assert_eq!(count_leading_zeros(&[3u32]), 0);
    }

    #[test]
    fn test_parse_reports_position() {
        let alphabet = Alphabet::new("01");
        match parse("0120", &alphabet) {
            Err(DecodeError::InvalidCharacter { char, position, .. }) => {
                assert_eq!(char, '2');
                assert_eq!(position, 2);
            }
            other => panic!("expected InvalidCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_render() {
        let alphabet = Alphabet::new("abc");
        assert_eq!(render(&[2, 0, 1], &alphabet), "cab");
        assert_eq!(render(&[], &alphabet), "");
    }
}
