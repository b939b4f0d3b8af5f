//! Input validation and normalization into canonical bits.
//!
//! Every branch is all-or-nothing: a single bad digit or element rejects the
//! whole input. On success the returned bits are most-significant first and
//! their length is a positive multiple of [`ALIGNMENT`].
//!
//! # Padding Rules
//! - Decimal, binary string and bit array inputs are left-padded with zeros
//! - Hex digits expand to whole words, so they only need padding when empty
//! - Empty inputs become a single zero word

use crate::error::{ParseError, Radix, RangeError, Result};
use crate::input::{Element, Input};
use crate::value::SourceKind;
use crate::words::{word_from_hex, POWERS_OF_TWO};

/// Number of bits every stored length is rounded up to.
pub const ALIGNMENT: usize = 4;

/// Widest decimal input accepted, in bits.
pub const MAX_DECIMAL_BITS: usize = 32;

/// Prefix that marks a string as hexadecimal.
pub const HEX_PREFIX: &str = "0x";

/// Parse any input into its source kind and canonical bits.
pub fn parse_input(input: &Input) -> Result<(SourceKind, Vec<bool>)> {
    match input {
        Input::Integer(value) => Ok((SourceKind::Decimal, decimal_to_bits(*value)?)),
        Input::Float(value) => Ok((SourceKind::Decimal, float_to_bits(*value)?)),
        Input::Text(text) => {
            let text = text.trim();
            if has_hex_prefix(text) {
                Ok((SourceKind::HexString, hex_str_to_bits(text)?))
            } else {
                Ok((SourceKind::BinaryString, binary_str_to_bits(text)?))
            }
        }
        Input::Array(elements) => Ok((SourceKind::BitArray, array_to_bits(elements)?)),
        Input::Other(desc) => Err(ParseError::InvalidType {
            found: desc.clone(),
        }
        .into()),
    }
}

/// Left-pad with zeros up to the next multiple of [`ALIGNMENT`] (at least one word).
pub fn pad_to_alignment(mut bits: Vec<bool>) -> Vec<bool> {
    let target = aligned_len(bits.len());
    if bits.len() < target {
        let mut padded = vec![false; target - bits.len()];
        padded.append(&mut bits);
        return padded;
    }
    bits
}

/// Smallest positive multiple of [`ALIGNMENT`] that holds `len` bits.
pub fn aligned_len(len: usize) -> usize {
    len.div_ceil(ALIGNMENT).max(1) * ALIGNMENT
}

fn has_hex_prefix(text: &str) -> bool {
    text.get(..HEX_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(HEX_PREFIX))
}

/// Decompose a decimal into bits, most significant first.
///
/// The highest set bit is located by scanning [`POWERS_OF_TWO`], then each
/// power from there down is subtracted whenever it still fits.
///
/// # Errors
/// - `RangeError::Negative` for values below zero
/// - `RangeError::DecimalTooWide` for values needing more than [`MAX_DECIMAL_BITS`] bits
pub fn decimal_to_bits(value: i128) -> Result<Vec<bool>> {
    if value < 0 {
        return Err(RangeError::Negative(value).into());
    }
    if value >= POWERS_OF_TWO[MAX_DECIMAL_BITS] as i128 {
        return Err(RangeError::DecimalTooWide {
            value,
            max_bits: MAX_DECIMAL_BITS,
        }
        .into());
    }

    let mut remaining = value as u64;

    let mut top = 0;
    for index in 0..MAX_DECIMAL_BITS {
        if remaining >= POWERS_OF_TWO[index] && remaining < POWERS_OF_TWO[index + 1] {
            top = index;
            break;
        }
    }

    let mut bits = Vec::with_capacity(top + 1);
    for index in (0..=top).rev() {
        let power = POWERS_OF_TWO[index];
        if remaining >= power {
            remaining -= power;
            bits.push(true);
        } else {
            bits.push(false);
        }
    }

    Ok(pad_to_alignment(bits))
}

/// Accept a float only when it is a finite whole number.
fn float_to_bits(value: f64) -> Result<Vec<bool>> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ParseError::InvalidType {
            found: format!("non-integer number {}", value),
        }
        .into());
    }
    decimal_to_bits(value as i128)
}

/// Parse a trimmed string of '0' and '1' characters.
///
/// # Errors
/// `ParseError::InvalidDigit` at the first character that is not '0' or '1'.
pub fn binary_str_to_bits(text: &str) -> Result<Vec<bool>> {
    let mut bits = Vec::with_capacity(aligned_len(text.len()));
    for (position, digit) in text.chars().enumerate() {
        match digit {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => {
                return Err(ParseError::InvalidDigit {
                    digit,
                    position,
                    radix: Radix::Binary,
                }
                .into())
            }
        }
    }
    Ok(pad_to_alignment(bits))
}

/// Parse a trimmed "0x"-prefixed hex string.
///
/// Digits are uppercased before lookup, so "0xff" and "0xFF" are equal.
/// Reported positions count from the start of the prefix.
///
/// # Errors
/// `ParseError::InvalidDigit` at the first character outside `0-9A-F`.
pub fn hex_str_to_bits(text: &str) -> Result<Vec<bool>> {
    let body = text.get(HEX_PREFIX.len()..).unwrap_or_default();
    let mut bits = Vec::with_capacity(body.len() * 4);
    for (offset, digit) in body.chars().enumerate() {
        let word = word_from_hex(digit.to_ascii_uppercase()).ok_or(ParseError::InvalidDigit {
            digit,
            position: HEX_PREFIX.len() + offset,
            radix: Radix::Hex,
        })?;
        bits.extend_from_slice(&word.bits);
    }
    Ok(pad_to_alignment(bits))
}

/// Parse a sequence of bit-like elements. The caller's slice is never modified.
///
/// # Errors
/// `ParseError::InvalidBitValue` at the first element that is not 0, 1, false or true.
pub fn array_to_bits(elements: &[Element]) -> Result<Vec<bool>> {
    let bits = elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            element.as_bit().ok_or_else(|| ParseError::InvalidBitValue {
                index,
                found: element.to_string(),
            })
        })
        .collect::<std::result::Result<Vec<bool>, ParseError>>()?;
    Ok(pad_to_alignment(bits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};

    fn render(bits: &[bool]) -> String {
        bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }

    #[test]
    fn test_aligned_len() {
        assert_eq!(aligned_len(0), 4);
        assert_eq!(aligned_len(1), 4);
        assert_eq!(aligned_len(4), 4);
        assert_eq!(aligned_len(5), 8);
        assert_eq!(aligned_len(13), 16);
    }

    #[test]
    fn test_decimal() {
        assert_eq!(render(&decimal_to_bits(0).unwrap()), "0000");
        assert_eq!(render(&decimal_to_bits(1).unwrap()), "0001");
        assert_eq!(render(&decimal_to_bits(13).unwrap()), "1101");
        assert_eq!(render(&decimal_to_bits(16).unwrap()), "00010000");
        assert_eq!(render(&decimal_to_bits(20862).unwrap()), "0101000101111110");
        assert_eq!(decimal_to_bits(u32::MAX as i128).unwrap().len(), 32);
    }

    #[test]
    fn test_decimal_bounds() {
        let err = decimal_to_bits(1 << 32).unwrap_err();
        assert_eq!(
            err,
            Error::Range(RangeError::DecimalTooWide {
                value: 1 << 32,
                max_bits: MAX_DECIMAL_BITS,
            })
        );
        assert_eq!(decimal_to_bits(-1).unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_float() {
        assert_eq!(render(&float_to_bits(5.0).unwrap()), "0101");
        assert_eq!(float_to_bits(5.5).unwrap_err().kind(), ErrorKind::InvalidType);
        assert_eq!(float_to_bits(f64::NAN).unwrap_err().kind(), ErrorKind::InvalidType);
        assert_eq!(float_to_bits(-2.0).unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_binary_string() {
        assert_eq!(render(&binary_str_to_bits("101100001").unwrap()), "000101100001");
        assert_eq!(render(&binary_str_to_bits("").unwrap()), "0000");
        assert_eq!(
            binary_str_to_bits("0110103").unwrap_err(),
            Error::Parse(ParseError::InvalidDigit {
                digit: '3',
                position: 6,
                radix: Radix::Binary,
            })
        );
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(render(&hex_str_to_bits("0x517E").unwrap()), "0101000101111110");
        assert_eq!(render(&hex_str_to_bits("0x0f").unwrap()), "00001111");
        assert_eq!(render(&hex_str_to_bits("0x").unwrap()), "0000");
        assert_eq!(
            hex_str_to_bits("0x34L1").unwrap_err(),
            Error::Parse(ParseError::InvalidDigit {
                digit: 'L',
                position: 4,
                radix: Radix::Hex,
            })
        );
    }

    #[test]
    fn test_array() {
        let elements: Vec<Element> = [1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0]
            .into_iter()
            .map(Element::from)
            .collect();
        assert_eq!(render(&array_to_bits(&elements).unwrap()), "0001000010100000");
        assert_eq!(elements.len(), 13);

        let bad: Vec<Element> = [1, 2, 0, 1].into_iter().map(Element::from).collect();
        assert_eq!(
            array_to_bits(&bad).unwrap_err(),
            Error::Parse(ParseError::InvalidBitValue {
                index: 1,
                found: "2".to_string(),
            })
        );
    }

    #[test]
    fn test_dispatch() {
        let (kind, _) = parse_input(&Input::from("  0x1F ")).unwrap();
        assert_eq!(kind, SourceKind::HexString);
        let (kind, _) = parse_input(&Input::from("0X1F")).unwrap();
        assert_eq!(kind, SourceKind::HexString);
        let (kind, bits) = parse_input(&Input::from(" 11 ")).unwrap();
        assert_eq!(kind, SourceKind::BinaryString);
        assert_eq!(render(&bits), "0011");
        assert_eq!(
            parse_input(&Input::Other("{}".to_string())).unwrap_err().kind(),
            ErrorKind::InvalidType
        );
    }
}
