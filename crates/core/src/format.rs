//! Projection of canonical bits into external representations.
//!
//! All functions take most-significant-first bits and never modify them.

use crate::error::{RangeError, Result};
use crate::parse::HEX_PREFIX;
use crate::words::{word_from_bits, WORD_TABLE};

/// Widest decimal projection, in significant bits.
pub const MAX_PROJECTION_BITS: usize = u64::BITS as usize;

/// Whether hex output carries the "0x" prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexStyle {
    #[default]
    Prefixed,
    Bare,
}

/// Join bits into a string of '1' and '0' characters.
pub fn to_binary_string(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}

/// Bits as 0/1 integers.
pub fn to_bit_array(bits: &[bool]) -> Vec<u8> {
    bits.iter().map(|&bit| bit as u8).collect()
}

/// Render bits as hex, one digit per 4-bit group.
///
/// Groups are read from the most significant end. A length that is not a
/// multiple of four is treated as if padded with leading zeros; the input is
/// left as is.
pub fn to_hex_string(bits: &[bool], style: HexStyle) -> String {
    let lead = (4 - bits.len() % 4) % 4;
    let mut padded = Vec::with_capacity(bits.len() + lead);
    padded.resize(lead, false);
    padded.extend_from_slice(bits);

    let mut hex = String::with_capacity(HEX_PREFIX.len() + padded.len() / 4);
    if style == HexStyle::Prefixed {
        hex.push_str(HEX_PREFIX);
    }
    for group in padded.chunks_exact(4) {
        let word = word_from_bits(group).unwrap_or(&WORD_TABLE[0]);
        hex.push(word.hex);
    }
    hex
}

/// Number of bits after the leading zeros.
pub fn significant_bits(bits: &[bool]) -> usize {
    bits.iter()
        .position(|&bit| bit)
        .map_or(0, |first| bits.len() - first)
}

/// Weighted sum of the bits, folding from the least significant end.
///
/// # Errors
/// `RangeError::DecimalProjection` if more than [`MAX_PROJECTION_BITS`]
/// significant bits are present.
pub fn to_decimal(bits: &[bool]) -> Result<u64> {
    let significant = significant_bits(bits);
    if significant > MAX_PROJECTION_BITS {
        return Err(RangeError::DecimalProjection {
            significant,
            max_bits: MAX_PROJECTION_BITS,
        }
        .into());
    }

    let mut decimal = 0u64;
    let mut weight = 1u64;
    for &bit in bits.iter().rev().take(significant) {
        if bit {
            decimal += weight;
        }
        weight = weight.wrapping_mul(2);
    }
    Ok(decimal)
}
