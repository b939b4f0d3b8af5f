//! The binary value type.
//!
//! A [`BinaryValue`] stores one canonical bit sequence (most significant bit
//! first, length a positive multiple of [`ALIGNMENT`](crate::ALIGNMENT)) and derives every
//! other view from it on demand.
//!
//! # Mutation
//!
//! Operators never twiddle the stored bits. They compute a fresh sequence or
//! decimal and reassign it through the same validation path as
//! [`BinaryValue::assign`], so the width invariant holds after every call.
//!
//! - `and`/`or`/`xor` reassign through the decimal path: the result width
//!   follows the result magnitude (`13 & 11` is `1001`, not `00001001`).
//! - `not` and the structural operators reassign through the bit-array path
//!   and keep the width they computed.
//!
//! A failed operator leaves the value exactly as it was.
//!
//! # Example
//! ```
//! use bindata_core::{BinaryValue, SourceKind};
//!
//! let mut value = BinaryValue::new(13);
//! assert_eq!(value.to_binary_string(), "1101");
//! assert_eq!(value.and(11).unwrap(), "1001");
//!
//! value.assign("0x34L1").unwrap_err();
//! assert_eq!(value.source_kind(), SourceKind::Invalid);
//! assert_eq!(value.len(), 0);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ParseError, RangeError, Result};
use crate::format::{self, HexStyle};
use crate::input::{Element, Input};
use crate::parse::{parse_input, MAX_DECIMAL_BITS};

/// How the current raw input was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Decimal,
    BinaryString,
    HexString,
    BitArray,
    /// The last assignment failed validation
    Invalid,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            SourceKind::Decimal => "decimal",
            SourceKind::BinaryString => "binaryString",
            SourceKind::HexString => "hexString",
            SourceKind::BitArray => "binaryArray",
            SourceKind::Invalid => "error",
        };
        f.write_str(tag)
    }
}

/// A bit sequence with decimal, hex and binary views.
///
/// # Invariants
/// - valid: `bits.len()` is a positive multiple of [`ALIGNMENT`](crate::ALIGNMENT)
/// - Invalid: `kind == SourceKind::Invalid` and `bits` is empty
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryValue {
    /// Input exactly as supplied to the last assignment
    raw: Input,
    kind: SourceKind,
    /// Canonical bits, most significant first
    bits: Vec<bool>,
}

impl BinaryValue {
    /// Create a value from any supported input.
    ///
    /// Invalid input yields a value in the Invalid state; use
    /// [`try_new`](Self::try_new) to get the error instead.
    pub fn new(input: impl Into<Input>) -> Self {
        let mut value = Self::invalid(Input::Other("unassigned".to_string()));
        // The error is recorded as the Invalid state.
        let _ = value.assign(input);
        value
    }

    /// Create a value, returning the parse error for invalid input.
    pub fn try_new(input: impl Into<Input>) -> Result<Self> {
        let mut value = Self::invalid(Input::Other("unassigned".to_string()));
        value.assign(input)?;
        Ok(value)
    }

    fn invalid(raw: Input) -> Self {
        Self {
            raw,
            kind: SourceKind::Invalid,
            bits: Vec::new(),
        }
    }

    /// Replace the whole value with a new input.
    ///
    /// Raw input, source kind and bits are replaced together. On failure the
    /// value keeps the rejected raw input and moves to the Invalid state.
    ///
    /// # Errors
    /// - `ParseError::InvalidType` for unsupported shapes and fractional numbers
    /// - `ParseError::InvalidDigit` for a bad binary or hex character
    /// - `ParseError::InvalidBitValue` for an array element other than 0/1
    /// - `RangeError` for negative decimals or decimals wider than 32 bits
    pub fn assign(&mut self, input: impl Into<Input>) -> Result<()> {
        let raw = input.into();
        match parse_input(&raw) {
            Ok((kind, bits)) => {
                *self = Self { raw, kind, bits };
                Ok(())
            }
            Err(err) => {
                *self = Self::invalid(raw);
                Err(err)
            }
        }
    }

    /// The input of the last assignment, as supplied.
    pub fn raw(&self) -> &Input {
        &self.raw
    }

    pub fn source_kind(&self) -> SourceKind {
        self.kind
    }

    pub fn is_valid(&self) -> bool {
        self.kind != SourceKind::Invalid
    }

    /// Bit length, or 0 when Invalid.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True only in the Invalid state; valid values hold at least one word.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits as a string of '1' and '0', or an empty string when Invalid.
    pub fn to_binary_string(&self) -> String {
        format::to_binary_string(&self.bits)
    }

    /// A copy of the bits as 0/1 integers, empty when Invalid.
    pub fn to_bit_array(&self) -> Vec<u8> {
        format::to_bit_array(&self.bits)
    }

    /// Hex rendering with the "0x" prefix, or an empty string when Invalid.
    pub fn to_hex_string(&self) -> String {
        self.to_hex_string_with(HexStyle::Prefixed)
    }

    pub fn to_hex_string_with(&self, style: HexStyle) -> String {
        if !self.is_valid() {
            return String::new();
        }
        format::to_hex_string(&self.bits, style)
    }

    /// Decimal value of the bits.
    ///
    /// # Errors
    /// - `Error::InvalidState` when Invalid
    /// - `RangeError::DecimalProjection` past 64 significant bits
    pub fn try_to_decimal(&self) -> Result<u64> {
        format::to_decimal(self.valid_bits()?)
    }

    /// Decimal value of the bits, or 0 when it cannot be produced.
    pub fn to_decimal(&self) -> u64 {
        self.try_to_decimal().unwrap_or(0)
    }

    /// Read the bit at `position`, counted from the least significant end.
    pub fn get_bit(&self, position: usize) -> Option<bool> {
        let len = self.bits.len();
        if position >= len {
            return None;
        }
        Some(self.bits[len - 1 - position])
    }

    fn valid_bits(&self) -> Result<&[bool]> {
        if !self.is_valid() {
            return Err(Error::InvalidState);
        }
        Ok(&self.bits)
    }

    ////////////////////////
    // Bitwise operations //
    ////////////////////////

    /// Bitwise AND with `operand`; returns the new binary string.
    pub fn and(&mut self, operand: impl Into<Input>) -> Result<String> {
        self.combine(operand.into(), |lhs, rhs| lhs & rhs)
    }

    /// Bitwise OR with `operand`; returns the new binary string.
    pub fn or(&mut self, operand: impl Into<Input>) -> Result<String> {
        self.combine(operand.into(), |lhs, rhs| lhs | rhs)
    }

    /// Bitwise XOR with `operand`; returns the new binary string.
    pub fn xor(&mut self, operand: impl Into<Input>) -> Result<String> {
        self.combine(operand.into(), |lhs, rhs| lhs ^ rhs)
    }

    /// Flip every stored bit, keeping the width; returns the new binary string.
    #[allow(clippy::should_implement_trait)]
    pub fn not(&mut self) -> Result<String> {
        let flipped = self.valid_bits()?.iter().map(|&bit| !bit).collect();
        self.reassign_bits(flipped)?;
        Ok(self.to_binary_string())
    }

    fn combine(&mut self, operand: Input, op: impl FnOnce(u64, u64) -> u64) -> Result<String> {
        let lhs = decimal_operand(self.valid_bits()?)?;
        let (_, operand_bits) = parse_input(&operand)?;
        let rhs = decimal_operand(&operand_bits)?;
        self.assign(op(lhs, rhs))?;
        Ok(self.to_binary_string())
    }

    ///////////////////////////
    // Structural operations //
    ///////////////////////////

    /// Set the bit at `position` (from the least significant end) to 0 or 1.
    ///
    /// # Errors
    /// - `RangeError::BitPosition` if `position >= len()`
    /// - `ParseError::InvalidBitValue` if `value` is not 0, 1, false or true
    pub fn set_bit(&mut self, position: usize, value: impl Into<Element>) -> Result<()> {
        let bits = self.valid_bits()?;
        let len = bits.len();
        if position >= len {
            return Err(RangeError::BitPosition { position, len }.into());
        }
        let element = value.into();
        let bit = element.as_bit().ok_or_else(|| ParseError::InvalidBitValue {
            index: position,
            found: element.to_string(),
        })?;

        let mut updated = bits.to_vec();
        updated[len - 1 - position] = bit;
        self.reassign_bits(updated)
    }

    /// Prepend the operand's own normalized bits on the most significant side.
    pub fn left_add(&mut self, operand: impl Into<Input>) -> Result<()> {
        let bits = self.valid_bits()?;
        let (_, mut joined) = parse_input(&operand.into())?;
        joined.extend_from_slice(bits);
        self.reassign_bits(joined)
    }

    /// Append the operand's own normalized bits on the least significant side.
    pub fn right_add(&mut self, operand: impl Into<Input>) -> Result<()> {
        let mut joined = self.valid_bits()?.to_vec();
        let (_, operand_bits) = parse_input(&operand.into())?;
        joined.extend(operand_bits);
        self.reassign_bits(joined)
    }

    /// Logical shift towards the most significant end within the current width.
    pub fn left_shift(&mut self, n: usize) -> Result<()> {
        let bits = self.valid_bits()?;
        let n = n.min(bits.len());
        let mut shifted = bits[n..].to_vec();
        shifted.resize(bits.len(), false);
        self.reassign_bits(shifted)
    }

    /// Logical shift towards the least significant end within the current width.
    pub fn right_shift(&mut self, n: usize) -> Result<()> {
        let bits = self.valid_bits()?;
        let n = n.min(bits.len());
        let mut shifted = vec![false; n];
        shifted.extend_from_slice(&bits[..bits.len() - n]);
        self.reassign_bits(shifted)
    }

    fn reassign_bits(&mut self, bits: Vec<bool>) -> Result<()> {
        self.assign(bits)
    }
}

/// Decimal projection of an operand, bounded so the result can be reassigned
/// through the decimal path.
fn decimal_operand(bits: &[bool]) -> Result<u64> {
    let significant = format::significant_bits(bits);
    if significant > MAX_DECIMAL_BITS {
        return Err(RangeError::DecimalProjection {
            significant,
            max_bits: MAX_DECIMAL_BITS,
        }
        .into());
    }
    format::to_decimal(bits)
}

impl Default for BinaryValue {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Display for BinaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_binary_string())
    }
}

impl fmt::Binary for BinaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.to_binary_string())
    }
}

impl fmt::UpperHex for BinaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_hex_string_with(HexStyle::Bare))
    }
}

impl FromStr for BinaryValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_new(s)
    }
}
