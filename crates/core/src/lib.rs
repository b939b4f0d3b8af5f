//! bindata-core: a word-aligned binary value with decimal, hex and binary views
//!
//! This library provides a single value type, [`BinaryValue`], that:
//! - Parses decimals, binary strings, "0x" hex strings and bit arrays
//! - Stores one canonical most-significant-first bit sequence
//! - Projects that sequence back out as binary, hex, decimal or bit array
//! - Supports AND/OR/XOR/NOT, single-bit writes, concatenation and shifts
//!
//! # Architecture
//!
//! - `input`: the accepted input shapes
//! - `words`: 4-bit word and power-of-two lookup tables
//! - `parse`: validation and alignment padding
//! - `format`: projections out of the canonical bits
//! - `value`: the value type and its operators
//! - `error`: structured errors
//!
//! # Design Principles
//!
//! - **No panics**: bad input becomes an error or the Invalid state
//! - **Aligned**: every stored length is a positive multiple of [`ALIGNMENT`]
//! - **Reconstruct on mutate**: operators reassign through validation
//! - **Quiet**: the core never logs; callers decide what to report

pub mod error;
pub mod format;
pub mod input;
pub mod parse;
pub mod value;
pub mod words;

// Re-export commonly used types
pub use error::{Error, ErrorKind, ParseError, RangeError, Result};
pub use format::HexStyle;
pub use input::{Element, Input};
pub use parse::{ALIGNMENT, HEX_PREFIX, MAX_DECIMAL_BITS};
pub use value::{BinaryValue, SourceKind};
