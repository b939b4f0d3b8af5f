//! Lookup tables shared by parsing and formatting.
//!
//! A word is one 4-bit group. Hex digits map to and from words through
//! [`WORD_TABLE`] rather than arithmetic, and decimal decomposition walks
//! [`POWERS_OF_TWO`].

/// A 4-bit word as bits and as a hex digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    /// Bits, most significant first
    pub bits: [bool; 4],
    /// Uppercase hex digit
    pub hex: char,
}

const fn word(decimal: u8, hex: char) -> Word {
    Word {
        bits: [
            decimal & 0b1000 != 0,
            decimal & 0b0100 != 0,
            decimal & 0b0010 != 0,
            decimal & 0b0001 != 0,
        ],
        hex,
    }
}

/// Every word from 0000 to 1111.
pub const WORD_TABLE: [Word; 16] = [
    word(0, '0'),
    word(1, '1'),
    word(2, '2'),
    word(3, '3'),
    word(4, '4'),
    word(5, '5'),
    word(6, '6'),
    word(7, '7'),
    word(8, '8'),
    word(9, '9'),
    word(10, 'A'),
    word(11, 'B'),
    word(12, 'C'),
    word(13, 'D'),
    word(14, 'E'),
    word(15, 'F'),
];

/// Powers of two from 2^0 up to and including 2^32.
pub const POWERS_OF_TWO: [u64; 33] = {
    let mut table = [0u64; 33];
    let mut i = 0;
    while i < table.len() {
        table[i] = 1 << i;
        i += 1;
    }
    table
};

/// Find the word for an uppercase hex digit.
pub fn word_from_hex(digit: char) -> Option<&'static Word> {
    WORD_TABLE.iter().find(|w| w.hex == digit)
}

/// Find the word for exactly four bits, most significant first.
pub fn word_from_bits(bits: &[bool]) -> Option<&'static Word> {
    WORD_TABLE.iter().find(|w| w.bits[..] == *bits)
}
