//! Seeded input generation for the self-check.
//!
//! # Design
//!
//! Valid inputs cover every source kind with varied widths:
//! - Decimals spread across magnitudes (not just large ones)
//! - Binary strings from empty up to 40 characters
//! - Hex strings in mixed case, including the bare "0x"
//! - Bit arrays of ints and booleans
//!
//! Invalid inputs carry exactly one defect each, so a rejection can only
//! come from that defect.

use bindata_core::{Element, Input, MAX_DECIMAL_BITS};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const HEX_DIGITS: &[u8] = b"0123456789abcdefABCDEF";
const BAD_BINARY_CHARS: &[u8] = b"23456789abcdefgz.-";
const BAD_HEX_CHARS: &[u8] = b"gGhHlLzZ.-";

/// Generate `count` valid inputs of mixed kinds.
pub fn generate_inputs(seed: u64, count: usize) -> Vec<Input> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| random_input(&mut rng)).collect()
}

/// Generate `count` inputs that must each be rejected.
pub fn generate_invalid(seed: u64, count: usize) -> Vec<Input> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| random_invalid(&mut rng)).collect()
}

fn random_input(rng: &mut ChaCha8Rng) -> Input {
    match rng.gen_range(0..4) {
        0 => {
            let shift = rng.gen_range(0..MAX_DECIMAL_BITS as u32);
            Input::from(rng.gen::<u32>() >> shift)
        }
        1 => Input::Text(random_binary(rng, 40)),
        2 => {
            let len = rng.gen_range(0..=10);
            let digits: String = (0..len)
                .map(|_| HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char)
                .collect();
            Input::Text(format!("0x{}", digits))
        }
        _ => {
            let len = rng.gen_range(0..=40);
            let as_bools: bool = rng.gen();
            Input::Array(
                (0..len)
                    .map(|_| {
                        let bit: bool = rng.gen();
                        if as_bools {
                            Element::Bool(bit)
                        } else {
                            Element::Int(bit as i64)
                        }
                    })
                    .collect(),
            )
        }
    }
}

fn random_invalid(rng: &mut ChaCha8Rng) -> Input {
    match rng.gen_range(0..6) {
        0 => {
            let mut text = random_binary(rng, 20);
            let at = rng.gen_range(0..=text.len());
            text.insert(at, BAD_BINARY_CHARS[rng.gen_range(0..BAD_BINARY_CHARS.len())] as char);
            Input::Text(text)
        }
        1 => {
            let mut digits: Vec<char> = (0..rng.gen_range(0..8))
                .map(|_| HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char)
                .collect();
            let at = rng.gen_range(0..=digits.len());
            digits.insert(at, BAD_HEX_CHARS[rng.gen_range(0..BAD_HEX_CHARS.len())] as char);
            Input::Text(format!("0x{}", digits.into_iter().collect::<String>()))
        }
        2 => {
            let mut elements: Vec<Element> = (0..rng.gen_range(0..20))
                .map(|_| Element::Int(rng.gen_range(0..=1)))
                .collect();
            let at = rng.gen_range(0..=elements.len());
            let bad = if rng.gen() {
                rng.gen_range(2..10)
            } else {
                -rng.gen_range(1..10)
            };
            elements.insert(at, Element::Int(bad));
            Input::Array(elements)
        }
        3 => Input::Integer(-(rng.gen_range(1..=u32::MAX as i128))),
        4 => Input::Integer(rng.gen_range((1i128 << MAX_DECIMAL_BITS)..(1i128 << 60))),
        _ => Input::Float(rng.gen_range(0u32..1000) as f64 + 0.5),
    }
}

fn random_binary(rng: &mut ChaCha8Rng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| if rng.gen() { '1' } else { '0' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_counts() {
        assert_eq!(generate_inputs(42, 100).len(), 100);
        assert_eq!(generate_invalid(42, 0).len(), 0);
    }

    #[test]
    fn test_determinism() {
        assert_eq!(generate_inputs(12345, 50), generate_inputs(12345, 50));
        assert_eq!(generate_invalid(12345, 50), generate_invalid(12345, 50));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(generate_inputs(1, 50), generate_inputs(2, 50));
    }

    #[test]
    fn test_covers_every_kind() {
        let inputs = generate_inputs(7, 200);
        assert!(inputs.iter().any(|i| matches!(i, Input::Integer(_))));
        assert!(inputs.iter().any(|i| matches!(i, Input::Array(_))));
        assert!(inputs
            .iter()
            .any(|i| matches!(i, Input::Text(t) if t.starts_with("0x"))));
        assert!(inputs
            .iter()
            .any(|i| matches!(i, Input::Text(t) if !t.starts_with("0x"))));
    }
}
