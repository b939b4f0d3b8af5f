//! Self-check: fixed scenarios plus seeded randomized properties.
//!
//! Each check records a named pass/fail into [`CheckStats`]. Failures are
//! logged at `warn` with the offending input; passes at `debug`.
//!
//! # Checked properties
//! - decimal and bit-array round-trips
//! - hex output decodes to the binary string
//! - length is a positive multiple of the alignment unit
//! - NOT applied twice restores the bits
//! - malformed inputs end in the Invalid state with nothing stored

use bindata_core::{BinaryValue, Input, SourceKind, ALIGNMENT};
use serde::Serialize;
use tracing::{debug, warn};

use crate::sample_gen::{generate_inputs, generate_invalid};

/// Pass/fail counters for a self-check run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckStats {
    pub seed: u64,
    pub passed: u64,
    pub failed: u64,
    /// Names of failed checks, in order
    pub failures: Vec<String>,
}

impl CheckStats {
    pub fn total(&self) -> u64 {
        self.passed + self.failed
    }

    pub fn succeeded(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, name: &str, input: &Input, ok: bool) {
        if ok {
            debug!(check = name, input = %input, "passed");
            self.passed += 1;
        } else {
            warn!(check = name, input = %input, "failed");
            self.failed += 1;
            self.failures.push(format!("{} ({})", name, input));
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("=============");
        println!("Testing Stats");
        println!("-------------");
        println!("Seed:   {}", self.seed);
        println!("Passed: {}", self.passed);
        println!("Failed: {}", self.failed);
        println!("Total:  {}", self.total());
        println!("=============");
        for failure in &self.failures {
            println!("✗ {}", failure);
        }
    }
}

/// Run the scenarios and `cases` generated inputs from `seed`.
pub fn run(seed: u64, cases: usize) -> CheckStats {
    let mut stats = CheckStats {
        seed,
        ..CheckStats::default()
    };

    check_scenarios(&mut stats);

    for input in generate_inputs(seed, cases) {
        check_properties(&mut stats, input);
    }
    for input in generate_invalid(seed.wrapping_add(1), cases / 4 + 1) {
        check_rejected(&mut stats, input);
    }

    stats
}

fn check_scenarios(stats: &mut CheckStats) {
    let views = |input: Input, binary: &str, length: usize, hex: &str, decimal: u64| {
        let value = BinaryValue::new(input);
        value.to_binary_string() == binary
            && value.len() == length
            && value.to_hex_string() == hex
            && value.to_decimal() == decimal
    };

    let cases: [(&str, Input, &str, usize, &str, u64); 4] = [
        ("decimal value", Input::from(20862), "0101000101111110", 16, "0x517E", 20862),
        ("hex value", Input::from("0x517E"), "0101000101111110", 16, "0x517E", 20862),
        ("binary string", Input::from("101100001"), "000101100001", 12, "0x161", 353),
        (
            "bit array",
            Input::from([1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0]),
            "0001000010100000",
            16,
            "0x10A0",
            4256,
        ),
    ];
    for (name, input, binary, length, hex, decimal) in cases {
        let ok = views(input.clone(), binary, length, hex, decimal);
        stats.record(name, &input, ok);
    }

    let operator = |start: u32, op: fn(&mut BinaryValue) -> bindata_core::Result<String>, expected: &str| {
        let mut value = BinaryValue::new(start);
        op(&mut value).is_ok_and(|binary| binary == expected)
    };
    let ops: [(&str, u32, fn(&mut BinaryValue) -> bindata_core::Result<String>, &str); 4] = [
        ("bitwise and", 13, |v| v.and(11), "1001"),
        ("bitwise not", 1, |v| v.not(), "1110"),
        ("bitwise or", 1, |v| v.or(2), "0011"),
        ("bitwise xor", 5, |v| v.xor(3), "0110"),
    ];
    for (name, start, op, expected) in ops {
        stats.record(name, &Input::from(start), operator(start, op, expected));
    }

    for input in [
        Input::Other("{}".to_string()),
        Input::from("01101031"),
        Input::from([1, 2, 0, 1, 0, 1]),
        Input::from("0x34L1"),
    ] {
        check_rejected(stats, input);
    }
}

fn check_properties(stats: &mut CheckStats, input: Input) {
    let value = BinaryValue::new(input.clone());
    if !value.is_valid() {
        stats.record("generated input accepted", &input, false);
        return;
    }

    let aligned = !value.is_empty() && value.len() % ALIGNMENT == 0;
    stats.record("width aligned", &input, aligned);

    let hex = value.to_hex_string();
    stats.record(
        "hex matches binary",
        &input,
        hex_to_binary(&hex).as_deref() == Some(value.to_binary_string().as_str()),
    );

    let mut flipped = value.clone();
    let involution = flipped.not().is_ok()
        && flipped.not().is_ok()
        && flipped.to_binary_string() == value.to_binary_string();
    stats.record("not involution", &input, involution);

    match &input {
        Input::Integer(decimal) => {
            let round_trip = value.try_to_decimal().ok().map(i128::from) == Some(*decimal);
            stats.record("decimal round trip", &input, round_trip);
        }
        Input::Array(elements) => {
            let mut expected = vec![0u8; value.len().saturating_sub(elements.len())];
            expected.extend(elements.iter().map(|e| e.as_bit().map_or(2, u8::from)));
            stats.record("bit array round trip", &input, value.to_bit_array() == expected);
        }
        _ => {}
    }
}

fn check_rejected(stats: &mut CheckStats, input: Input) {
    let mut value = BinaryValue::new(7);
    let rejected = value.assign(input.clone()).is_err()
        && value.source_kind() == SourceKind::Invalid
        && value.len() == 0
        && value.to_binary_string().is_empty();
    stats.record("rejected atomically", &input, rejected);
}

/// Expand "0x..." digit by digit into 4-bit groups.
fn hex_to_binary(hex: &str) -> Option<String> {
    hex.strip_prefix("0x")?
        .chars()
        .map(|digit| digit.to_digit(16).map(|d| format!("{:04b}", d)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_passes() {
        let stats = run(42, 64);
        assert!(stats.succeeded(), "failures: {:?}", stats.failures);
        assert!(stats.total() > 64);
        assert_eq!(stats.seed, 42);
    }

    #[test]
    fn test_run_is_deterministic() {
        let a = run(9, 32);
        let b = run(9, 32);
        assert_eq!(a.passed, b.passed);
        assert_eq!(a.failed, b.failed);
    }

    #[test]
    fn test_hex_to_binary() {
        assert_eq!(hex_to_binary("0x1F").as_deref(), Some("00011111"));
        assert_eq!(hex_to_binary("1F"), None);
        assert_eq!(hex_to_binary("0xG"), None);
    }

    #[test]
    fn test_record_failure() {
        let mut stats = CheckStats::default();
        stats.record("example", &Input::from(1), false);
        assert!(!stats.succeeded());
        assert_eq!(stats.failures, vec!["example (1)".to_string()]);
    }
}
