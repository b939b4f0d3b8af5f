//! Human-readable and JSON reports of a value's views.

use bindata_core::{BinaryValue, HexStyle};
use serde::Serialize;
use serde_json::Value;

use crate::json::input_to_json;

/// Every view of one value, captured at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub raw: Value,
    pub kind: String,
    pub valid: bool,
    pub length: usize,
    pub binary: String,
    pub hex: String,
    /// None when Invalid or too wide for a decimal projection
    pub decimal: Option<u64>,
    pub bits: Vec<u8>,
}

impl Report {
    pub fn from_value(value: &BinaryValue, hex_style: HexStyle) -> Self {
        Self {
            raw: input_to_json(value.raw()),
            kind: value.source_kind().to_string(),
            valid: value.is_valid(),
            length: value.len(),
            binary: value.to_binary_string(),
            hex: value.to_hex_string_with(hex_style),
            decimal: value.try_to_decimal().ok(),
            bits: value.to_bit_array(),
        }
    }

    /// Print the report in human-readable form.
    pub fn print(&self) {
        print!("{}", self.export_text());
    }

    /// Export as `key=value` lines (for parsing/testing).
    pub fn export_text(&self) -> String {
        let decimal = self
            .decimal
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        let bits: Vec<String> = self.bits.iter().map(|b| b.to_string()).collect();
        format!(
            "raw={}\n\
             kind={}\n\
             length={}\n\
             binary={}\n\
             hex={}\n\
             decimal={}\n\
             bits=[{}]\n",
            self.raw,
            self.kind,
            self.length,
            self.binary,
            self.hex,
            decimal,
            bits.join(",")
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report() {
        let report = Report::from_value(&BinaryValue::new(13), HexStyle::Prefixed);
        assert_eq!(
            report.export_text(),
            "raw=13\nkind=decimal\nlength=4\nbinary=1101\nhex=0xD\ndecimal=13\nbits=[1,1,0,1]\n"
        );
    }

    #[test]
    fn test_invalid_report() {
        let report = Report::from_value(&BinaryValue::new("0x34L1"), HexStyle::Bare);
        assert!(!report.valid);
        assert_eq!(report.kind, "error");
        assert_eq!(report.length, 0);
        assert_eq!(report.decimal, None);
        assert!(report.export_text().contains("decimal=-\n"));
    }

    #[test]
    fn test_json_report() {
        let report = Report::from_value(&BinaryValue::new("0x517E"), HexStyle::Bare);
        let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["hex"], "517E");
        assert_eq!(json["decimal"], 20862);
        assert_eq!(json["kind"], "hexString");
        assert_eq!(json["raw"], "0x517E");
    }
}
