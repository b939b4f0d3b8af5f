//! Operation tokens for `bindata eval`.
//!
//! # Syntax
//!
//! ```text
//! and:<x>  or:<x>  xor:<x>  not
//! set:<pos>=<bit>
//! ladd:<x> radd:<x>
//! shl:<n>  shr:<n>
//! ```
//!
//! Operands (`<x>`) use the same literal rules as the main input.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use bindata_core::{BinaryValue, Element, Input};

use crate::json::{parse_element, parse_literal};

/// One operation applied to a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    And(Input),
    Or(Input),
    Xor(Input),
    Not,
    SetBit { position: usize, bit: Element },
    LeftAdd(Input),
    RightAdd(Input),
    LeftShift(usize),
    RightShift(usize),
}

impl Op {
    /// Apply to `value`. On error the value is unchanged.
    pub fn apply(&self, value: &mut BinaryValue) -> bindata_core::Result<()> {
        match self {
            Op::And(operand) => value.and(operand).map(drop),
            Op::Or(operand) => value.or(operand).map(drop),
            Op::Xor(operand) => value.xor(operand).map(drop),
            Op::Not => value.not().map(drop),
            Op::SetBit { position, bit } => value.set_bit(*position, bit.clone()),
            Op::LeftAdd(operand) => value.left_add(operand),
            Op::RightAdd(operand) => value.right_add(operand),
            Op::LeftShift(n) => value.left_shift(*n),
            Op::RightShift(n) => value.right_shift(*n),
        }
    }
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(token: &str) -> anyhow::Result<Self> {
        let (name, arg) = match token.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (token, None),
        };
        let arg = || arg.ok_or_else(|| anyhow!("{} requires an argument", name));

        let op = match name {
            "and" => Op::And(parse_literal(arg()?)),
            "or" => Op::Or(parse_literal(arg()?)),
            "xor" => Op::Xor(parse_literal(arg()?)),
            "not" => Op::Not,
            "ladd" => Op::LeftAdd(parse_literal(arg()?)),
            "radd" => Op::RightAdd(parse_literal(arg()?)),
            "shl" => Op::LeftShift(arg()?.parse().context("invalid shift amount")?),
            "shr" => Op::RightShift(arg()?.parse().context("invalid shift amount")?),
            "set" => {
                let (position, bit) = arg()?
                    .split_once('=')
                    .ok_or_else(|| anyhow!("set expects <pos>=<bit>"))?;
                Op::SetBit {
                    position: position.parse().context("invalid bit position")?,
                    bit: parse_element(bit),
                }
            }
            _ => bail!("unknown operation: {}", token),
        };
        Ok(op)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::And(x) => write!(f, "and:{}", x),
            Op::Or(x) => write!(f, "or:{}", x),
            Op::Xor(x) => write!(f, "xor:{}", x),
            Op::Not => f.write_str("not"),
            Op::SetBit { position, bit } => write!(f, "set:{}={}", position, bit),
            Op::LeftAdd(x) => write!(f, "ladd:{}", x),
            Op::RightAdd(x) => write!(f, "radd:{}", x),
            Op::LeftShift(n) => write!(f, "shl:{}", n),
            Op::RightShift(n) => write!(f, "shr:{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("and:11".parse::<Op>().unwrap(), Op::And(Input::Integer(11)));
        assert_eq!("not".parse::<Op>().unwrap(), Op::Not);
        assert_eq!("shl:3".parse::<Op>().unwrap(), Op::LeftShift(3));
        assert_eq!(
            "radd:0xA".parse::<Op>().unwrap(),
            Op::RightAdd(Input::Text("0xA".to_string()))
        );
        assert_eq!(
            "set:2=1".parse::<Op>().unwrap(),
            Op::SetBit {
                position: 2,
                bit: Element::Int(1)
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("and".parse::<Op>().is_err());
        assert!("shl:-1".parse::<Op>().is_err());
        assert!("set:3".parse::<Op>().is_err());
        assert!("rotate:1".parse::<Op>().is_err());
    }

    #[test]
    fn test_apply_chain() {
        let mut value = BinaryValue::new(13);
        for token in ["and:11", "not", "set:3=0", "ladd:\"1\"", "shr:1"] {
            token.parse::<Op>().unwrap().apply(&mut value).unwrap();
        }
        // 1001 -> 0110 -> 0110 -> 0001 0110 -> 0000 1011
        assert_eq!(value.to_binary_string(), "00001011");
    }

    #[test]
    fn test_apply_failure_keeps_value() {
        let mut value = BinaryValue::new(5);
        let op: Op = "set:9=1".parse().unwrap();
        assert!(op.apply(&mut value).is_err());
        assert_eq!(value.to_decimal(), 5);
    }
}
