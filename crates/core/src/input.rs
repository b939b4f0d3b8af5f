//! Raw input accepted by [`BinaryValue`](crate::BinaryValue).
//!
//! An input is exactly one of a number, a string or a sequence of bit-like
//! elements. Shapes that fit none of those are still representable (as
//! [`Input::Other`] or [`Element::Other`]) so that they can be rejected with a
//! proper error instead of being unrepresentable at the call site.

use std::fmt;

/// One input snapshot, kept verbatim for introspection.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Whole number (negative values are rejected during parsing)
    Integer(i128),

    /// Floating point number; only finite whole values are accepted
    Float(f64),

    /// Binary string, or hex string when prefixed with "0x"
    Text(String),

    /// Sequence of bit-like elements
    Array(Vec<Element>),

    /// Anything else, described for diagnostics
    Other(String),
}

/// A single element of an [`Input::Array`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Int(i64),
    Bool(bool),
    /// Unsupported element, described for diagnostics
    Other(String),
}

impl Element {
    /// The bit this element stands for, if it is exactly 0 or 1.
    pub fn as_bit(&self) -> Option<bool> {
        match self {
            Element::Int(0) | Element::Bool(false) => Some(false),
            Element::Int(1) | Element::Bool(true) => Some(true),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Int(v) => write!(f, "{}", v),
            Element::Bool(b) => write!(f, "{}", b),
            Element::Other(desc) => f.write_str(desc),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Integer(v) => write!(f, "{}", v),
            Input::Float(v) => write!(f, "{}", v),
            Input::Text(s) => write!(f, "{:?}", s),
            Input::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                f.write_str("]")
            }
            Input::Other(desc) => f.write_str(desc),
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Input {
                fn from(value: $t) -> Self {
                    Input::Integer(value as i128)
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, i128);

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input::Float(value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<&String> for Input {
    fn from(value: &String) -> Self {
        Input::Text(value.clone())
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Element::Bool(value)
    }
}

impl From<u8> for Element {
    fn from(value: u8) -> Self {
        Element::Int(value as i64)
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Element::Int(value as i64)
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Int(value)
    }
}

impl<T: Into<Element>> From<Vec<T>> for Input {
    fn from(values: Vec<T>) -> Self {
        Input::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Element> + Clone> From<&[T]> for Input {
    fn from(values: &[T]) -> Self {
        Input::Array(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Element>, const N: usize> From<[T; N]> for Input {
    fn from(values: [T; N]) -> Self {
        Input::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<&Input> for Input {
    fn from(value: &Input) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Input::from(20862u32), Input::Integer(20862));
        assert_eq!(Input::from(-3i64), Input::Integer(-3));
        assert_eq!(Input::from("0x1F"), Input::Text("0x1F".to_string()));
        assert_eq!(
            Input::from([1, 0, 1]),
            Input::Array(vec![Element::Int(1), Element::Int(0), Element::Int(1)])
        );
        assert_eq!(
            Input::from(vec![true, false]),
            Input::Array(vec![Element::Bool(true), Element::Bool(false)])
        );
    }

    #[test]
    fn test_element_as_bit() {
        assert_eq!(Element::Int(0).as_bit(), Some(false));
        assert_eq!(Element::Int(1).as_bit(), Some(true));
        assert_eq!(Element::Bool(true).as_bit(), Some(true));
        assert_eq!(Element::Int(2).as_bit(), None);
        assert_eq!(Element::Int(-1).as_bit(), None);
        assert_eq!(Element::Other("{}".to_string()).as_bit(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Input::from([1, 2, 0]).to_string(), "[1, 2, 0]");
        assert_eq!(Input::from("101").to_string(), "\"101\"");
        assert_eq!(Input::Other("{}".to_string()).to_string(), "{}");
    }
}
