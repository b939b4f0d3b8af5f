//! Conversion between JSON literals and core inputs.

use bindata_core::{Element, Input};
use serde_json::Value;

/// Read a command-line token as a JSON literal, falling back to a plain string.
pub fn parse_literal(token: &str) -> Input {
    match serde_json::from_str::<Value>(token) {
        Ok(value) => input_from_json(&value),
        Err(_) => Input::Text(token.to_string()),
    }
}

/// Read a single bit-like token (`0`, `1`, `true`, `false`, ...).
pub fn parse_element(token: &str) -> Element {
    match serde_json::from_str::<Value>(token) {
        Ok(value) => element_from_json(&value),
        Err(_) => Element::Other(token.to_string()),
    }
}

pub fn input_from_json(value: &Value) -> Input {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Input::Integer(i as i128)
            } else if let Some(u) = n.as_u64() {
                Input::Integer(u as i128)
            } else {
                Input::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => Input::Text(s.clone()),
        Value::Array(items) => Input::Array(items.iter().map(element_from_json).collect()),
        Value::Null | Value::Bool(_) | Value::Object(_) => Input::Other(value.to_string()),
    }
}

/// Numbers compare by value, so `1.0` and `0.0` are the bits 1 and 0.
fn element_from_json(value: &Value) -> Element {
    match value {
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Element::Int(i),
            (None, Some(f)) if f == 0.0 || f == 1.0 => Element::Int(f as i64),
            _ => Element::Other(n.to_string()),
        },
        Value::Bool(b) => Element::Bool(*b),
        other => Element::Other(other.to_string()),
    }
}

/// Render an input snapshot back as JSON.
pub fn input_to_json(input: &Input) -> Value {
    match input {
        Input::Integer(i) => i64::try_from(*i)
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(i.to_string())),
        Input::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Input::Text(s) => Value::String(s.clone()),
        Input::Array(elements) => Value::Array(
            elements
                .iter()
                .map(|element| match element {
                    Element::Int(i) => Value::from(*i),
                    Element::Bool(b) => Value::Bool(*b),
                    Element::Other(desc) => Value::String(desc.clone()),
                })
                .collect(),
        ),
        Input::Other(desc) => Value::String(desc.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(parse_literal("20862"), Input::Integer(20862));
        assert_eq!(parse_literal("-4"), Input::Integer(-4));
        assert_eq!(parse_literal("2.5"), Input::Float(2.5));
        assert_eq!(parse_literal("\"101\""), Input::Text("101".to_string()));
        assert_eq!(parse_literal("0x517E"), Input::Text("0x517E".to_string()));
        assert_eq!(parse_literal("{}"), Input::Other("{}".to_string()));
        assert_eq!(parse_literal("true"), Input::Other("true".to_string()));
        assert_eq!(
            parse_literal("[1, true, {}]"),
            Input::Array(vec![
                Element::Int(1),
                Element::Bool(true),
                Element::Other("{}".to_string())
            ])
        );
    }

    #[test]
    fn test_elements() {
        assert_eq!(parse_element("1"), Element::Int(1));
        assert_eq!(parse_element("false"), Element::Bool(false));
        assert_eq!(parse_element("one"), Element::Other("one".to_string()));
    }

    #[test]
    fn test_whole_float_bits() {
        assert_eq!(parse_element("1.0"), Element::Int(1));
        assert_eq!(parse_element("0.0"), Element::Int(0));
        assert_eq!(parse_element("0.5"), Element::Other("0.5".to_string()));
        assert_eq!(parse_element("2.0"), Element::Other("2.0".to_string()));
        assert_eq!(
            parse_literal("[1.0, 0, 0.0, 1]"),
            Input::Array(vec![Element::Int(1), Element::Int(0), Element::Int(0), Element::Int(1)])
        );
        assert_eq!(
            bindata_core::BinaryValue::new(parse_literal("[1.0, 0.0, 1]")).to_binary_string(),
            "0101"
        );
    }

    #[test]
    fn test_input_to_json() {
        assert_eq!(input_to_json(&Input::Integer(13)), serde_json::json!(13));
        assert_eq!(input_to_json(&Input::from([1, 0])), serde_json::json!([1, 0]));
        assert_eq!(input_to_json(&Input::from("0x1")), serde_json::json!("0x1"));
    }
}
