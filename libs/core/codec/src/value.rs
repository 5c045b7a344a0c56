// [libs/core/codec/src/value.rs]
//! Structured value model and RFC 8785 canonicalization (JCS).
//!
//! `Value` preserves the integer/double distinction on ingress so a caller
//! who hands us `serde_json::Value::Number(1)` doesn't get re-serialized
//! as `1.0`. Object keys are sorted by UTF-16 code-unit order (not UTF-8
//! byte order, not Unicode scalar order) to match RFC 8785.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::CodecError;

/// A JSON-like structured value with integer/double distinction preserved.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    pub fn object() -> Value {
        Value::Object(BTreeMap::new())
    }

    /// Insert a key, overwriting any previous value. A no-op on a
    /// non-`Object` variant.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        if let Value::Object(map) = self {
            map.insert(key.into(), value);
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    // Fits in u64 but not i64: still an integer, just
                    // outside signed range. Fall back to double rather
                    // than widen the enum for a corner case JCS doesn't
                    // distinguish once past 2^63 anyway.
                    Value::Double(u as f64)
                } else {
                    Value::Double(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut out = BTreeMap::new();
                for (k, v) in map {
                    out.insert(k, Value::from(v));
                }
                Value::Object(out)
            }
        }
    }
}

/// Serialize any `serde::Serialize` value to JCS-canonical bytes.
pub fn to_jcs_bytes<T: serde::Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    let json = serde_json::to_value(value)
        .map_err(|e| CodecError::MalformedJson(e.to_string()))?;
    let v: Value = json.into();
    write_canonical(&v)
}

/// Serialize any `serde::Serialize` value to a JCS-canonical `String`.
pub fn to_jcs_string<T: serde::Serialize>(value: &T) -> Result<String, CodecError> {
    let bytes = to_jcs_bytes(value)?;
    // write_canonical only ever emits valid UTF-8 (JSON strings re-quoted
    // via serde_json, numbers as ASCII digits, structural ASCII bytes).
    Ok(String::from_utf8(bytes).expect("canonical JCS output is always UTF-8"))
}

/// Serialize a `Value` tree directly to JCS-canonical bytes.
pub fn write_canonical(value: &Value) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(256);
    write_value(value, &mut out)?;
    Ok(out)
}

fn write_value(value: &Value, out: &mut Vec<u8>) -> Result<(), CodecError> {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Integer(i) => out.extend_from_slice(i.to_string().as_bytes()),
        Value::Double(d) => out.extend_from_slice(format_es2015_number(*d)?.as_bytes()),
        Value::String(s) => write_json_string(s, out),
        Value::Array(items) => {
            out.push(b'[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push(b',');
                }
                write_value(item, out)?;
            }
            out.push(b']');
        }
        Value::Object(map) => {
            out.push(b'{');
            // BTreeMap<String, _> already iterates in ascending Rust
            // `Ord` order for `String`, which is UTF-8 byte order, not
            // UTF-16 code-unit order. Re-sort explicitly per RFC 8785.
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_by(|a, b| utf16_cmp(a, b));
            for (idx, key) in keys.iter().enumerate() {
                if idx > 0 {
                    out.push(b',');
                }
                write_json_string(key, out);
                out.push(b':');
                write_value(&map[*key], out)?;
            }
            out.push(b'}');
        }
    }
    Ok(())
}

/// Compare two strings by UTF-16 code-unit sequence, the ordering RFC 8785
/// mandates for object keys. This differs from UTF-8 byte order or
/// `char`-scalar order for any code point above U+FFFF, since those are
/// represented in UTF-16 as a surrogate pair in the D800-DFFF range.
fn utf16_cmp(a: &str, b: &str) -> std::cmp::Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

fn write_json_string(s: &str, out: &mut Vec<u8>) {
    // serde_json's string escaping already does exactly what JCS wants:
    // escape `"`, `\`, and the C0 control range as short escapes or
    // `\u00XX`, and pass every other code point through as UTF-8.
    let quoted = serde_json::to_string(s).expect("string serialization cannot fail");
    out.extend_from_slice(quoted.as_bytes());
}

/// ECMAScript (ES2015) `Number::toString` applied to a finite `f64`.
/// Rejects non-finite input with `CodecError::NonFiniteNumber`.
fn format_es2015_number(d: f64) -> Result<String, CodecError> {
    if !d.is_finite() {
        return Err(CodecError::NonFiniteNumber);
    }
    if d == 0.0 {
        // Covers both +0.0 and -0.0; ECMAScript prints "0" for both.
        return Ok("0".to_string());
    }

    let negative = d.is_sign_negative();
    let (digits, n) = shortest_digits_and_exponent(d.abs());
    let k = digits.len() as i32;

    let mut s = String::new();
    if negative {
        s.push('-');
    }

    if k <= n && n <= 21 {
        s.push_str(&digits);
        s.push_str(&"0".repeat((n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        s.push_str(int_part);
        s.push('.');
        s.push_str(frac_part);
    } else if -6 < n && n <= 0 {
        s.push_str("0.");
        s.push_str(&"0".repeat((-n) as usize));
        s.push_str(&digits);
    } else {
        // Exponential notation: d1[.d2..dk]e[+|-]exp, exp = n - 1.
        let (first, rest) = digits.split_at(1);
        s.push_str(first);
        if !rest.is_empty() {
            s.push('.');
            s.push_str(rest);
        }
        s.push('e');
        let exp = n - 1;
        if exp >= 0 {
            s.push('+');
        }
        s.push_str(&exp.to_string());
    }
    Ok(s)
}

/// Return the shortest round-tripping decimal digit string `s` (no sign,
/// no leading/trailing zeros) and exponent `n` such that
/// `value == 0.<s> * 10^n`, matching the `(s, n)` pair used throughout
/// ECMA-262 7.1.12.1. Relies on Rust's own shortest-round-trip scientific
/// formatter (`{:e}`) to locate `s`; only the exponent bookkeeping here is
/// JCS-specific.
fn shortest_digits_and_exponent(value: f64) -> (String, i32) {
    debug_assert!(value > 0.0 && value.is_finite());
    let sci = format!("{:e}", value);
    let (mantissa, exp_str) = sci.split_once('e').expect("scientific notation has an exponent");
    let exp: i32 = exp_str.parse().expect("exponent is a valid integer");

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    // value == d1.d2..dk * 10^exp == 0.d1d2..dk * 10^(exp+1)
    let n = exp + 1;
    (digits.to_string(), n)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match write_canonical(self) {
            Ok(bytes) => f.write_str(&String::from_utf8_lossy(&bytes)),
            Err(_) => f.write_str("<non-finite>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jcs(v: serde_json::Value) -> String {
        let value: Value = v.into();
        String::from_utf8(write_canonical(&value).unwrap()).unwrap()
    }

    #[test]
    fn object_keys_sort_ascending() {
        assert_eq!(jcs(json!({"b": 1, "a": 2})), r#"{"a":2,"b":1}"#);
    }

    #[test]
    fn null_serializes_to_four_bytes() {
        assert_eq!(jcs(json!(null)), "null");
    }

    #[test]
    fn integers_have_no_decimal_point() {
        assert_eq!(jcs(json!({"x": 1})), r#"{"x":1}"#);
    }

    #[test]
    fn arrays_preserve_order() {
        assert_eq!(jcs(json!([3, 1, 2])), "[3,1,2]");
    }

    #[test]
    fn nested_objects_sort_recursively() {
        assert_eq!(
            jcs(json!({"b": 1, "a": {"y": 1, "x": 2}, "arr": [{"k": 2, "j": 1}, 3, "z"]})),
            r#"{"a":{"x":2,"y":1},"arr":[{"j":1,"k":2},3,"z"],"b":1}"#
        );
    }

    #[test]
    fn escapes_control_characters_and_passes_utf8_through() {
        assert_eq!(jcs(json!("a\nb\"c\\d")), r#""a\nb\"c\\d""#);
        assert_eq!(jcs(json!("héllo \u{1F600}")), "\"héllo \u{1F600}\"");
    }

    #[test]
    fn non_finite_doubles_are_rejected() {
        let v = Value::Double(f64::NAN);
        assert_eq!(write_canonical(&v), Err(CodecError::NonFiniteNumber));
        let v = Value::Double(f64::INFINITY);
        assert_eq!(write_canonical(&v), Err(CodecError::NonFiniteNumber));
    }

    #[test]
    fn es2015_number_formatting() {
        assert_eq!(format_es2015_number(1.0).unwrap(), "1");
        assert_eq!(format_es2015_number(100.0).unwrap(), "100");
        assert_eq!(format_es2015_number(0.5).unwrap(), "0.5");
        assert_eq!(format_es2015_number(123.456).unwrap(), "123.456");
        assert_eq!(format_es2015_number(0.000001).unwrap(), "0.000001");
        assert_eq!(format_es2015_number(0.0000001).unwrap(), "1e-7");
        assert_eq!(format_es2015_number(1e21).unwrap(), "1e+21");
        assert_eq!(format_es2015_number(-42.5).unwrap(), "-42.5");
        assert_eq!(format_es2015_number(-0.0).unwrap(), "0");
    }

    #[test]
    fn idempotent_canonicalization() {
        let original = json!({"b": [1, 2, {"z": 1, "a": 2}], "a": "text", "c": null});
        let first = jcs(original);
        let reparsed: serde_json::Value = serde_json::from_str(&first).unwrap();
        let second = jcs(reparsed);
        assert_eq!(first, second);
    }

    #[test]
    fn utf16_code_unit_ordering_differs_from_byte_order() {
        // U+FFFF (BMP, encodes as single code unit 0xFFFF) sorts AFTER a
        // supplementary-plane character like U+10000 in UTF-16 code-unit
        // order, because U+10000 encodes as the surrogate pair
        // (0xD800, 0xDC00) whose leading unit 0xD800 is less than 0xFFFF,
        // even though U+10000 > U+FFFF as a Unicode scalar value.
        let bmp_high = "\u{FFFF}";
        let supplementary = "\u{10000}";
        assert_eq!(utf16_cmp(supplementary, bmp_high), std::cmp::Ordering::Less);
        assert_eq!(
            bmp_high.cmp(supplementary),
            std::cmp::Ordering::Greater,
            "sanity: raw Rust str Ord disagrees with UTF-16 code-unit order here"
        );
    }
}
