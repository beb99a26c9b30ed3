//! Serializer — renders a [`Value`] tree back to JSON text.
//!
//! The output format is compact but not byte-identical to most JSON emitters,
//! and the differences are part of the contract:
//!
//! - Array elements and object entries are joined by `", "` (comma + space).
//! - Object entries appear in lexicographic key order, whatever the order the
//!   object was built in.
//! - Doubles use `f64`'s `Display` formatting (fixed notation, never
//!   exponents); a whole-valued double renders without a fractional part, so
//!   the int/double distinction does not survive a roundtrip. Non-finite
//!   doubles render as `null`.
//! - Strings are escaped with the minimal set `\\`, `\"`, `\n`, `\r`, `\t`;
//!   all other characters pass through raw.

use crate::value::Value;

/// Serialize a value tree to JSON text.
///
/// # Example
/// ```
/// use ordjson::{serialize, Value};
///
/// let v: Value = [("b", 2), ("a", 1)].into_iter().collect();
/// assert_eq!(serialize(&v), r#"{"a": 1, "b": 2}"#);
/// ```
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

/// `Display` renders the same text as [`serialize`].
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serialize(self))
    }
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Double(d) => write_double(*d, out),
        Value::String(s) => write_string(s, out),
        Value::Array(arr) => {
            out.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            let mut first = true;
            for (key, val) in map {
                if !first {
                    out.push_str(", ");
                }
                first = false;
                write_string(key, out);
                out.push_str(": ");
                write_value(val, out);
            }
            out.push('}');
        }
    }
}

/// NaN and infinities have no JSON representation and render as `null`.
fn write_double(d: f64, out: &mut String) {
    if d.is_nan() || d.is_infinite() {
        out.push_str("null");
    } else {
        out.push_str(&d.to_string());
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}
