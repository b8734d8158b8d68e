//! SQL literal rendering for bound values.

use crate::value::Value;

/// Render a value as the SQL literal it most likely stood for.
///
/// | Value | Rendering |
/// |---|---|
/// | `Null` | `NULL` |
/// | `Bool` | `1` / `0` |
/// | `Bytes` (not UTF-8) | `0x` + uppercase hex |
/// | `Text`, `Bytes` (UTF-8) | single-quoted, backslash-escaped |
/// | `List` | elements escaped and joined with `, ` |
/// | `Bound` | inner value as a quoted string |
/// | `Object` | backslash-escaped, unquoted |
/// | numbers | plain, unquoted |
///
/// Escaping is applied once per call: escaping the output of a previous call
/// as text quotes it again.
///
/// # Example
/// ```
/// use sqlpeek::{Value, escape};
///
/// assert_eq!(escape(&Value::Null), "NULL");
/// assert_eq!(escape(&Value::from("it's")), r"'it\'s'");
/// assert_eq!(escape(&Value::list([1, 2])), "1, 2");
/// ```
pub fn escape(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        Value::Bytes(raw) => match std::str::from_utf8(raw) {
            Ok(text) => quote(text),
            Err(_) => hex_literal(raw),
        },
        Value::Text(text) => quote(text),
        Value::List(items) => items.iter().map(escape).collect::<Vec<_>>().join(", "),
        Value::Bound(inner) => quote(&inner.to_plain_string()),
        Value::Object(repr) => add_slashes(repr),
        Value::Int(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Numeric(repr) => repr.clone(),
    }
}

/// Backslash-escape single quotes, double quotes, backslashes and NUL bytes.
pub fn add_slashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\'' | '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\0' => out.push_str("\\0"),
            _ => out.push(c),
        }
    }
    out
}

fn quote(s: &str) -> String {
    format!("'{}'", add_slashes(s))
}

fn hex_literal(raw: &[u8]) -> String {
    format!("0x{}", hex::encode_upper(raw))
}
