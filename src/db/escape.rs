//! Quoting utilities for statement text.
//!
//! Nothing produced here is ever sent to the server as part of a bound
//! statement. Literals feed the audit log; identifiers are only applied to
//! table names the server itself reported.

/// Quote a string as a single-line PostgreSQL literal.
///
/// Single quotes are doubled. If the string contains a backslash or a control
/// character, the literal gets the `E` prefix: backslashes are doubled and
/// control characters become escapes (`\n`, `\r`, `\t`, `\xHH`), so the
/// literal always fits on one line and reads back as the same value.
pub fn quote_literal(s: &str) -> String {
    let escaped = s.chars().any(|c| c == '\\' || c.is_control());
    let mut result = String::with_capacity(s.len() + 3);
    if escaped {
        result.push('E');
    }
    result.push('\'');
    for c in s.chars() {
        match c {
            '\'' => result.push_str("''"),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_ascii_control() => result.push_str(&format!("\\x{:02X}", c as u32)),
            c if c.is_control() => result.push_str(&format!("\\u{:04X}", c as u32)),
            c => result.push(c),
        }
    }
    result.push('\'');
    result
}

/// Quote an identifier, doubling embedded double quotes.
pub fn quote_identifier(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
