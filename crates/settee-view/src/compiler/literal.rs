use super::{Formatter, Scope, ToJs};
use settee_core::{stmt::Value, Result};

/// A literal operand. The value is recorded as a bound parameter and
/// embedded in the expression.
pub(super) struct Literal<'a>(pub(super) &'a Value);

impl ToJs for Literal<'_> {
    fn to_js(self, _scope: Scope, f: &mut Formatter<'_>) -> Result<()> {
        f.params.push(self.0.clone());
        f.dst.push_str(&quote(&self.0.to_json()));
        Ok(())
    }
}

/// JSON-encodes `value` using single-quoted strings.
///
/// The result never contains a double quote: string delimiters become `'`,
/// embedded double quotes become `\x22` and embedded single quotes are
/// escaped.
pub(crate) fn quote(value: &serde_json::Value) -> String {
    let encoded = value.to_string();
    let mut dst = String::with_capacity(encoded.len());
    let mut escaped = false;

    for c in encoded.chars() {
        match c {
            '"' if escaped => dst.push_str("x22"),
            '"' => dst.push('\''),
            '\'' => dst.push_str("\\'"),
            c => dst.push(c),
        }

        escaped = !escaped && c == '\\';
    }

    dst
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quoting() {
        assert_eq!(quote(&json!("Post")), "'Post'");
        assert_eq!(quote(&json!(42)), "42");
        assert_eq!(quote(&json!(null)), "null");
        assert_eq!(quote(&json!(["a", 1])), "['a',1]");
        assert_eq!(quote(&json!("a\\\"b")), r"'a\\\x22b'");
    }
}
