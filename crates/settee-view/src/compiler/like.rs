/// Translates an SQL `LIKE` pattern into regular expression source.
///
/// `%` matches any run of characters and `_` exactly one. The expression is
/// anchored at each end that does not open with `%`.
pub fn like_to_regex(pattern: &str) -> String {
    let mut dst = String::with_capacity(pattern.len() + 2);

    if !pattern.starts_with('%') {
        dst.push('^');
    }

    for c in pattern.chars() {
        match c {
            '%' => dst.push_str(".*"),
            '_' => dst.push('.'),
            '\\' | '^' | '$' | '.' | '|' | '?' | '*' | '+' | '(' | ')' | '[' | ']' | '{'
            | '}' | '/' => {
                dst.push('\\');
                dst.push(c);
            }
            c => dst.push(c),
        }
    }

    if !pattern.ends_with('%') {
        dst.push('$');
    }

    dst
}

/// Escapes unescaped `/` so the source can be written as a `/.../` literal.
pub fn escape_regex_source(source: &str) -> String {
    let mut dst = String::with_capacity(source.len());
    let mut escaped = false;

    for c in source.chars() {
        if c == '/' && !escaped {
            dst.push('\\');
        }
        dst.push(c);
        escaped = !escaped && c == '\\';
    }

    dst
}
