// RFC 6901 pointer helpers: token escaping, path joining, and parent/leaf splitting.
// Resolution itself goes through `serde_json::Value::pointer`.

/// Escapes a single reference token (`~` -> `~0`, `/` -> `~1`).
pub fn escape_token(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for ch in token.chars() {
        match ch {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            _ => out.push(ch),
        }
    }
    out
}

/// Reverses [`escape_token`]. `~1` is decoded before `~0` so `~01` yields `~1`.
pub(crate) fn unescape_token(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

/// Appends one unescaped key to a base pointer.
pub fn join_pointer(base: &str, token: &str) -> String {
    let escaped = escape_token(token);
    let mut out = String::with_capacity(base.len() + escaped.len() + 1);
    out.push_str(base);
    out.push('/');
    out.push_str(&escaped);
    out
}

/// Splits a pointer into its parent pointer and the decoded final token.
/// Returns `None` for the root pointer and for strings that are not pointers.
pub(crate) fn split_last(pointer: &str) -> Option<(&str, String)> {
    if !pointer.starts_with('/') {
        return None;
    }
    let idx = pointer.rfind('/')?;
    Some((&pointer[..idx], unescape_token(&pointer[idx + 1..])))
}

/// Parses an array index token the way `Value::pointer` does: plain decimal, no leading zeros.
pub(crate) fn parse_index(token: &str) -> Option<usize> {
    if token.starts_with('+') || (token.len() > 1 && token.starts_with('0')) {
        return None;
    }
    token.parse().ok()
}
