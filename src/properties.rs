//! Line-oriented key/value properties parsing.
//!
//! Understands the classic properties format: `#`/`!` comments, keys
//! terminated by `=`, `:`, or whitespace, backslash line continuations, and
//! backslash escapes including `\uXXXX`. Duplicate keys are last-write-wins.

use std::collections::HashMap;

/// Parses properties text into a key/value map.
pub fn parse(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();

    let mut lines = text.lines();
    while let Some(line) = lines.next() {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        // Fold continuation lines (trailing unescaped backslash) into one
        // logical line, dropping the next line's leading whitespace.
        let mut logical = line.to_string();
        while ends_with_odd_backslashes(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_key_value(&logical);
        if key.is_empty() {
            continue;
        }
        map.insert(key, value);
    }

    map
}

fn ends_with_odd_backslashes(s: &str) -> bool {
    s.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Splits a logical line at the first unescaped `=`, `:`, or whitespace run
/// and unescapes both halves.
fn split_key_value(line: &str) -> (String, String) {
    let mut split_at = None;
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                split_at = Some((i, c.len_utf8(), true));
                break;
            }
            c if c.is_whitespace() => {
                split_at = Some((i, c.len_utf8(), false));
                break;
            }
            _ => {}
        }
    }

    match split_at {
        Some((i, sep_len, explicit_sep)) => {
            let key = unescape(line[..i].trim());
            let mut rest = line[i + sep_len..].trim_start();
            // `key   = value` form: whitespace split may still be followed
            // by the actual separator.
            if !explicit_sep {
                if let Some(stripped) = rest.strip_prefix('=').or_else(|| rest.strip_prefix(':')) {
                    rest = stripped.trim_start();
                }
            }
            (key, unescape(rest))
        }
        None => (unescape(line.trim()), String::new()),
    }
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let code: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&code, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push('u');
                        out.push_str(&code);
                    }
                }
            }
            // Unknown escape keeps the escaped character (covers \\, \:, \=, "\ ").
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
