//! Individual alias rules: literal prefixes and regex rewrites.

use crate::error::{Error, Result};
use regex::Regex;
use std::io;

/// Characters that mark a registered pattern as a regex rather than a
/// literal prefix.
const REGEX_META: &[char] = &[
    '\\', '^', '$', '.', '|', '?', '*', '+', '(', ')', '[', ']', '{', '}',
];

/// One alias rule, classified at registration time.
#[derive(Debug, Clone)]
pub enum AliasRule {
    /// `prefix -> replacement`: a location starting with `prefix` has the
    /// prefix swapped for `replacement`.
    Literal { prefix: String, replacement: String },
    /// Regex rule: the first match in the location is replaced by the
    /// template, with captured groups substituted for `%s` positionally.
    Pattern { pattern: Regex, template: String },
}

impl AliasRule {
    /// Classifies and compiles a registered pattern. Patterns containing
    /// regex metacharacters compile as regexes; a pattern that fails to
    /// compile is rejected rather than silently downgraded to a literal.
    pub fn parse(pattern: &str, replacement: &str) -> Result<AliasRule> {
        if pattern.contains(REGEX_META) {
            let compiled = Regex::new(pattern).map_err(|e| {
                Error::io(
                    format!("alias pattern {pattern:?}"),
                    io::Error::new(io::ErrorKind::InvalidInput, e),
                )
            })?;
            Ok(AliasRule::Pattern {
                pattern: compiled,
                template: replacement.to_string(),
            })
        } else {
            Ok(AliasRule::Literal {
                prefix: pattern.to_string(),
                replacement: replacement.to_string(),
            })
        }
    }

    /// The pattern string as registered, used for last-write-wins lookups.
    pub fn key(&self) -> &str {
        match self {
            AliasRule::Literal { prefix, .. } => prefix,
            AliasRule::Pattern { pattern, .. } => pattern.as_str(),
        }
    }
}

/// Substitutes captured groups into a replacement template.
///
/// Each `%s` consumes the next group in order; `%%` is a literal percent.
/// A `%s` with no group left is an error (the alias and location disagree).
pub fn substitute(template: &str, groups: &[&str]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                let group = groups.get(next).ok_or_else(|| {
                    Error::io(
                        format!("alias template {template:?}"),
                        io::Error::new(
                            io::ErrorKind::InvalidInput,
                            format!("template expects more than {} capture group(s)", groups.len()),
                        ),
                    )
                })?;
                out.push_str(group);
                next += 1;
            }
            Some('%') => {
                chars.next();
                out.push('%');
            }
            _ => out.push('%'),
        }
    }

    Ok(out)
}
