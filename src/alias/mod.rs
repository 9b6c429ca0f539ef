//! Alias table and location rewriting.
//!
//! Rewrites a location's symbolic prefix (e.g. `butler:`, `classpath:`) into
//! a protocol the virtual-filesystem provider understands. Rules are either
//! literal prefixes or regexes with `%s` capture-group templates.

mod rule;

pub use rule::{substitute, AliasRule};

use crate::error::{Error, Result};
use tracing::debug;

/// Ordered alias rules with last-write-wins registration.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
}

impl AliasTable {
    pub fn new() -> AliasTable {
        AliasTable::default()
    }

    /// Registers an alias. Re-registering the same pattern string replaces
    /// the earlier rule in place.
    pub fn insert(&mut self, pattern: &str, replacement: &str) -> Result<()> {
        let rule = AliasRule::parse(pattern, replacement)?;
        match self.rules.iter_mut().find(|r| r.key() == pattern) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rewrites `location` according to the registered rules.
    ///
    /// Precedence is deterministic: a location whose protocol is already in
    /// `native_schemes` passes through unchanged; otherwise the longest
    /// matching literal prefix wins, and regex rules are tried in insertion
    /// order only when no literal matches. Exactly one rule is applied; the
    /// result is not re-resolved. A location matching no rule also passes
    /// through (the provider rejects unknown schemes downstream).
    pub fn resolve(&self, location: &str, native_schemes: &[&str]) -> Result<String> {
        let protocol = protocol_of(location)?;
        if native_schemes.contains(&protocol) {
            return Ok(location.to_string());
        }

        if let Some((prefix, replacement)) = self.longest_literal_match(location) {
            let resolved = format!("{replacement}{}", &location[prefix.len()..]);
            debug!(%location, %resolved, alias = %prefix, "resolved literal alias");
            return Ok(resolved);
        }

        for rule in &self.rules {
            let AliasRule::Pattern { pattern, template } = rule else {
                continue;
            };
            let Some(captures) = pattern.captures(location) else {
                continue;
            };
            let Some(matched) = captures.get(0) else {
                continue;
            };
            let groups: Vec<&str> = captures
                .iter()
                .skip(1)
                .map(|g| g.map(|m| m.as_str()).unwrap_or(""))
                .collect();
            let formatted = substitute(template, &groups)?;
            let resolved = format!(
                "{}{formatted}{}",
                &location[..matched.start()],
                &location[matched.end()..]
            );
            debug!(%location, %resolved, alias = %pattern.as_str(), "resolved regex alias");
            return Ok(resolved);
        }

        Ok(location.to_string())
    }

    fn longest_literal_match(&self, location: &str) -> Option<(&str, &str)> {
        self.rules
            .iter()
            .filter_map(|rule| match rule {
                AliasRule::Literal { prefix, replacement } if location.starts_with(prefix.as_str()) => {
                    Some((prefix.as_str(), replacement.as_str()))
                }
                _ => None,
            })
            .max_by_key(|(prefix, _)| prefix.len())
    }
}

/// Leading `scheme:` segment of a location, or `InvalidLocation` if absent.
pub fn protocol_of(location: &str) -> Result<&str> {
    location
        .split_once(':')
        .map(|(protocol, _)| protocol)
        .ok_or_else(|| Error::invalid_location(location))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NATIVE: &[&str] = &["res", "file", "tmp"];

    #[test]
    fn native_scheme_is_identity() {
        let table = AliasTable::new();
        let loc = "res:uk/co/opsb/butler/text_file.txt";
        assert_eq!(table.resolve(loc, NATIVE).unwrap(), loc);
    }

    #[test]
    fn literal_prefix_is_substituted() {
        let mut table = AliasTable::new();
        table.insert("butler:", "res:uk/co/opsb/butler/").unwrap();
        assert_eq!(
            table.resolve("butler:text_file.txt", NATIVE).unwrap(),
            "res:uk/co/opsb/butler/text_file.txt"
        );
    }

    #[test]
    fn literal_prefix_without_colon() {
        let mut table = AliasTable::new();
        table.insert("classpath_location", "res").unwrap();
        assert_eq!(
            table.resolve("classpath_location:a/b.txt", NATIVE).unwrap(),
            "res:a/b.txt"
        );
    }

    #[test]
    fn regex_alias_formats_capture_groups() {
        let mut table = AliasTable::new();
        table.insert(r"^(\w*):", "res:uk/co/opsb/%s/").unwrap();
        assert_eq!(
            table.resolve("butler:text_file.txt", NATIVE).unwrap(),
            "res:uk/co/opsb/butler/text_file.txt"
        );
    }

    #[test]
    fn longest_literal_prefix_wins() {
        let mut table = AliasTable::new();
        table.insert("butler:", "res:short/").unwrap();
        table.insert("butler:sub/", "res:long/").unwrap();
        assert_eq!(
            table.resolve("butler:sub/x.txt", NATIVE).unwrap(),
            "res:long/x.txt"
        );
    }

    #[test]
    fn literal_beats_regex_regardless_of_order() {
        let mut table = AliasTable::new();
        table.insert(r"^(\w*):", "res:regex/%s/").unwrap();
        table.insert("butler:", "res:literal/").unwrap();
        assert_eq!(
            table.resolve("butler:x.txt", NATIVE).unwrap(),
            "res:literal/x.txt"
        );
    }

    #[test]
    fn only_first_winning_rule_applies() {
        let mut table = AliasTable::new();
        table.insert("a:", "b:").unwrap();
        table.insert("b:", "c:").unwrap();
        // No recursive resolution: a: -> b:, not c:.
        assert_eq!(table.resolve("a:x", NATIVE).unwrap(), "b:x");
    }

    #[test]
    fn last_write_wins_on_duplicate_pattern() {
        let mut table = AliasTable::new();
        table.insert("butler:", "res:first/").unwrap();
        table.insert("butler:", "res:second/").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.resolve("butler:x", NATIVE).unwrap(),
            "res:second/x"
        );
    }

    #[test]
    fn unmatched_location_passes_through() {
        let table = AliasTable::new();
        assert_eq!(table.resolve("zip:archive!/x", NATIVE).unwrap(), "zip:archive!/x");
    }

    #[test]
    fn missing_protocol_is_invalid() {
        let table = AliasTable::new();
        let err = table.resolve("no_protocol_here", NATIVE).unwrap_err();
        assert!(matches!(err, Error::InvalidLocation { .. }));
    }

    #[test]
    fn clear_removes_all_rules() {
        let mut table = AliasTable::new();
        table.insert("butler:", "res:x/").unwrap();
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.resolve("butler:x", NATIVE).unwrap(), "butler:x");
    }

    #[test]
    fn protocol_of_greedy_segments() {
        assert_eq!(protocol_of("res:a/b").unwrap(), "res");
        assert_eq!(protocol_of("file:///tmp/x").unwrap(), "file");
        assert!(protocol_of("plain_name").is_err());
    }
}
