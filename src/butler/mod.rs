//! The `Butler` facade: alias registration plus resource reads and writes.

mod read;
mod write;

use crate::alias::AliasTable;
use crate::error::Result;
use crate::properties;
use crate::provider::{PhysicalProvider, VfsProvider};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Conventional location of the default alias set.
pub const DEFAULT_ALIASES_LOCATION: &str = "res:butler_aliases.properties";

/// Loads and writes resources addressed by aliased virtual-filesystem
/// locations.
///
/// A `Butler` is constructed explicitly and passed by reference; there is no
/// global instance. Register aliases before sharing it across threads.
pub struct Butler {
    provider: Box<dyn VfsProvider>,
    aliases: AliasTable,
}

impl Butler {
    /// Butler over a [`PhysicalProvider`] rooted at the current directory.
    pub fn new() -> Butler {
        Butler::with_provider(Box::new(PhysicalProvider::new()))
    }

    /// Butler over a custom provider.
    ///
    /// The `classpath:` → `res:` alias is always pre-registered.
    pub fn with_provider(provider: Box<dyn VfsProvider>) -> Butler {
        let mut aliases = AliasTable::new();
        // `classpath:` carries a replacement without metacharacters, so
        // registration cannot fail.
        let _ = aliases.insert("classpath:", "res:");
        Butler { provider, aliases }
    }

    /// Rewrites a location through the alias table. Identity for locations
    /// whose protocol the provider recognizes natively.
    pub fn resolve_alias(&self, location: &str) -> Result<String> {
        self.aliases.resolve(location, self.provider.schemes())
    }

    /// Registers an alias: a literal prefix, or a regex with a `%s`
    /// capture-group template when the pattern contains metacharacters.
    /// Re-registering a pattern replaces the earlier rule.
    pub fn alias(&mut self, pattern: &str, replacement: &str) -> Result<()> {
        self.aliases.insert(pattern, replacement)
    }

    /// Drops every registered alias, including the built-in `classpath:`.
    pub fn clear_aliases(&mut self) {
        self.aliases.clear();
    }

    /// Loads aliases from a properties resource, returning how many were
    /// registered. Absence of the resource is an error the caller may
    /// ignore; nothing is registered in that case.
    pub fn load_default_aliases(&mut self, location: &str) -> Result<usize> {
        let text = self.utf8_from(location)?;
        let entries = properties::parse(&text);
        let count = entries.len();
        for (pattern, replacement) in &entries {
            self.aliases.insert(pattern, replacement)?;
        }
        debug!(%location, count, "loaded default aliases");
        Ok(count)
    }

    /// Opens a resolved location for reading.
    pub fn open(&self, location: &str) -> Result<Box<dyn Read>> {
        let resolved = self.resolve_alias(location)?;
        self.provider.open_read(&resolved)
    }

    /// Local path of a resource addressed relative to the resource roots.
    pub fn path_at(&self, classpath_location: &str) -> Result<PathBuf> {
        let resolved = self.resolve_alias(&format!("res:{classpath_location}"))?;
        self.provider.local_path(&resolved)
    }

    /// Local path of a resource next to a package directory, e.g.
    /// `path_near("text_file.txt", "uk/co/opsb/butler")`.
    pub fn path_near(&self, name: &str, package: &str) -> Result<PathBuf> {
        self.path_at(&format!("{package}/{name}"))
    }

    pub(crate) fn provider(&self) -> &dyn VfsProvider {
        self.provider.as_ref()
    }
}

impl Default for Butler {
    fn default() -> Self {
        Butler::new()
    }
}
