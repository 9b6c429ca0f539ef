//! Read operations: bytes, text, UTF-8 text, and properties.

use crate::butler::Butler;
use crate::error::{Error, Result};
use crate::properties;
use crate::stream;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::trace;

impl Butler {
    /// Reads a location's full content into memory.
    pub fn bytes_from(&self, location: &str) -> Result<Vec<u8>> {
        let mut reader = self.open(location)?;
        let bytes = stream::read_all(&mut reader)?;
        trace!(%location, len = bytes.len(), "read bytes");
        Ok(bytes)
    }

    /// Reads a local file's full content into memory.
    pub fn bytes_from_path(&self, path: &Path) -> Result<Vec<u8>> {
        let mut file = File::open(path).map_err(|e| Error::io(path.display().to_string(), e))?;
        stream::read_all(&mut file)
    }

    /// Drains an already-open reader into memory.
    pub fn bytes_from_reader(&self, mut reader: impl Read) -> Result<Vec<u8>> {
        stream::read_all(&mut reader)
    }

    /// Reads a resource next to a package directory, e.g.
    /// `bytes_near("text_file.txt", "uk/co/opsb/butler")`.
    pub fn bytes_near(&self, name: &str, package: &str) -> Result<Vec<u8>> {
        self.bytes_from(&format!("res:{package}/{name}"))
    }

    /// Reads a location as text, replacing invalid UTF-8 sequences.
    pub fn text_from(&self, location: &str) -> Result<String> {
        Ok(lossy(self.bytes_from(location)?))
    }

    pub fn text_from_path(&self, path: &Path) -> Result<String> {
        Ok(lossy(self.bytes_from_path(path)?))
    }

    pub fn text_from_reader(&self, reader: impl Read) -> Result<String> {
        Ok(lossy(self.bytes_from_reader(reader)?))
    }

    pub fn text_near(&self, name: &str, package: &str) -> Result<String> {
        Ok(lossy(self.bytes_near(name, package)?))
    }

    /// Reads a location as strict UTF-8; malformed data is an error.
    pub fn utf8_from(&self, location: &str) -> Result<String> {
        strict(self.bytes_from(location)?, location)
    }

    pub fn utf8_from_path(&self, path: &Path) -> Result<String> {
        strict(self.bytes_from_path(path)?, &path.display().to_string())
    }

    pub fn utf8_from_reader(&self, reader: impl Read) -> Result<String> {
        strict(self.bytes_from_reader(reader)?, "reader")
    }

    pub fn utf8_near(&self, name: &str, package: &str) -> Result<String> {
        strict(
            self.bytes_near(name, package)?,
            &format!("res:{package}/{name}"),
        )
    }

    /// Reads a location as a key/value properties map.
    pub fn properties_from(&self, location: &str) -> Result<HashMap<String, String>> {
        Ok(properties::parse(&self.utf8_from(location)?))
    }

    pub fn properties_from_path(&self, path: &Path) -> Result<HashMap<String, String>> {
        Ok(properties::parse(&self.utf8_from_path(path)?))
    }

    pub fn properties_from_reader(&self, reader: impl Read) -> Result<HashMap<String, String>> {
        Ok(properties::parse(&self.utf8_from_reader(reader)?))
    }

    pub fn properties_near(&self, name: &str, package: &str) -> Result<HashMap<String, String>> {
        Ok(properties::parse(&self.utf8_near(name, package)?))
    }
}

fn lossy(bytes: Vec<u8>) -> String {
    String::from_utf8_lossy(&bytes).into_owned()
}

fn strict(bytes: Vec<u8>, context: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        Error::io(
            context,
            io::Error::new(io::ErrorKind::InvalidData, e.utf8_error()),
        )
    })
}
