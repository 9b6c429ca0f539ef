//! Write operations: bytes and text to locations or open streams.

use crate::butler::Butler;
use crate::error::{Error, Result};
use std::io::Write;
use tracing::trace;

impl Butler {
    /// Writes the full byte slice to a resolved location, then flushes and
    /// releases the stream. There is no partial-write recovery.
    pub fn write_bytes(&self, bytes: &[u8], location: &str) -> Result<()> {
        let resolved = self.resolve_alias(location)?;
        let mut writer = self.provider().open_write(&resolved)?;
        writer
            .write_all(bytes)
            .and_then(|()| writer.flush())
            .map_err(|e| Error::io(location, e))?;
        trace!(%location, len = bytes.len(), "wrote bytes");
        Ok(())
    }

    /// Writes text (as UTF-8 bytes) to a resolved location.
    pub fn write_text(&self, text: &str, location: &str) -> Result<()> {
        self.write_bytes(text.as_bytes(), location)
    }

    /// Writes the full byte slice to an already-open stream and flushes it.
    ///
    /// Lives on `Butler` for symmetry with the location-based writes; the
    /// stream bypasses alias resolution and the provider.
    pub fn write_bytes_to(&self, mut writer: impl Write, bytes: &[u8]) -> Result<()> {
        writer
            .write_all(bytes)
            .and_then(|()| writer.flush())
            .map_err(|e| Error::io("stream write", e))?;
        trace!(len = bytes.len(), "wrote bytes to stream");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_bytes_to_stream() {
        let butler = Butler::new();
        let mut out = Vec::new();
        butler.write_bytes_to(&mut out, b"some test text").unwrap();
        assert_eq!(out, b"some test text");
    }

    #[test]
    fn write_to_unknown_scheme_fails() {
        let butler = Butler::new();
        let err = butler.write_bytes(b"x", "zip:archive!/entry").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
