//! Buffered stream copy primitives.

use crate::error::{Error, Result};
use std::io::{ErrorKind, Read, Write};

/// Fixed read-loop buffer size.
pub const BUFFER_SIZE: usize = 4096;

/// Copies `reader` to `writer` in `BUFFER_SIZE` chunks, flushing the writer
/// once the source is exhausted. Returns the number of bytes copied. Both
/// ends are released when they go out of scope, on success and on failure.
pub fn copy(reader: &mut dyn Read, writer: &mut dyn Write) -> Result<u64> {
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut copied: u64 = 0;
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::io("stream copy", e)),
        };
        writer
            .write_all(&buffer[..read])
            .map_err(|e| Error::io("stream copy", e))?;
        copied += read as u64;
    }
    writer.flush().map_err(|e| Error::io("stream copy", e))?;
    Ok(copied)
}

/// Drains a reader into an in-memory buffer.
pub fn read_all(reader: &mut dyn Read) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(BUFFER_SIZE);
    copy(reader, &mut out)?;
    Ok(out)
}
