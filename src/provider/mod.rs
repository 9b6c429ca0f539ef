//! Virtual-filesystem seam.
//!
//! The rest of the crate only depends on [`VfsProvider`]; concrete backends
//! plug in behind it. [`PhysicalProvider`] is the built-in backend mapping
//! `res:`, `file:`, and `tmp:` onto the local filesystem.

mod physical;

pub use physical::PhysicalProvider;

use crate::error::Result;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Resolves fully-aliased location strings to byte streams.
pub trait VfsProvider {
    /// Schemes this provider recognizes natively. Locations carrying one of
    /// these protocols bypass alias resolution.
    fn schemes(&self) -> &[&'static str];

    /// Opens a location for reading.
    fn open_read(&self, location: &str) -> Result<Box<dyn Read>>;

    /// Opens a location for writing, truncating any existing content.
    fn open_write(&self, location: &str) -> Result<Box<dyn Write>>;

    /// The local filesystem path a location maps to, where that makes sense
    /// for the backend.
    fn local_path(&self, location: &str) -> Result<PathBuf>;
}
