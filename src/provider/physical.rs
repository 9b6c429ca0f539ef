//! Local-filesystem backend for `res:`, `file:`, and `tmp:` locations.

use crate::alias::protocol_of;
use crate::error::{Error, Result};
use crate::provider::VfsProvider;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Component, Path, PathBuf};
use tracing::trace;
use url::Url;

const SCHEMES: &[&'static str] = &["res", "file", "tmp"];

/// Maps location schemes onto the local filesystem.
///
/// - `res:` — resource lookup against an ordered list of resource roots;
///   reads search every root, writes and paths address the first root.
/// - `file:` — `file:///abs`, `file:/abs`, or `file:relative`.
/// - `tmp:` — paths under the system temp directory.
#[derive(Debug, Clone)]
pub struct PhysicalProvider {
    resource_roots: Vec<PathBuf>,
}

impl PhysicalProvider {
    /// Provider with the current directory as the only resource root.
    pub fn new() -> PhysicalProvider {
        PhysicalProvider {
            resource_roots: vec![PathBuf::from(".")],
        }
    }

    /// Provider with an explicit ordered list of resource roots.
    pub fn with_roots(roots: impl IntoIterator<Item = PathBuf>) -> PhysicalProvider {
        let resource_roots: Vec<PathBuf> = roots.into_iter().collect();
        PhysicalProvider {
            resource_roots: if resource_roots.is_empty() {
                vec![PathBuf::from(".")]
            } else {
                resource_roots
            },
        }
    }

    pub fn resource_roots(&self) -> &[PathBuf] {
        &self.resource_roots
    }

    /// Maps a location to a path without touching the filesystem, except
    /// that `res:` reads prefer a root where the resource exists.
    fn path_for(&self, location: &str) -> Result<PathBuf> {
        let protocol = protocol_of(location)?;
        let rest = &location[protocol.len() + 1..];
        match protocol {
            "res" => {
                let relative = relative_resource(location, rest)?;
                for root in &self.resource_roots {
                    let candidate = root.join(&relative);
                    if candidate.exists() {
                        return Ok(candidate);
                    }
                }
                Ok(self.resource_roots[0].join(relative))
            }
            "file" => Ok(file_path(location, rest)),
            "tmp" => Ok(std::env::temp_dir().join(relative_resource(location, rest)?)),
            other => Err(Error::unsupported_scheme(location, other)),
        }
    }
}

impl Default for PhysicalProvider {
    fn default() -> Self {
        PhysicalProvider::new()
    }
}

impl VfsProvider for PhysicalProvider {
    fn schemes(&self) -> &[&'static str] {
        SCHEMES
    }

    fn open_read(&self, location: &str) -> Result<Box<dyn Read>> {
        let path = self.path_for(location)?;
        trace!(%location, path = %path.display(), "open for read");
        let file = File::open(&path).map_err(|e| Error::io(location, e))?;
        Ok(Box::new(file))
    }

    fn open_write(&self, location: &str) -> Result<Box<dyn Write>> {
        let path = self.path_for(location)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(location, e))?;
        }
        trace!(%location, path = %path.display(), "open for write");
        let file = File::create(&path).map_err(|e| Error::io(location, e))?;
        Ok(Box::new(file))
    }

    fn local_path(&self, location: &str) -> Result<PathBuf> {
        self.path_for(location)
    }
}

/// Relative part of a `res:`/`tmp:` location, rejecting absolute paths and
/// parent-directory traversal out of the root.
fn relative_resource(location: &str, rest: &str) -> Result<PathBuf> {
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let path = Path::new(rest);
    let escapes = path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
    if escapes {
        return Err(Error::io(
            location,
            io::Error::new(io::ErrorKind::InvalidInput, "path escapes resource root"),
        ));
    }
    Ok(path.to_path_buf())
}

/// Path of a `file:` location. `file://` URIs go through the url crate;
/// `file:/abs` and `file:relative` are taken verbatim.
fn file_path(location: &str, rest: &str) -> PathBuf {
    if location.starts_with("file://") {
        if let Ok(parsed) = Url::parse(location) {
            if let Ok(path) = parsed.to_file_path() {
                return path;
            }
        }
    }
    PathBuf::from(rest)
}
