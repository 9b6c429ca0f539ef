//! Library error type: malformed locations and wrapped I/O failures.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error surfaced by every fallible operation in the crate.
///
/// Failures are fatal to the calling operation and propagate directly; there
/// is no retry or partial-result path.
#[derive(Debug, Error)]
pub enum Error {
    /// The location string has no `scheme:` prefix.
    #[error("invalid location {location:?}: missing protocol prefix")]
    InvalidLocation { location: String },

    /// Any underlying read/write/resolve failure: missing resource, unknown
    /// scheme, encoding failure, or provider error.
    #[error("i/o failure on {context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn invalid_location(location: &str) -> Self {
        Error::InvalidLocation {
            location: location.to_string(),
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    /// Unknown or unhandled scheme, reported as an I/O failure.
    pub(crate) fn unsupported_scheme(location: &str, scheme: &str) -> Self {
        Error::io(
            location,
            io::Error::new(
                io::ErrorKind::Unsupported,
                format!("no provider for scheme {scheme:?}"),
            ),
        )
    }
}
