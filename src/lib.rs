//! Uniform resource loading across aliased virtual-filesystem locations.
//!
//! A [`Butler`] reads bytes, text, and key/value properties from locations
//! like `res:config/app.properties`, `file:///var/data/blob.bin`, or
//! `tmp:scratch/out.txt`, and writes bytes/text back to them. Short symbolic
//! prefixes (`butler:`, `classpath:`) are rewritten into full protocol URIs
//! by an alias table before the location reaches the underlying provider,
//! including regex capture-group driven rewrites.
//!
//! ```no_run
//! use butler_io::Butler;
//!
//! let mut butler = Butler::new();
//! butler.alias("butler:", "res:uk/co/opsb/butler/")?;
//! let text = butler.text_from("butler:text_file.txt")?;
//! # Ok::<(), butler_io::Error>(())
//! ```

pub mod alias;
pub mod butler;
pub mod error;
pub mod properties;
pub mod provider;
pub mod stream;

pub use butler::{Butler, DEFAULT_ALIASES_LOCATION};
pub use error::{Error, Result};
pub use provider::{PhysicalProvider, VfsProvider};
pub use stream::BUFFER_SIZE;
