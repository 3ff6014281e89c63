//! Writes the names of the image files in a directory to an `images.txt` manifest.
//!
//! - [`file_utils`] lists a directory and applies the extension filter.
//! - [`manifest`] writes the manifest and runs a whole scan.
//! - [`cli`] maps command-line flags onto [`config::ManifestOptions`].

pub mod cli;
pub mod config;
pub mod error;
pub mod file_utils;
pub mod manifest;

pub use config::{EncodingPolicy, ManifestOptions};
pub use error::{ManifestError, Result};
pub use manifest::{ManifestReport, generate_manifest, write_manifest};
