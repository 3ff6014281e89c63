//! Manifest writing.
//!
//! A run lists the directory once, then truncates and rewrites `images.txt`
//! with one matching name per line. The listing is taken before the manifest
//! is opened, so a missing directory leaves no file behind.

use crate::config::ManifestOptions;
use crate::error::{ManifestError, Result};
use crate::file_utils;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of a completed manifest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestReport {
    pub manifest_path: PathBuf,
    /// Names written, in file order.
    pub names: Vec<String>,
    /// Names left out under `EncodingPolicy::Skip`.
    pub skipped: Vec<String>,
}

impl ManifestReport {
    pub fn image_count(&self) -> usize {
        self.names.len()
    }
}

/// Creates or truncates `path` and writes each name followed by a newline.
///
/// The file handle is dropped on every return path; content is synced before success is reported.
pub fn write_manifest<S: AsRef<str>>(path: &Path, names: &[S]) -> Result<()> {
    let file = File::create(path).map_err(|e| ManifestError::from_io(path, e))?;
    let mut writer = BufWriter::new(file);

    for name in names {
        writeln!(writer, "{}", name.as_ref()).map_err(|e| ManifestError::from_io(path, e))?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| ManifestError::from_io(path, e.into_error()))?;
    file.sync_all().map_err(|e| ManifestError::from_io(path, e))?;

    Ok(())
}

/// Scans `options.directory` and writes its manifest.
pub fn generate_manifest(options: &ManifestOptions) -> Result<ManifestReport> {
    let start = Instant::now();
    debug!("Starting manifest run for: {}", options.directory.display());

    let outcome =
        file_utils::scan_directory(&options.directory, options.sort, options.encoding_policy)?;

    let manifest_path = options.manifest_path();
    write_manifest(&manifest_path, &outcome.names)?;

    info!(
        "Wrote {} image name(s) to {} in {:?}",
        outcome.names.len(),
        manifest_path.display(),
        start.elapsed()
    );

    Ok(ManifestReport {
        manifest_path,
        names: outcome.names,
        skipped: outcome.skipped,
    })
}
