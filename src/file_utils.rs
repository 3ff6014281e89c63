use crate::config::{EncodingPolicy, SUPPORTED_IMAGE_EXTENSIONS};
use crate::error::{ManifestError, Result};
use log::{debug, warn};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Names selected from one directory listing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Matching entry names, in the order they will be written.
    pub names: Vec<String>,
    /// Names left out because they are not valid UTF-8 (lossy) or contain a line break.
    pub skipped: Vec<String>,
}

/// Returns true if the lowercased name ends with `.` followed by a supported extension.
///
/// Only the name is inspected, so directories and symlinks match the same way files do.
pub fn is_supported_image_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    SUPPORTED_IMAGE_EXTENSIONS.iter().any(|ext| {
        lower
            .strip_suffix(ext)
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

/// Lists the names of the entries directly inside `dir`, in platform order.
pub fn list_entry_names(dir: &Path) -> Result<Vec<OsString>> {
    let metadata = fs::metadata(dir).map_err(|e| ManifestError::from_io(dir, e))?;
    if !metadata.is_dir() {
        return Err(ManifestError::NotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ManifestError::from_io(dir, e))? {
        let entry = entry.map_err(|e| ManifestError::from_io(dir, e))?;
        names.push(entry.file_name());
    }

    debug!("Listed {} entries in {}", names.len(), dir.display());
    Ok(names)
}

fn has_line_terminator(name: &str) -> bool {
    name.contains(['\n', '\r'])
}

/// Lists `dir` and keeps the entries whose names carry a supported image extension.
pub fn scan_directory(dir: &Path, sort: bool, policy: EncodingPolicy) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();

    for raw in list_entry_names(dir)? {
        let (name, rejected) = match raw.into_string() {
            Ok(name) if has_line_terminator(&name) => (None, name),
            Ok(name) => (Some(name), String::new()),
            Err(raw) => (None, raw.to_string_lossy().into_owned()),
        };

        let Some(name) = name else {
            // Only names that would be written need to fit on one UTF-8 line.
            if !is_supported_image_name(&rejected) {
                continue;
            }
            match policy {
                EncodingPolicy::Fail => {
                    return Err(ManifestError::Encoding {
                        directory: dir.to_path_buf(),
                        name: rejected,
                    });
                }
                EncodingPolicy::Skip => {
                    warn!("Skipping entry that cannot be written as one line: {:?}", rejected);
                    outcome.skipped.push(rejected);
                    continue;
                }
            }
        };

        if is_supported_image_name(&name) {
            debug!("  + {}", name);
            outcome.names.push(name);
        }
    }

    if sort {
        outcome.names.sort();
    }

    Ok(outcome)
}
