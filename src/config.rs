//! Manifest configuration constants and per-run options.

use std::path::{Path, PathBuf};

/// Supported image file extensions, matched case-insensitively against the end of each entry name.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// File name of the manifest written inside the scanned directory.
pub const MANIFEST_FILE_NAME: &str = "images.txt";

/// Directory scanned when none is given on the command line.
pub const DEFAULT_IMAGE_DIR: &str = "src/main/resources/g/imgs";

/// What to do with an entry whose name is not valid UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EncodingPolicy {
    /// Abort the run with an encoding error.
    #[default]
    Fail,
    /// Leave the entry out of the manifest and log a warning.
    Skip,
}

/// Options for a single manifest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestOptions {
    pub directory: PathBuf,
    /// Sort names by byte order instead of keeping the listing order.
    pub sort: bool,
    pub encoding_policy: EncodingPolicy,
}

impl ManifestOptions {
    /// Creates options for `directory` with listing order kept and strict encoding.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            sort: false,
            encoding_policy: EncodingPolicy::Fail,
        }
    }

    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_encoding_policy(mut self, policy: EncodingPolicy) -> Self {
        self.encoding_policy = policy;
        self
    }

    /// Path of the manifest file for this run.
    pub fn manifest_path(&self) -> PathBuf {
        self.directory.join(MANIFEST_FILE_NAME)
    }
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self::new(Path::new(DEFAULT_IMAGE_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_use_reference_directory() {
        let options = ManifestOptions::default();
        assert_eq!(options.directory, PathBuf::from(DEFAULT_IMAGE_DIR));
        assert!(!options.sort);
        assert_eq!(options.encoding_policy, EncodingPolicy::Fail);
    }

    #[test]
    fn test_manifest_path_is_inside_directory() {
        let options = ManifestOptions::new("/tmp/pics");
        assert_eq!(options.manifest_path(), PathBuf::from("/tmp/pics/images.txt"));
    }

    #[test]
    fn test_builder_methods() {
        let options = ManifestOptions::new("pics")
            .sorted(true)
            .with_encoding_policy(EncodingPolicy::Skip);
        assert!(options.sort);
        assert_eq!(options.encoding_policy, EncodingPolicy::Skip);
    }
}
