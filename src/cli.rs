//! Command-line arguments.

use crate::config::{DEFAULT_IMAGE_DIR, EncodingPolicy, ManifestOptions};
use clap::Parser;
use std::path::PathBuf;

/// Write the image file names of a directory to `images.txt` inside it
#[derive(Debug, Parser)]
#[command(name = "image-manifest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan (not recursive)
    #[arg(value_name = "DIR", default_value = DEFAULT_IMAGE_DIR)]
    pub directory: PathBuf,

    /// Sort names by byte order instead of keeping the directory listing order
    #[arg(long)]
    pub sort: bool,

    /// Skip image entries whose names are not valid UTF-8 or contain line breaks
    #[arg(long)]
    pub skip_unencodable: bool,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn options(&self) -> ManifestOptions {
        let policy = if self.skip_unencodable {
            EncodingPolicy::Skip
        } else {
            EncodingPolicy::Fail
        };
        ManifestOptions::new(self.directory.clone())
            .sorted(self.sort)
            .with_encoding_policy(policy)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
