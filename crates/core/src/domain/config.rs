// src/domain/config.rs
use std::path::{Path, PathBuf};

use dirlist_shared_kernel::FileName;

use super::options::{CompatOptions, DisplayOptions, MetadataLookup};

/// Everything one invocation needs, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    pub path: PathBuf,
    pub display: DisplayOptions,
    pub compat: CompatOptions,
}

impl ListingConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), display: DisplayOptions::default(), compat: CompatOptions::default() }
    }

    #[must_use]
    pub fn with_long_format(mut self, long_format: bool) -> Self {
        self.display.long_format = long_format;
        self
    }

    #[must_use]
    pub fn with_compat(mut self, compat: CompatOptions) -> Self {
        self.compat = compat;
        self
    }

    /// Path handed to the metadata probe for `name`.
    pub fn metadata_path(&self, name: &FileName) -> PathBuf {
        match self.compat.metadata_lookup {
            MetadataLookup::ListedDirectory => self.path.join(name),
            MetadataLookup::WorkingDirectory => Path::new(name.as_os_str()).to_path_buf(),
        }
    }
}
