// crates/infra/src/filesystem.rs
use std::{
    fs::{self, ReadDir},
    path::{Path, PathBuf},
};

use dirlist_ports::filesystem::DirectorySource;
use dirlist_shared_kernel::{DirListError, DirectoryEntry, EntryKind, Result};

use crate::platform;

/// Filesystem adapter implementing the `DirectorySource` port on top of `std::fs::read_dir`.
///
/// `.` and `..` are never yielded; the platform iterator drops them.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDirectorySource;

impl StdDirectorySource {
    pub fn new() -> Self {
        Self
    }
}

impl DirectorySource for StdDirectorySource {
    type Entries = StdEntries;

    fn open(&self, path: &Path) -> Result<StdEntries> {
        let inner = fs::read_dir(path)
            .map_err(|source| DirListError::Open { path: path.to_path_buf(), source })?;
        log::debug!("opened directory {}", path.display());
        Ok(StdEntries { path: path.to_path_buf(), inner })
    }
}

/// Lazy, single-pass iterator over one directory's entries in platform order.
/// The directory handle is released when the iterator is dropped.
#[derive(Debug)]
pub struct StdEntries {
    path: PathBuf,
    inner: ReadDir,
}

impl Iterator for StdEntries {
    type Item = Result<DirectoryEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.inner.next()? {
            Ok(entry) => entry,
            Err(source) => {
                return Some(Err(DirListError::Read { path: self.path.clone(), source }));
            }
        };

        // A failed d_type lookup only affects colouring, so it degrades to Unknown.
        let kind = match entry.file_type() {
            Ok(file_type) => platform::entry_kind(&file_type),
            Err(err) => {
                log::debug!("no file type for {}: {err}", entry.path().display());
                EntryKind::Unknown
            }
        };
        Some(Ok(DirectoryEntry::new(entry.file_name(), kind)))
    }
}
