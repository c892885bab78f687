// crates/ports/src/filesystem.rs
use std::path::Path;

use dirlist_shared_kernel::{DirectoryEntry, FileMetadata, Result};

/// Port for enumerating the immediate entries of one directory.
///
/// The returned iterator is lazy, finite and single-pass. Entry order is
/// whatever the platform hands back; callers must not assume it is sorted
/// or stable across filesystems.
pub trait DirectorySource {
    type Entries: Iterator<Item = Result<DirectoryEntry>>;

    /// Fails with [`DirListError::Open`](dirlist_shared_kernel::DirListError::Open)
    /// when `path` is missing, not a directory, or unreadable.
    fn open(&self, path: &Path) -> Result<Self::Entries>;
}

/// Port for querying a fresh metadata snapshot of a single path.
///
/// Symbolic links are described themselves, not their targets.
pub trait MetadataProbe {
    fn probe(&self, path: &Path) -> Result<FileMetadata>;
}
