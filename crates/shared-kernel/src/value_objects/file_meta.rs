// crates/shared-kernel/src/value_objects/file_meta.rs
use super::{EntryKind, FileSize, LinkCount, ModificationTime, PermissionBits};

/// Snapshot of one entry's metadata, taken at query time and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub kind: EntryKind,
    pub permissions: PermissionBits,
    pub links: LinkCount,
    pub owner: String,
    pub group: String,
    pub size: FileSize,
    pub modified: ModificationTime,
}
