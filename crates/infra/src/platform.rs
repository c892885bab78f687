//! Platform-specific conversions from `std::fs` types into kernel value objects.
//!
//! This module centralizes the unix-only pieces so the rest of the crate
//! stays free of `std::os` imports.

use std::fs::{FileType, Metadata};
use std::os::unix::fs::{FileTypeExt, MetadataExt};

use dirlist_shared_kernel::EntryKind;

/// Classifies a `FileType` as returned by the directory iterator (no extra stat
/// on filesystems that report `d_type`).
pub fn entry_kind(file_type: &FileType) -> EntryKind {
    if file_type.is_file() {
        EntryKind::Regular
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_char_device() {
        EntryKind::CharDevice
    } else if file_type.is_block_device() {
        EntryKind::BlockDevice
    } else if file_type.is_socket() {
        EntryKind::Socket
    } else if file_type.is_fifo() {
        EntryKind::Fifo
    } else {
        EntryKind::Unknown
    }
}

/// Raw stat fields needed by the long format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawStat {
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
}

impl From<&Metadata> for RawStat {
    fn from(md: &Metadata) -> Self {
        Self { mode: md.mode(), nlink: md.nlink(), uid: md.uid(), gid: md.gid(), size: md.size() }
    }
}
