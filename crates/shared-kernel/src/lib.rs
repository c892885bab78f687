// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{DirListError, ErrorContext, MetadataQueryError, Result, UsageError};

pub mod error;
pub mod value_objects;

pub use value_objects::{
    DirectoryEntry, EntryKind, FileMetadata, FileName, FileSize, LinkCount, ModificationTime,
    PermissionBits,
};
