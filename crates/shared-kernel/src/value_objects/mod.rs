// crates/shared-kernel/src/value_objects/mod.rs
pub mod entry;
pub mod file_info;
pub mod file_meta;
pub mod permissions;

pub use entry::{DirectoryEntry, EntryKind};
pub use file_info::{FileName, FileSize, LinkCount, ModificationTime};
pub use file_meta::FileMetadata;
pub use permissions::PermissionBits;
