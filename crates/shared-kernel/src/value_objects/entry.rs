// crates/shared-kernel/src/value_objects/entry.rs
use std::fmt;

use super::FileName;

const S_IFMT: u32 = 0o170_000;
const S_IFSOCK: u32 = 0o140_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFREG: u32 = 0o100_000;
const S_IFBLK: u32 = 0o060_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFCHR: u32 = 0o020_000;
const S_IFIFO: u32 = 0o010_000;

/// Kind of filesystem object an entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Socket,
    Fifo,
    Unknown,
}

impl EntryKind {
    pub const ALL: [EntryKind; 8] = [
        Self::Regular,
        Self::Directory,
        Self::Symlink,
        Self::CharDevice,
        Self::BlockDevice,
        Self::Socket,
        Self::Fifo,
        Self::Unknown,
    ];

    /// Classifies the `S_IFMT` bits of a raw `st_mode`.
    #[must_use]
    pub const fn from_mode(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFREG => Self::Regular,
            S_IFDIR => Self::Directory,
            S_IFLNK => Self::Symlink,
            S_IFCHR => Self::CharDevice,
            S_IFBLK => Self::BlockDevice,
            S_IFSOCK => Self::Socket,
            S_IFIFO => Self::Fifo,
            _ => Self::Unknown,
        }
    }

    /// Single-character type glyph. `Unknown` has none and prints nothing,
    /// so long-format columns shift left by one for such entries.
    #[must_use]
    pub const fn glyph(self) -> Option<char> {
        match self {
            Self::Regular => Some('-'),
            Self::Directory => Some('d'),
            Self::Symlink => Some('l'),
            Self::CharDevice => Some('c'),
            Self::BlockDevice => Some('b'),
            Self::Socket => Some('s'),
            Self::Fifo => Some('f'),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.glyph() {
            Some(glyph) => write!(f, "{glyph}"),
            None => Ok(()),
        }
    }
}

/// One item produced by enumerating a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    name: FileName,
    kind: EntryKind,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<FileName>, kind: EntryKind) -> Self {
        Self { name: name.into(), kind }
    }

    pub fn name(&self) -> &FileName {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }
}
