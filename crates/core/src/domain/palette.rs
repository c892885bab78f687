// src/domain/palette.rs
use dirlist_shared_kernel::EntryKind;

pub const RESET: &str = "\x1B[0m";
pub const BLUE: &str = "\x1B[34m";
pub const GREEN: &str = "\x1B[32m";

/// Escape sequence table for entry names. Passed to the walker explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub directory: &'static str,
    pub symlink: &'static str,
    pub other: &'static str,
    pub reset: &'static str,
}

impl ColorPalette {
    pub const ANSI: Self = Self { directory: BLUE, symlink: GREEN, other: RESET, reset: RESET };

    /// Prefix written before an entry name. Files, devices, sockets, fifos and
    /// unknown kinds all share the plain reset sequence.
    #[must_use]
    pub const fn color_for(&self, kind: EntryKind) -> &'static str {
        match kind {
            EntryKind::Directory => self.directory,
            EntryKind::Symlink => self.symlink,
            EntryKind::Regular
            | EntryKind::CharDevice
            | EntryKind::BlockDevice
            | EntryKind::Socket
            | EntryKind::Fifo
            | EntryKind::Unknown => self.other,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::ANSI
    }
}
