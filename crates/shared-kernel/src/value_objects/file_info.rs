// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    borrow::Cow,
    ffi::{OsStr, OsString},
    fmt,
    time::SystemTime,
};

use chrono::{DateTime, Local};

/// Entry name as returned by the directory iterator.
///
/// Kept as an `OsString` so non UTF-8 names still resolve on disk; display is lossy.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FileName(OsString);

impl FileName {
    #[must_use]
    pub fn new(name: impl Into<OsString>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }

    /// Returns a UTF-8 view suitable for logging and UI; non UTF-8 segments are lossy converted.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }
}

impl From<OsString> for FileName {
    fn from(name: OsString) -> Self {
        Self::new(name)
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<OsStr> for FileName {
    fn as_ref(&self) -> &OsStr {
        &self.0
    }
}

impl AsRef<std::path::Path> for FileName {
    fn as_ref(&self) -> &std::path::Path {
        self.0.as_ref()
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
#[repr(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

// Padding flags pass through so `{:>7}` right-aligns like a plain integer.
impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Hard link count of an inode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
#[repr(transparent)]
pub struct LinkCount(u64);

impl LinkCount {
    #[inline]
    pub const fn new(links: u64) -> Self {
        Self(links)
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for LinkCount {
    fn from(links: u64) -> Self {
        Self::new(links)
    }
}

impl fmt::Display for LinkCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
#[repr(transparent)]
pub struct ModificationTime(DateTime<Local>);

impl ModificationTime {
    pub fn new(timestamp: DateTime<Local>) -> Self {
        Self(timestamp)
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.0
    }
}

impl From<DateTime<Local>> for ModificationTime {
    fn from(timestamp: DateTime<Local>) -> Self {
        Self::new(timestamp)
    }
}

impl From<SystemTime> for ModificationTime {
    fn from(time: SystemTime) -> Self {
        Self::new(DateTime::<Local>::from(time))
    }
}
