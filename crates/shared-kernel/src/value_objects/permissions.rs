// crates/shared-kernel/src/value_objects/permissions.rs
use std::fmt;

/// The nine owner/group/other rwx bits of a file mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[must_use]
#[repr(transparent)]
pub struct PermissionBits(u16);

impl PermissionBits {
    const MASK: u32 = 0o777;
    const LETTERS: [char; 3] = ['r', 'w', 'x'];

    /// Keeps only the permission bits; type, setuid/setgid and sticky bits are dropped.
    #[inline]
    pub const fn from_mode(mode: u32) -> Self {
        Self((mode & Self::MASK) as u16)
    }

    /// Whether the k-th bit counting from the owner read bit (k = 0) is set.
    /// `k` stays below 9.
    #[inline]
    const fn is_set(self, k: usize) -> bool {
        self.0 & (0o400 >> k) != 0
    }

    #[must_use]
    pub fn render(self) -> String {
        (0..9)
            .map(|k| if self.is_set(k) { Self::LETTERS[k % 3] } else { '-' })
            .collect()
    }
}

impl From<u32> for PermissionBits {
    fn from(mode: u32) -> Self {
        Self::from_mode(mode)
    }
}

impl fmt::Display for PermissionBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
