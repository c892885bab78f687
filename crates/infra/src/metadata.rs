// crates/infra/src/metadata.rs
use std::{fs, path::Path};

use dirlist_ports::{filesystem::MetadataProbe, identity::IdentityResolver};
use dirlist_shared_kernel::{
    EntryKind, FileMetadata, FileSize, LinkCount, MetadataQueryError, ModificationTime,
    PermissionBits, Result,
};

use crate::{identity::PasswdResolver, platform::RawStat};

/// `MetadataProbe` built on `lstat(2)`: symbolic links describe themselves.
#[derive(Debug, Default, Clone)]
pub struct LstatProbe<R = PasswdResolver> {
    resolver: R,
}

impl LstatProbe<PasswdResolver> {
    pub fn new() -> Self {
        Self { resolver: PasswdResolver::new() }
    }
}

impl<R: IdentityResolver> LstatProbe<R> {
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }
}

impl<R: IdentityResolver> MetadataProbe for LstatProbe<R> {
    fn probe(&self, path: &Path) -> Result<FileMetadata> {
        let stat_err = |source| MetadataQueryError::Stat { path: path.to_path_buf(), source };

        let md = fs::symlink_metadata(path).map_err(stat_err)?;
        let modified = md.modified().map_err(stat_err)?;
        let raw = RawStat::from(&md);

        let owner = self.resolver.user_name(raw.uid)?;
        let group = self.resolver.group_name(raw.gid)?;

        log::trace!("probed {} (mode {:o}, uid {}, gid {})", path.display(), raw.mode, raw.uid, raw.gid);

        Ok(FileMetadata {
            kind: EntryKind::from_mode(raw.mode),
            permissions: PermissionBits::from_mode(raw.mode),
            links: LinkCount::new(raw.nlink),
            owner,
            group,
            size: FileSize::new(raw.size),
            modified: ModificationTime::from(modified),
        })
    }
}
