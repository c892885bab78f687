// crates/ports/src/identity.rs
use dirlist_shared_kernel::MetadataQueryError;

/// Resolves numeric ids to account names.
pub trait IdentityResolver {
    fn user_name(&self, uid: u32) -> Result<String, MetadataQueryError>;
    fn group_name(&self, gid: u32) -> Result<String, MetadataQueryError>;
}
