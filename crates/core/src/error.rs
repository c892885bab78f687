//! Re-export error types from the shared kernel crate.

pub use dirlist_shared_kernel::{DirListError, ErrorContext, MetadataQueryError, Result, UsageError};
