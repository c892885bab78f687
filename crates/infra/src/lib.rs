// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod identity;
pub mod metadata;
pub mod platform;

pub use filesystem::{StdDirectorySource, StdEntries};
pub use identity::PasswdResolver;
pub use metadata::LstatProbe;
