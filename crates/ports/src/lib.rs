//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory enumeration and per-entry metadata queries
//! - [`identity`]: numeric owner/group id to name resolution
//!
//! These ports keep the walker and formatter independent of the
//! operating system so they can be exercised with in-memory fakes.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod identity;
