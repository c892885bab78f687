// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod error;
pub mod presentation;

pub use bootstrap::{run, run_from};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
