// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

fn main() -> ExitCode {
    dirlist_core::run()
}
