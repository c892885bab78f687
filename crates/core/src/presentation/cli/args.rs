// crates/core/src/presentation/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
///
/// clap's own `--help` is disabled: `-h` is a plain flag so help can print the
/// legacy usage block and exit non-zero. `--version` is long-only; `-V` is an
/// unknown option. Repeated flags are accepted like `getopt` does.
#[derive(Parser, Debug)]
#[command(
    name = "dirlist",
    about = "Display contents of the directory",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Args {
    /// List in long format.
    #[arg(short = 'l', action = ArgAction::SetTrue)]
    pub long: bool,

    /// Print this help message.
    #[arg(short = 'h', action = ArgAction::SetTrue)]
    pub help: bool,

    /// Print version information.
    #[arg(long = "version", action = ArgAction::SetTrue)]
    pub version: bool,

    /// Exit 0 silently when the directory cannot be opened or an entry cannot be stat'd.
    #[arg(long)]
    pub legacy_exit_status: bool,

    /// Resolve entry metadata relative to the working directory.
    #[arg(long)]
    pub legacy_cwd_lookup: bool,

    /// Directory to list
    #[arg(value_hint = ValueHint::DirPath)]
    pub path: Option<PathBuf>,
}
