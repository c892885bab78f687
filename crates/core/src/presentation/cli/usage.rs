// crates/core/src/presentation/cli/usage.rs
use std::io::{self, Write};

/// Writes the usage block for `program`.
pub fn write_usage<W: Write>(out: &mut W, program: &str) -> io::Result<()> {
    write!(
        out,
        "\nDisplay contents of the directory\n\
         Usage: {program} [options] <path>\n\n\
         Options:\n\
         \t-l                List in long format.\n\
         \t-h                Print this help message.\n\
         \t--legacy-exit-status   Exit 0 silently when the directory cannot be opened.\n\
         \t--legacy-cwd-lookup    Resolve entry metadata relative to the working directory.\n"
    )
}
