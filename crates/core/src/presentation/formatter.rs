// src/presentation/formatter.rs
//! Text layout of one listing line.
//!
//! Long format: `{glyph}{perms}  {links} {owner:>7} {group:>7}    {size:>7} {date}   {name}`.

use std::{
    io::{self, Write},
    os::unix::ffi::OsStrExt,
};

use chrono::{DateTime, Local};
use dirlist_shared_kernel::{DirectoryEntry, FileMetadata};

use crate::domain::{palette::ColorPalette, timestamp};

/// Metadata columns that precede the name. No newline.
pub fn long_prefix(meta: &FileMetadata, now: &DateTime<Local>) -> String {
    format!(
        "{}{}  {} {:>7} {:>7}    {:>7} {}   ",
        meta.kind,
        meta.permissions,
        meta.links,
        meta.owner,
        meta.group,
        meta.size,
        timestamp::render(meta.modified.timestamp(), now),
    )
}

pub fn write_long_prefix<W: Write>(
    out: &mut W,
    meta: &FileMetadata,
    now: &DateTime<Local>,
) -> io::Result<()> {
    out.write_all(long_prefix(meta, now).as_bytes())
}

/// Writes `{colour}{name}{reset}\n`. The name goes out as raw bytes.
pub fn write_name<W: Write>(
    out: &mut W,
    entry: &DirectoryEntry,
    palette: &ColorPalette,
) -> io::Result<()> {
    out.write_all(palette.color_for(entry.kind()).as_bytes())?;
    out.write_all(entry.name().as_os_str().as_bytes())?;
    out.write_all(palette.reset.as_bytes())?;
    out.write_all(b"\n")
}
