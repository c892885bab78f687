// crates/core/src/application/commands/list_directory.rs
use std::io::Write;

use chrono::{DateTime, Local};
use dirlist_ports::filesystem::{DirectorySource, MetadataProbe};
use dirlist_shared_kernel::{ErrorContext, Result};

use crate::{
    domain::{config::ListingConfig, palette::ColorPalette},
    presentation::formatter,
};

/// What one listing wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingSummary {
    pub entries: usize,
}

/// Walks one directory and writes a line per entry.
///
/// Entries come out in the order the source yields them; nothing is sorted.
/// Any error stops the walk; lines already written stay written.
pub struct ListDirectoryCommand<'a, S, P> {
    source: &'a S,
    probe: &'a P,
    palette: &'a ColorPalette,
}

impl<'a, S, P> ListDirectoryCommand<'a, S, P>
where
    S: DirectorySource,
    P: MetadataProbe,
{
    pub fn new(source: &'a S, probe: &'a P, palette: &'a ColorPalette) -> Self {
        Self { source, probe, palette }
    }

    /// `now` is captured once by the caller so every entry is dated against the same instant.
    pub fn execute<W: Write>(
        &self,
        config: &ListingConfig,
        now: &DateTime<Local>,
        out: &mut W,
    ) -> Result<ListingSummary> {
        let entries = self.source.open(&config.path)?;
        let mut summary = ListingSummary::default();

        for entry in entries {
            let entry = entry?;
            log::trace!("entry {} ({:?})", entry.name(), entry.kind());

            if config.display.long_format {
                let meta = self.probe.probe(&config.metadata_path(entry.name()))?;
                formatter::write_long_prefix(out, &meta, now).context("writing listing")?;
            }
            formatter::write_name(out, &entry, self.palette).context("writing listing")?;
            summary.entries += 1;
        }

        out.flush().context("flushing listing")?;
        Ok(summary)
    }
}
