//! Pure listing policy: options, colour table and date formatting.

pub mod config;
pub mod options;
pub mod palette;
pub mod timestamp;
