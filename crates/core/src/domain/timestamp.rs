// src/domain/timestamp.rs
//! Date verbosity for the long format.
//!
//! Known limitation: the six-month lookback is plain month subtraction within
//! the same calendar year. A file touched in November is shown with its year
//! when listed the following January, even though it is only two months old.

use std::fmt::Display;

use chrono::{DateTime, Datelike, TimeZone};

/// How many months back still count as recent.
pub const RECENT_MONTHS: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampStyle {
    /// `Mar  7 14:05`
    Recent,
    /// `Mar  7  2023`
    Old,
}

impl TimestampStyle {
    /// `strftime` pattern for this style. `%e` pads single-digit days with a space.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Recent => "%b %e %H:%M",
            Self::Old => "%b %e  %Y",
        }
    }
}

/// Picks the style for `modified` given the current time `now`.
///
/// Recent when both fall in the same year and the modification month lies in
/// `[now.month - 6, now.month]`; Old otherwise.
pub fn classify(modified: &impl Datelike, now: &impl Datelike) -> TimestampStyle {
    let (mod_month, now_month) = (modified.month0() as i32, now.month0() as i32);
    let same_year = modified.year() == now.year();

    if same_year && mod_month >= now_month - RECENT_MONTHS && mod_month <= now_month {
        TimestampStyle::Recent
    } else {
        TimestampStyle::Old
    }
}

/// Formats `modified` in the style chosen by [`classify`].
pub fn render<Tz>(modified: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    modified.format(classify(modified, now).pattern()).to_string()
}
