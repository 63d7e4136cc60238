/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Archive identifiers and their derived calendar dates

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Trailing `YYYY-MM-DD` pattern that ties an archive name to a calendar day
fn date_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{4})-(\d{2})-(\d{2})$").expect("valid date pattern"))
}

/// An archive snapshot: an opaque identifier plus the calendar day it encodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    /// The identifier exactly as listed by the backup tool
    pub name: String,
    /// Calendar date parsed from the identifier's trailing `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl Archive {
    /// Parse an archive identifier into a dated archive.
    ///
    /// The identifier must end in `YYYY-MM-DD` and the suffix must name a
    /// real calendar day. Anything else is unmanaged by the retention
    /// engine: it is neither kept nor deleted.
    pub fn parse(name: &str) -> Option<Self> {
        let caps = date_suffix().captures(name)?;
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;

        Some(Self {
            name: name.to_string(),
            date,
        })
    }
}
