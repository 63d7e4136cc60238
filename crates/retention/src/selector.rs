/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Partitioning an archive listing into keep and delete sets

use chrono::{Days, NaiveDate};

use crate::{
    archive::Archive,
    policy::{RetentionPolicy, WEEKLY_INTERVAL_DAYS},
};

/// Outcome of a selection run over one target's archive listing.
///
/// Invariant: `keep`, `delete`, and `unmanaged` partition the input; every
/// listed identifier ends up in exactly one of the three.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Archives that survive this run, oldest first
    pub keep: Vec<Archive>,
    /// Archives selected for deletion, oldest first
    pub delete: Vec<Archive>,
    /// Identifiers without a parseable date suffix; never touched
    pub unmanaged: Vec<String>,
}

/// Decide which archives to delete under a tiered retention policy.
///
/// The `daily_keep` most recent archives survive unconditionally. Older
/// archives are candidates for deletion and survive only when their date
/// exactly matches one of the retained weekly checkpoints (see
/// [`weekly_anchors`]); there is no nearest-match tolerance.
///
/// `today` is the current calendar day; it only bounds the checkpoint walk,
/// so results are stable within a day. Archives with equal dates keep their
/// listing order.
pub fn select_for_deletion<I, S>(names: I, policy: &RetentionPolicy, today: NaiveDate) -> Selection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut selection = Selection::default();
    let mut archives = Vec::new();

    for name in names {
        let name = name.as_ref();
        match Archive::parse(name) {
            Some(archive) => archives.push(archive),
            None => selection.unmanaged.push(name.to_string()),
        }
    }

    // Stable: equal dates keep their listing order.
    archives.sort_by_key(|archive| archive.date);

    let Some(oldest) = archives.first().map(|archive| archive.date) else {
        return selection;
    };

    // Retention tiers only apply to archives older than the most recent
    // `daily_keep`; with less history than that there is nothing to prune.
    if archives.len() < policy.daily_keep {
        selection.keep = archives;
        return selection;
    }

    let daily = archives.split_off(archives.len() - policy.daily_keep);

    let cutoff = today - Days::new(policy.daily_keep as u64);
    let mut anchors = weekly_anchors(oldest, cutoff);

    // Most recent checkpoints win; older ones age out first.
    if anchors.len() > policy.weekly_keep {
        anchors.drain(..anchors.len() - policy.weekly_keep);
    }

    for archive in archives {
        if anchors.contains(&archive.date) {
            selection.keep.push(archive);
        } else {
            selection.delete.push(archive);
        }
    }
    selection.keep.extend(daily);

    selection
}

/// Weekly checkpoint dates walked forward from the oldest archive.
///
/// Checkpoints are spaced exactly seven days apart starting at `oldest`.
/// The walk stops before `cutoff`: a date at or past the cutoff would fall
/// inside the protected daily window and is never generated. The walk is
/// anchored to the current oldest archive rather than a fixed epoch, so the
/// checkpoint grid slides as the oldest surviving archive changes.
pub fn weekly_anchors(oldest: NaiveDate, cutoff: NaiveDate) -> Vec<NaiveDate> {
    let mut anchors = Vec::new();
    let mut anchor = oldest;

    while anchor < cutoff {
        anchors.push(anchor);
        anchor = anchor + Days::new(WEEKLY_INTERVAL_DAYS);
    }

    anchors
}
