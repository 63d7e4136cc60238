/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Retention policy configuration

use serde::{Deserialize, Serialize};

/// Spacing of weekly checkpoints, in days
pub const WEEKLY_INTERVAL_DAYS: u64 = 7;

/// Tiered retention policy: how many daily and weekly snapshots survive.
///
/// Both counts are expected to be positive; a policy with a zero tier is
/// not a supported configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionPolicy {
    /// Number of most-recent snapshots kept unconditionally
    pub daily_keep: usize,
    /// Maximum number of weekly checkpoints retained from older history
    pub weekly_keep: usize,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        // One week of daily snapshots, plus weekly checkpoints covering the
        // last twelve weeks.
        Self {
            daily_keep: 7,
            weekly_keep: 12,
        }
    }
}
