/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Sequential per-target pruning runs

use anyhow::Context;
use chrono::NaiveDate;
use retention::{select_for_deletion, RetentionPolicy};
use tarsnap::{discover_targets, ArchiveStore, TarsnapClient};
use tracing::{error, info, warn};

use crate::config::SweepConfig;

/// Whether deletions are carried out or only reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Report what would be deleted without touching any archive
    DryRun,
    /// Really delete the selected archives
    Commit,
}

/// Summary of one target's pruning run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Archives deleted (or that would be deleted in a dry run)
    pub deleted: usize,
    /// Archives that survive this run
    pub kept: usize,
    /// Identifiers without a parseable date suffix, left untouched
    pub unmanaged: usize,
    /// Deletions that failed; the run still attempts the rest
    pub failed_deletes: usize,
}

/// Summary of a whole run across all discovered targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Targets processed to completion
    pub processed: usize,
    /// Targets aborted or with failed deletions
    pub failed: usize,
}

impl RunReport {
    /// Whether every target completed without failures
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Prune a single target through its archive store.
///
/// The cache refresh and the listing are fatal for the target: without a
/// trustworthy listing no deletion is attempted. Individual deletion
/// failures are reported and do not block the remaining archives.
pub async fn prune_target(
    store: &dyn ArchiveStore,
    policy: &RetentionPolicy,
    mode: ExecutionMode,
    today: NaiveDate,
) -> tarsnap::Result<RunSummary> {
    store.refresh_cache().await?;
    let names = store.list_archives().await?;
    let selection = select_for_deletion(names, policy, today);

    for name in &selection.unmanaged {
        warn!(archive = %name, "don't know what to do with this archive");
    }

    let mut summary = RunSummary {
        kept: selection.keep.len(),
        unmanaged: selection.unmanaged.len(),
        ..RunSummary::default()
    };

    if selection.delete.is_empty() {
        info!("nothing to prune");
        return Ok(summary);
    }

    for archive in &selection.delete {
        match mode {
            ExecutionMode::DryRun => {
                info!(archive = %archive.name, date = %archive.date, "would delete");
                summary.deleted += 1;
            }
            ExecutionMode::Commit => match store.delete_archive(&archive.name).await {
                Ok(()) => {
                    info!(archive = %archive.name, date = %archive.date, "deleted");
                    summary.deleted += 1;
                }
                Err(err) => {
                    warn!(archive = %archive.name, error = %err, "failed to delete archive");
                    summary.failed_deletes += 1;
                }
            },
        }
    }

    Ok(summary)
}

/// Run a pruning pass over every target discovered under the key directory.
///
/// Targets are processed sequentially; a target that cannot be identified
/// or whose tool invocations fail is reported and skipped, and the
/// remaining targets still run.
pub async fn run(config: &SweepConfig, mode: ExecutionMode, today: NaiveDate) -> anyhow::Result<RunReport> {
    let targets = discover_targets(&config.key_dir, &config.cache_dir)
        .with_context(|| format!("scanning {} for cleanup keys", config.key_dir.display()))?;

    if targets.is_empty() {
        warn!(key_dir = %config.key_dir.display(), "no cleanup keys found");
        return Ok(RunReport::default());
    }

    if mode == ExecutionMode::DryRun {
        info!("dry run; pass --commit to really delete archives");
    }

    let mut report = RunReport::default();
    for target in targets {
        let target = match target {
            Ok(target) => target,
            Err(err) => {
                error!(error = %err, "skipping target");
                report.failed += 1;
                continue;
            }
        };

        info!(target = %target.name, "cleaning up");
        let client = TarsnapClient::new(
            &config.tarsnap_binary,
            &target.keyfile,
            &target.cache_dir,
        );

        match prune_target(&client, &config.policy, mode, today).await {
            Ok(summary) => {
                info!(
                    target = %target.name,
                    deleted = summary.deleted,
                    kept = summary.kept,
                    unmanaged = summary.unmanaged,
                    "target complete"
                );
                report.processed += 1;
                if summary.failed_deletes > 0 {
                    report.failed += 1;
                }
            }
            Err(err) => {
                error!(target = %target.name, error = %err, "target failed");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
