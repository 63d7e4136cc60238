/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Collaborator contract for the external archive tool

use async_trait::async_trait;

use crate::error::Result;

/// Operations a pruning run needs from the archive tool.
///
/// `refresh_cache` must succeed before `list_archives` can be trusted to
/// reflect the true remote archive set. Listing order is insignificant; the
/// selector re-sorts by parsed date. `delete_archive` is destructive and
/// must only be called with names the selector explicitly chose.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// Bring the tool's local cache in sync with the remote archive set
    async fn refresh_cache(&self) -> Result<()>;

    /// List all archive identifiers currently known for the target
    async fn list_archives(&self) -> Result<Vec<String>>;

    /// Delete a single archive
    async fn delete_archive(&self, name: &str) -> Result<()>;
}
