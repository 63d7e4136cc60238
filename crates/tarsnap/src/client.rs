/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Process-spawning tarsnap client

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::{
    error::{Result, TarsnapError},
    store::ArchiveStore,
};

/// Tarsnap invocation bound to one target's key file and cache directory.
///
/// Every invocation passes `--cachedir` and `--keyfile`, so two clients for
/// different targets never share tool-level cache state.
#[derive(Debug, Clone)]
pub struct TarsnapClient {
    binary: PathBuf,
    keyfile: PathBuf,
    cache_dir: PathBuf,
}

impl TarsnapClient {
    /// Create a client for one target
    pub fn new(
        binary: impl Into<PathBuf>,
        keyfile: impl Into<PathBuf>,
        cache_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            binary: binary.into(),
            keyfile: keyfile.into(),
            cache_dir: cache_dir.into(),
        }
    }

    /// Run the tool with the target's cache and key plus `args`, returning
    /// its stdout.
    async fn run(&self, args: &[&str]) -> Result<String> {
        debug!(binary = %self.binary.display(), ?args, "invoking tarsnap");

        let output = Command::new(&self.binary)
            .arg("--cachedir")
            .arg(&self.cache_dir)
            .arg("--keyfile")
            .arg(&self.keyfile)
            .args(args)
            .output()
            .await?;

        if !output.status.success() {
            return Err(TarsnapError::Tool {
                command: args.join(" "),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

#[async_trait]
impl ArchiveStore for TarsnapClient {
    async fn refresh_cache(&self) -> Result<()> {
        // The cache directory must exist before --fsck can rebuild it.
        tokio::fs::create_dir_all(&self.cache_dir).await?;
        self.run(&["--fsck"]).await?;
        Ok(())
    }

    async fn list_archives(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["--list-archives"]).await?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn delete_archive(&self, name: &str) -> Result<()> {
        self.run(&["-d", "-f", name]).await?;
        Ok(())
    }
}
