/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tarsweep: tiered retention pruning for tarsnap archives.
//!
//! Dry run: `tarsweep`
//! Really delete: `tarsweep --commit`

use std::{path::PathBuf, process::ExitCode};

use chrono::Local;
use clap::Parser;
use tarsweep::{run, ExecutionMode, SweepConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "tarsweep",
    version,
    about = "Prune tarsnap archives under a daily/weekly tiered retention policy"
)]
struct Cli {
    /// TOML configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory scanned recursively for *cleanup.key credential files
    #[arg(long)]
    key_dir: Option<PathBuf>,

    /// Base directory for per-target tarsnap caches
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Tarsnap binary to invoke
    #[arg(long)]
    tarsnap_bin: Option<PathBuf>,

    /// Number of most-recent daily snapshots to keep
    #[arg(long)]
    daily: Option<usize>,

    /// Number of weekly checkpoints to keep from older history
    #[arg(long)]
    weekly: Option<usize>,

    /// Really delete archives; without this flag the run only reports what
    /// would be deleted
    #[arg(long)]
    commit: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<(SweepConfig, ExecutionMode)> {
        let mut config = match &self.config {
            Some(path) => SweepConfig::load(path)?,
            None => SweepConfig::default(),
        };

        if let Some(key_dir) = self.key_dir {
            config.key_dir = key_dir;
        }
        if let Some(cache_dir) = self.cache_dir {
            config.cache_dir = cache_dir;
        }
        if let Some(binary) = self.tarsnap_bin {
            config.tarsnap_binary = binary;
        }
        if let Some(daily) = self.daily {
            config.policy.daily_keep = daily;
        }
        if let Some(weekly) = self.weekly {
            config.policy.weekly_keep = weekly;
        }

        let mode = if self.commit {
            ExecutionMode::Commit
        } else {
            ExecutionMode::DryRun
        };

        Ok((config, mode))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (config, mode) = match Cli::parse().into_config() {
        Ok(loaded) => loaded,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let today = Local::now().date_naive();
    match run(&config, mode, today).await {
        Ok(report) if report.is_clean() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            error!(error = %err, "run failed");
            ExitCode::FAILURE
        }
    }
}
