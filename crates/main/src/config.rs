/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Runtime configuration for the tarsweep driver

use std::path::{Path, PathBuf};

use anyhow::Context;
use retention::RetentionPolicy;
use serde::{Deserialize, Serialize};

/// Driver configuration, loadable from a TOML file.
///
/// Every field has a default matching the conventional setup: delete-only
/// keys under `/root/.tarsnap`, per-target caches under
/// `/tmp/tarsnap/cache`, and a week of dailies plus twelve weeklies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Directory scanned recursively for `*cleanup.key` credential files
    pub key_dir: PathBuf,
    /// Base directory for per-target tarsnap cache directories
    pub cache_dir: PathBuf,
    /// Tarsnap binary to invoke
    pub tarsnap_binary: PathBuf,
    /// Retention tiers applied to every target
    pub policy: RetentionPolicy,
}

impl SweepConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            key_dir: PathBuf::from("/root/.tarsnap"),
            cache_dir: PathBuf::from("/tmp/tarsnap/cache"),
            tarsnap_binary: PathBuf::from("tarsnap"),
            policy: RetentionPolicy::default(),
        }
    }
}
