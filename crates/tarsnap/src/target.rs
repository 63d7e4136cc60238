/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Backup-target discovery from credential files

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, TarsnapError};

/// File-name suffix marking a credential as a delete-capable cleanup key
const CLEANUP_KEY_SUFFIX: &str = "cleanup.key";

/// One managed backup target: its cleanup key and isolated cache directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Target name, parsed from the credential file name
    pub name: String,
    /// Delete-only key file passed to the tool as `--keyfile`
    pub keyfile: PathBuf,
    /// Cache directory scoped to this target, passed as `--cachedir`
    pub cache_dir: PathBuf,
}

impl Target {
    /// Build a target from a credential path.
    ///
    /// The target name is the file-name segment before `.cleanup`, per the
    /// `<name>.cleanup.key` naming convention. A credential file that does
    /// not encode a name is fatal for that target.
    pub fn from_keyfile(keyfile: PathBuf, cache_base: &Path) -> Result<Self> {
        let name = keyfile
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(CLEANUP_KEY_SUFFIX))
            .and_then(|name| name.strip_suffix('.'))
            .filter(|name| !name.is_empty())
            .ok_or_else(|| TarsnapError::TargetName(keyfile.clone()))?
            .to_string();
        let cache_dir = cache_base.join(&name);

        Ok(Self {
            name,
            keyfile,
            cache_dir,
        })
    }
}

/// Discover all cleanup-key credential files under the key directory.
///
/// Returns one entry per credential file, in file-name order. A file whose
/// name does not encode a target name surfaces as that entry's error, so
/// the driver can skip it and keep processing the remaining targets.
pub fn discover_targets(key_dir: &Path, cache_base: &Path) -> Result<Vec<Result<Target>>> {
    let mut targets = Vec::new();

    for entry in WalkDir::new(key_dir).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_key = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(CLEANUP_KEY_SUFFIX));
        if !is_key {
            continue;
        }
        targets.push(Target::from_keyfile(entry.into_path(), cache_base));
    }

    debug!(count = targets.len(), key_dir = %key_dir.display(), "discovered cleanup keys");
    Ok(targets)
}
