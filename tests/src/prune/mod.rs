/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! End-to-end pruning runs: selection core wired to an archive store and
//! the full driver loop over a discovered key tree.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use retention::RetentionPolicy;
use tarsnap::{ArchiveStore, TarsnapError};
use tarsweep::{prune_target, run, ExecutionMode, SweepConfig};

/// In-memory archive store that records deletions and can simulate a
/// target whose archives change between runs.
#[derive(Default)]
struct MemoryStore {
    archives: Mutex<Vec<String>>,
    deleted: Mutex<Vec<String>>,
}

impl MemoryStore {
    fn with_archives(names: &[&str]) -> Self {
        Self {
            archives: Mutex::new(names.iter().map(|name| name.to_string()).collect()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    fn remaining(&self) -> Vec<String> {
        self.archives.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArchiveStore for MemoryStore {
    async fn refresh_cache(&self) -> tarsnap::Result<()> {
        Ok(())
    }

    async fn list_archives(&self) -> tarsnap::Result<Vec<String>> {
        Ok(self.remaining())
    }

    async fn delete_archive(&self, name: &str) -> tarsnap::Result<()> {
        let mut archives = self.archives.lock().unwrap();
        let before = archives.len();
        archives.retain(|archive| archive != name);
        if archives.len() == before {
            return Err(TarsnapError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such archive: {name}"),
            )));
        }
        self.deleted.lock().unwrap().push(name.to_string());
        Ok(())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn policy(daily_keep: usize, weekly_keep: usize) -> RetentionPolicy {
    RetentionPolicy {
        daily_keep,
        weekly_keep,
    }
}

#[tokio::test]
async fn commit_prunes_exactly_the_selected_archives() {
    let store = MemoryStore::with_archives(&[
        "db.example.com-2024-01-01",
        "db.example.com-2024-01-08",
        "db.example.com-2024-01-15",
        "db.example.com-2024-03-08",
        "db.example.com-2024-03-09",
        "db.example.com-2024-03-10",
        "stray-export.tgz",
    ]);

    let summary = prune_target(
        &store,
        &policy(3, 2),
        ExecutionMode::Commit,
        date(2024, 3, 10),
    )
    .await
    .unwrap();

    assert_eq!(summary.deleted, 3);
    assert_eq!(summary.kept, 3);
    assert_eq!(summary.unmanaged, 1);
    assert_eq!(
        store.deleted(),
        vec![
            "db.example.com-2024-01-01",
            "db.example.com-2024-01-08",
            "db.example.com-2024-01-15",
        ]
    );
    // The daily tier and the unmanaged stray survive untouched.
    assert_eq!(
        store.remaining(),
        vec![
            "db.example.com-2024-03-08",
            "db.example.com-2024-03-09",
            "db.example.com-2024-03-10",
            "stray-export.tgz",
        ]
    );
}

#[tokio::test]
async fn dry_run_leaves_the_store_untouched() {
    let store = MemoryStore::with_archives(&[
        "host-2024-01-01",
        "host-2024-03-08",
        "host-2024-03-09",
        "host-2024-03-10",
    ]);

    let summary = prune_target(
        &store,
        &policy(3, 2),
        ExecutionMode::DryRun,
        date(2024, 3, 10),
    )
    .await
    .unwrap();

    assert_eq!(summary.deleted, 1);
    assert!(store.deleted().is_empty());
    assert_eq!(store.remaining().len(), 4);
}

#[tokio::test]
async fn second_committed_pass_is_a_no_op() {
    // First pass: anchors walk from 01-01 and spare the 01-08 checkpoint.
    // Second pass: the walk re-anchors on the surviving 01-08 and still
    // lands on it, so nothing further is deleted.
    let store = MemoryStore::with_archives(&[
        "host-2024-01-01",
        "host-2024-01-06",
        "host-2024-01-08",
        "host-2024-01-13",
        "host-2024-01-31",
        "host-2024-02-01",
    ]);
    let policy = policy(2, 4);
    let today = date(2024, 2, 1);

    let first = prune_target(&store, &policy, ExecutionMode::Commit, today)
        .await
        .unwrap();
    assert_eq!(first.deleted, 3);
    assert_eq!(
        store.remaining(),
        vec!["host-2024-01-08", "host-2024-01-31", "host-2024-02-01"]
    );

    let second = prune_target(&store, &policy, ExecutionMode::Commit, today)
        .await
        .unwrap();
    assert_eq!(second.deleted, 0);
    assert_eq!(store.remaining().len(), 3);
}

/// Build a key tree with the given credential file names and a config
/// pointing the driver at it, with `binary` standing in for tarsnap.
fn driver_config(keys: &[&str], binary: &str) -> (tempfile::TempDir, SweepConfig) {
    let dir = tempfile::tempdir().unwrap();
    let key_dir = dir.path().join("keys");
    fs::create_dir(&key_dir).unwrap();
    for key in keys {
        fs::write(key_dir.join(key), b"key material").unwrap();
    }

    let config = SweepConfig {
        key_dir,
        cache_dir: dir.path().join("cache"),
        tarsnap_binary: PathBuf::from(binary),
        policy: RetentionPolicy::default(),
    };
    (dir, config)
}

#[tokio::test]
async fn driver_processes_every_discovered_target() {
    // `true` accepts any flags and lists nothing, so each target is an
    // empty-listing no-op.
    let (dir, config) = driver_config(&["db01.cleanup.key", "web01.cleanup.key"], "true");

    let report = run(&config, ExecutionMode::DryRun, date(2024, 3, 10))
        .await
        .unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.failed, 0);
    assert!(report.is_clean());

    // Each target got its own isolated cache directory.
    assert!(dir.path().join("cache").join("db01").is_dir());
    assert!(dir.path().join("cache").join("web01").is_dir());
}

#[tokio::test]
async fn bad_credential_name_skips_only_that_target() {
    let (_dir, config) = driver_config(&["oopscleanup.key", "web01.cleanup.key"], "true");

    let report = run(&config, ExecutionMode::Commit, date(2024, 3, 10))
        .await
        .unwrap();

    assert_eq!(report.processed, 1);
    assert_eq!(report.failed, 1);
    assert!(!report.is_clean());
}

#[tokio::test]
async fn tool_failure_is_fatal_for_the_target() {
    // `false` makes the cache refresh fail, so no listing is trusted and
    // the target aborts.
    let (_dir, config) = driver_config(&["db01.cleanup.key"], "false");

    let report = run(&config, ExecutionMode::Commit, date(2024, 3, 10))
        .await
        .unwrap();

    assert_eq!(report.processed, 0);
    assert_eq!(report.failed, 1);
}

#[tokio::test]
async fn empty_key_directory_is_a_clean_run() {
    let (_dir, config) = driver_config(&[], "true");

    let report = run(&config, ExecutionMode::Commit, date(2024, 3, 10))
        .await
        .unwrap();

    assert_eq!(report.processed, 0);
    assert!(report.is_clean());
}
