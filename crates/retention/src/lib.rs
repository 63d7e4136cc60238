/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! # Tiered Retention Core
//!
//! Pure selection logic that partitions a set of dated archive snapshots
//! into the archives to keep and the archives to delete:
//!
//! - A daily tier of the N most recent snapshots, kept unconditionally
//! - A weekly tier of up to M older snapshots whose dates fall exactly on
//!   7-day checkpoints walked forward from the oldest snapshot
//!
//! The core performs no I/O and holds no shared state; it is a pure
//! function of the archive listing, the policy, and the current calendar
//! day. Listing archives and deleting the selected ones is the job of the
//! `tarsnap` collaborator crate.

pub mod archive;
pub mod policy;
pub mod selector;

pub use archive::Archive;
pub use policy::{RetentionPolicy, WEEKLY_INTERVAL_DAYS};
pub use selector::{select_for_deletion, weekly_anchors, Selection};
