/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! # Tarsnap Collaborator
//!
//! Everything the retention driver needs from the external `tarsnap` tool:
//!
//! - The [`ArchiveStore`] trait describing the three operations a pruning
//!   run relies on (cache refresh, archive listing, archive deletion)
//! - [`TarsnapClient`], which implements the trait by spawning the real
//!   binary with a per-target key file and cache directory
//! - [`Target`] discovery from `*cleanup.key` credential files, pairing
//!   each key with an isolated cache directory
//!
//! The selection algorithm itself lives in the `retention` crate and never
//! touches this one; the driver wires the two together.

pub mod client;
pub mod error;
pub mod store;
pub mod target;

pub use client::TarsnapClient;
pub use error::{Result, TarsnapError};
pub use store::ArchiveStore;
pub use target::{discover_targets, Target};
