/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tarsweep driver library
//!
//! Wires the pure `retention` core to the `tarsnap` collaborator: runtime
//! configuration, the dry-run/commit execution mode, and the sequential
//! per-target run loop. The `tarsweep` binary is a thin CLI wrapper over
//! this crate.

pub mod config;
pub mod run;

pub use config::SweepConfig;
pub use run::{prune_target, run, ExecutionMode, RunReport, RunSummary};
