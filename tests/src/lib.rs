/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Integration tests for the tarsweep workspace

#[cfg(test)]
mod prune;
