/*
 * SPDX-FileCopyrightText: 2025 Tarsweep Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Error types for tool invocation and target discovery

use std::{path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Result type for collaborator operations
pub type Result<T> = std::result::Result<T, TarsnapError>;

/// Errors raised while driving the external tarsnap tool
#[derive(Error, Debug)]
pub enum TarsnapError {
    /// I/O error spawning the tool or preparing its cache directory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tool exited with a failure status
    #[error("tarsnap {command} failed ({status}): {stderr}")]
    Tool {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The tool produced output that was not valid UTF-8
    #[error("tarsnap produced non-UTF-8 output")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Credential file name does not encode a target name
    #[error("could not determine target name of {0}")]
    TargetName(PathBuf),
}
