// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `devsim` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! value validation, arithmetic evaluation, and text-file processing.
//!
//! Note that precondition failures on device and vehicle actions (device off,
//! battery too low, anchor down) are *not* errors: they are reported through
//! [`ActionOutcome`](crate::outcome::ActionOutcome) so callers inspect the
//! outcome instead of catching anything.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all genuine failures: invalid input values,
/// arithmetic errors, and filesystem errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while evaluating an arithmetic expression.
    #[error("calculation error: {0}")]
    Calc(#[from] CalcError),

    /// Error occurred while reading or writing a text file.
    #[error("file error: {0}")]
    File(#[from] FileError),

    /// Device was not found in the fleet.
    #[error("device not found")]
    DeviceNotFound,
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An invalid lock state string was provided.
    #[error("invalid lock state: {0}")]
    InvalidLockState(String),

    /// An unsupported arithmetic operator was provided.
    #[error("invalid operator `{0}`, expected one of +, -, *, /")]
    InvalidOperator(String),

    /// An unknown fuel type string was provided.
    #[error("unknown fuel type: {0}")]
    UnknownFuelType(String),

    /// An unknown camera mode string was provided.
    #[error("unknown camera mode: {0}")]
    UnknownCameraMode(String),
}

/// Errors related to arithmetic evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Division by zero was attempted.
    #[error("division by zero is not allowed")]
    DivisionByZero,
}

/// Errors related to text-file processing.
///
/// The common [`std::io::ErrorKind`] cases are classified into distinct
/// variants so each can be reported (and recovered from) differently.
#[derive(Debug, Error)]
pub enum FileError {
    /// The file does not exist.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission to access the file was denied.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The path points at a directory, not a file.
    #[error("{0} is a directory, not a file")]
    IsADirectory(PathBuf),

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FileError {
    /// Classifies an I/O error against the path it occurred on.
    #[must_use]
    pub fn classify(err: std::io::Error, path: &std::path::Path) -> Self {
        use std::io::ErrorKind;

        match err.kind() {
            ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            ErrorKind::IsADirectory => Self::IsADirectory(path.to_path_buf()),
            _ => Self::Io(err),
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
