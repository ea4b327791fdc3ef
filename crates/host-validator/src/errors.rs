/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */
use std::fmt;

/// ErrorCode enumerates every failure that can be written into the
/// error column of a host import file. The messages are fixed so
/// users can grep error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidSerial,
    InvalidUuid,
    MissingSerialOrUuid,
    MissingOsProfile,
    MissingSite,
    InvalidSecure,
    InvalidMetadata,
    InvalidClusterTemplate,
    DuplicateSerial,
    DuplicateUuid,
    OsSecurityMismatch,
    AlreadyRegistered,
    FileRw,
    CheckFailed,
    ImportFailed,
}

impl ErrorCode {
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::InvalidSerial => "Invalid Serial number",
            ErrorCode::InvalidUuid => "Invalid UUID",
            ErrorCode::MissingSerialOrUuid => "One of Serial number or UUID required",
            ErrorCode::MissingOsProfile => "OS Profile required",
            ErrorCode::MissingSite => "Site required",
            ErrorCode::InvalidSecure => "Invalid Secure value, expected true or false",
            ErrorCode::InvalidMetadata => {
                "Invalid Metadata, expected key=value pairs separated by &"
            }
            ErrorCode::InvalidClusterTemplate => {
                "Invalid Cluster template, expected <name>:<version>"
            }
            ErrorCode::DuplicateSerial => "Duplicate Serial number",
            ErrorCode::DuplicateUuid => "Duplicate UUID",
            ErrorCode::OsSecurityMismatch => "OS Profile and Secure feature mismatch",
            ErrorCode::AlreadyRegistered => "Host already registered",
            ErrorCode::FileRw => "Error reading or writing file",
            ErrorCode::CheckFailed => "Pre-flight check failed",
            ErrorCode::ImportFailed => "Failed to import all hosts",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// ValidationError is returned for problems with the import file as a
/// whole. Problems with individual records never produce one of these
/// directly; they are written into the record and summarized by
/// `CheckFailed`.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{}: {path}: {source}", ErrorCode::FileRw)]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Could not parse CSV {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("Invalid header in {path}: expected \"{expected}\", found \"{found}\"")]
    InvalidHeader {
        path: String,
        expected: String,
        found: String,
    },

    #[error("Malformed row at line {line} of {path}: expected {expected} fields, found {found}")]
    InvalidRowWidth {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error(
        "Error column is not empty at line {line} of {path}. Fix the record and clear the column before importing again"
    )]
    ErrorColumnPopulated { path: String, line: u64 },

    #[error("No host records found in {path}")]
    Empty { path: String },

    #[error("{}: {invalid} of {total} records are invalid", ErrorCode::CheckFailed)]
    CheckFailed { invalid: usize, total: usize },
}
