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

//! Error and output types shared by the command line client.

use std::path::PathBuf;

use clap::ValueEnum;
use host_validator::{ErrorCode, ValidationError};

use crate::OrchApiError;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("The API call to the orchestrator returned {0}")]
    ApiInvocationError(#[from] OrchApiError),

    #[error("No API endpoint configured. Pass --api-endpoint, set ORCH_API_ENDPOINT or add api_endpoint to {0}")]
    MissingApiEndpoint(String),

    #[error("No Keycloak endpoint configured. Pass --keycloak-endpoint or set ORCH_KEYCLOAK_ENDPOINT")]
    MissingKeycloakEndpoint,

    #[error("Generic Error: {0}")]
    GenericError(String),

    #[error("Error while handling json: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Error while handling yaml: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Error while writing csv: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error. Does the file exist? {0}")]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}: {failed} of {total} hosts failed, see {}", ErrorCode::ImportFailed, report.display())]
    ImportFailed {
        failed: usize,
        total: usize,
        report: PathBuf,
    },
}

pub type CliResult<T> = Result<T, CliError>;

#[derive(PartialEq, Eq, ValueEnum, Clone, Copy, Debug, Default)]
#[clap(rename_all = "kebab_case")]
pub enum OutputFormat {
    #[default]
    AsciiTable,
    Json,
    Yaml,
    Csv,
}
