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

use std::path::PathBuf;

use orch_api::cli::{CliError, CliResult, OutputFormat};

use crate::async_write::OutputFile;
use crate::client::ApiClient;

// RuntimeContext is context passed to all subcommand
// dispatch handlers. This is built at the beginning of
// runtime and then passed to the appropriate dispatcher.
pub struct RuntimeContext {
    // None when no API endpoint is configured. Commands that don't talk
    // to the orchestrator (login, version, ...) still run.
    pub api_client: Option<ApiClient>,
    pub http_client: reqwest::Client,
    pub config: RuntimeConfig,
    pub output_file: OutputFile,
}

impl RuntimeContext {
    // Splits the context into the pieces a command handler needs,
    // failing when no API endpoint was configured.
    pub fn api_parts(&mut self) -> CliResult<(&ApiClient, &mut OutputFile, &RuntimeConfig)> {
        let api_client = self.api_client.as_ref().ok_or_else(|| {
            CliError::MissingApiEndpoint(self.config.config_path.display().to_string())
        })?;
        Ok((api_client, &mut self.output_file, &self.config))
    }
}

// RuntimeConfig contains runtime configuration parameters extracted
// from CLI options. This should contain the entirety of any options
// that need to be leveraged by any downstream command handler.
pub struct RuntimeConfig {
    pub format: OutputFormat,
    pub page_size: u32,
    pub verbose: bool,
    pub api_endpoint: Option<String>,
    pub project: Option<String>,
    pub keycloak_endpoint: Option<String>,
    pub config_path: PathBuf,
    pub token_path: PathBuf,
}
