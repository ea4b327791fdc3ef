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

use orch_api::cli::{CliResult, OutputFormat};
use prettytable::{Table, row};
use serde::Serialize;

use super::args::Opts;
use crate::async_write::OutputFile;
use crate::async_writeln;
use crate::cfg::runtime::RuntimeConfig;
use crate::output::write_formatted;

#[derive(Debug, Serialize)]
struct VersionInfo {
    build_version: &'static str,
    build_date: &'static str,
    git_sha: &'static str,
    rust_version: &'static str,
    build_user: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    runtime_config: Option<RuntimeInfo>,
}

#[derive(Debug, Serialize)]
struct RuntimeInfo {
    api_endpoint: String,
    keycloak_endpoint: String,
    project: String,
    config_path: String,
    token_path: String,
    page_size: u32,
}

pub async fn show_version(
    opts: &Opts,
    config: &RuntimeConfig,
    output_file: &mut OutputFile,
) -> CliResult<()> {
    let runtime_config = opts.show_config.then(|| RuntimeInfo {
        api_endpoint: config.api_endpoint.clone().unwrap_or_default(),
        keycloak_endpoint: config.keycloak_endpoint.clone().unwrap_or_default(),
        project: config.project.clone().unwrap_or_default(),
        config_path: config.config_path.display().to_string(),
        token_path: config.token_path.display().to_string(),
        page_size: config.page_size,
    });
    let v = VersionInfo {
        build_version: orch_version::v!(build_version),
        build_date: orch_version::v!(build_date),
        git_sha: orch_version::v!(git_sha),
        rust_version: orch_version::v!(rust_version),
        build_user: orch_version::v!(build_user),
        runtime_config,
    };

    if config.format != OutputFormat::AsciiTable {
        return write_formatted(output_file, config.format, &v, || runtime_table(&v)).await;
    }

    // Same as running `orch-cli --version`
    async_writeln!(output_file, "orch-cli:\n\t{}", orch_version::version!())?;
    if v.runtime_config.is_some() {
        async_writeln!(output_file, "\nRuntime Config:\n{}", runtime_table(&v))?;
    }
    Ok(())
}

fn runtime_table(v: &VersionInfo) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Property", "Value"]);
    table.add_row(row!["build_version", v.build_version]);
    table.add_row(row!["git_sha", v.git_sha]);
    if let Some(config) = &v.runtime_config {
        table.add_row(row!["api_endpoint", config.api_endpoint]);
        table.add_row(row!["keycloak_endpoint", config.keycloak_endpoint]);
        table.add_row(row!["project", config.project]);
        table.add_row(row!["config_path", config.config_path]);
        table.add_row(row!["token_path", config.token_path]);
        table.add_row(row!["page_size", config.page_size]);
    }
    table
}
