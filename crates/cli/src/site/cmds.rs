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
use orch_api::infra::{InfraApi, Site};
use orch_api::{OrchApiError, or_filter};
use prettytable::{Table, row};

use super::args::{GetSite, ListSite};
use crate::async_write::OutputFile;
use crate::client::ApiClient;
use crate::output::{key_value_table, write_formatted};

pub async fn list(
    args: ListSite,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
) -> CliResult<()> {
    let sites = api_client.infra.list_sites(args.filter.as_deref()).await?;
    write_formatted(output_file, format, &sites, || site_table(&sites)).await
}

pub async fn get(
    args: GetSite,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
) -> CliResult<()> {
    let site = find_site(&api_client.infra, &args.site).await?;
    let table = || {
        key_value_table(vec![
            ("Resource ID", site.resource_id.clone()),
            ("Name", site.name.clone()),
            ("Region", site.region_name().to_string()),
        ])
    };
    write_formatted(output_file, format, &site, table).await
}

/// Looks a site up by name or resource ID. The last match wins, same as
/// during host import.
pub async fn find_site(infra: &dyn InfraApi, reference: &str) -> Result<Site, OrchApiError> {
    infra
        .list_sites(Some(&or_filter("name", "resourceId", reference)))
        .await?
        .pop()
        .ok_or_else(|| OrchApiError::NotFound {
            kind: "Site",
            reference: reference.to_string(),
        })
}

fn site_table(sites: &[Site]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Resource ID", "Name", "Region"]);
    for site in sites {
        table.add_row(row![site.resource_id, site.name, site.region_name()]);
    }
    table
}
