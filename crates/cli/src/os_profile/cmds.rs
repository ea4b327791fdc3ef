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
use orch_api::infra::{InfraApi, OsProfile};
use orch_api::{OrchApiError, or_filter};
use prettytable::{Table, row};

use super::args::{GetOsProfile, ListOsProfile};
use crate::async_write::OutputFile;
use crate::client::ApiClient;
use crate::output::{key_value_table, write_formatted};

pub async fn list(
    args: ListOsProfile,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
    verbose: bool,
) -> CliResult<()> {
    let profiles = api_client
        .infra
        .list_os_profiles(args.filter.as_deref())
        .await?;
    write_formatted(output_file, format, &profiles, || {
        os_profile_table(&profiles, verbose)
    })
    .await
}

pub async fn get(
    args: GetOsProfile,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
) -> CliResult<()> {
    let profile = api_client
        .infra
        .list_os_profiles(Some(&or_filter("name", "resourceId", &args.os_profile)))
        .await?
        .pop()
        .ok_or(OrchApiError::NotFound {
            kind: "OS profile",
            reference: args.os_profile,
        })?;

    let table = || {
        key_value_table(vec![
            ("Resource ID", profile.resource_id.clone()),
            ("Name", profile.name.clone()),
            ("Profile Name", profile.profile_name.clone()),
            ("OS Type", profile.os_type.clone()),
            ("Architecture", profile.architecture.clone()),
            ("Security Feature", profile.security_feature.clone()),
            ("Image URL", profile.image_url.clone()),
        ])
    };
    write_formatted(output_file, format, &profile, table).await
}

fn os_profile_table(profiles: &[OsProfile], verbose: bool) -> Table {
    let mut table = Table::new();
    if verbose {
        table.set_titles(row![
            "Resource ID",
            "Name",
            "Profile Name",
            "OS Type",
            "Architecture",
            "Security Feature",
            "Image URL",
        ]);
    } else {
        table.set_titles(row!["Resource ID", "Name", "Architecture", "Security Feature"]);
    }

    for profile in profiles {
        if verbose {
            table.add_row(row![
                profile.resource_id,
                profile.name,
                profile.profile_name,
                profile.os_type,
                profile.architecture,
                profile.security_feature,
                profile.image_url,
            ]);
        } else {
            table.add_row(row![
                profile.resource_id,
                profile.name,
                profile.architecture,
                profile.security_feature,
            ]);
        }
    }
    table
}
