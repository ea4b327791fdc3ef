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

use orch_api::catalog::DeploymentPackage;
use orch_api::cli::{CliResult, OutputFormat};
use prettytable::{Table, row};

use super::args::{GetDeploymentPackage, ListDeploymentPackage};
use crate::async_write::OutputFile;
use crate::client::ApiClient;
use crate::output::{key_value_table, write_formatted};

pub async fn list(
    args: ListDeploymentPackage,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
    verbose: bool,
) -> CliResult<()> {
    let mut packages = api_client.catalog.list_deployment_packages().await?;
    if args.deployed {
        packages.retain(|p| p.is_deployed);
    }
    write_formatted(output_file, format, &packages, || {
        package_table(&packages, verbose)
    })
    .await
}

pub async fn get(
    args: GetDeploymentPackage,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
) -> CliResult<()> {
    let package = api_client
        .catalog
        .get_deployment_package(&args.name, &args.version)
        .await?;
    write_formatted(output_file, format, &package, || package_details(&package)).await
}

fn package_table(packages: &[DeploymentPackage], verbose: bool) -> Table {
    let mut table = Table::new();
    if verbose {
        table.set_titles(row![
            "Name",
            "Version",
            "Display Name",
            "Kind",
            "Default Profile",
            "Deployed",
            "Applications",
        ]);
    } else {
        table.set_titles(row!["Name", "Version", "Display Name", "Deployed"]);
    }

    for package in packages {
        if verbose {
            table.add_row(row![
                package.name,
                package.version,
                package.display_name,
                package.kind,
                package.default_profile_name,
                package.is_deployed,
                applications(package),
            ]);
        } else {
            table.add_row(row![
                package.name,
                package.version,
                package.display_name,
                package.is_deployed,
            ]);
        }
    }
    table
}

fn package_details(package: &DeploymentPackage) -> Table {
    key_value_table(vec![
        ("Name", package.name.clone()),
        ("Version", package.version.clone()),
        ("Display Name", package.display_name.clone()),
        ("Description", package.description.clone()),
        ("Kind", package.kind.clone()),
        ("Deployed", package.is_deployed.to_string()),
        ("Default Profile", package.default_profile_name.clone()),
        ("Applications", applications(package)),
        (
            "Profiles",
            package
                .profiles
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        ),
    ])
}

fn applications(package: &DeploymentPackage) -> String {
    package
        .application_references
        .iter()
        .map(|a| format!("{}:{}", a.name, a.version))
        .collect::<Vec<_>>()
        .join("\n")
}
