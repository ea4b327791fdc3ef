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
use orch_api::tenancy::Project;
use prettytable::{Table, row};

use super::args::{CreateProject, DeleteProject, GetProject, ListProject};
use crate::async_write::OutputFile;
use crate::async_writeln;
use crate::client::ApiClient;
use crate::output::{key_value_table, write_formatted};

pub async fn list(
    _args: ListProject,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
    verbose: bool,
) -> CliResult<()> {
    let projects = api_client.tenancy.list_projects().await?;
    write_formatted(output_file, format, &projects, || {
        project_table(&projects, verbose)
    })
    .await
}

pub async fn get(
    args: GetProject,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
) -> CliResult<()> {
    let project = api_client.tenancy.get_project(&args.name).await?;
    let table = || {
        let status = &project.status.project_status;
        key_value_table(vec![
            ("Name", project.name.clone()),
            ("Description", project.spec.description.clone()),
            ("Status", status.status_indicator.clone()),
            ("Message", status.message.clone()),
            ("UID", status.uid.clone()),
        ])
    };
    write_formatted(output_file, format, &project, table).await
}

pub async fn create(
    args: CreateProject,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
) -> CliResult<()> {
    api_client
        .tenancy
        .create_project(&args.name, &args.description)
        .await?;
    async_writeln!(output_file, "Project {} created", args.name)?;
    Ok(())
}

pub async fn delete(
    args: DeleteProject,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
) -> CliResult<()> {
    api_client.tenancy.delete_project(&args.name).await?;
    async_writeln!(output_file, "Project {} deleted", args.name)?;
    Ok(())
}

fn project_table(projects: &[Project], verbose: bool) -> Table {
    let mut table = Table::new();
    if verbose {
        table.set_titles(row!["Name", "Description", "Status", "Message", "UID"]);
    } else {
        table.set_titles(row!["Name", "Description", "Status"]);
    }
    for project in projects {
        let status = &project.status.project_status;
        if verbose {
            table.add_row(row![
                project.name,
                project.spec.description,
                status.status_indicator,
                status.message,
                status.uid,
            ]);
        } else {
            table.add_row(row![
                project.name,
                project.spec.description,
                status.status_indicator,
            ]);
        }
    }
    table
}
