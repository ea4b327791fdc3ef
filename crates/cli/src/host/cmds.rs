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

use host_validator::{ErrorCode, is_valid_serial, is_valid_uuid, write_template};
use orch_api::cli::{CliError, CliResult, OutputFormat};
use orch_api::infra::{Host, HostRegister, InfraApi};
use prettytable::{Table, row};

use super::args::{CreateHost, DeauthorizeHost, DeleteHost, GetHost, ListHost, RegisterHost};
use super::import::{Importer, RegisteredHost};
use crate::async_write::OutputFile;
use crate::async_writeln;
use crate::client::ApiClient;
use crate::output::{join_pairs, key_value_table, write_formatted};
use crate::site::cmds::find_site;

pub async fn register(
    args: RegisterHost,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
) -> CliResult<()> {
    if let Some(serial) = args.serial.as_deref()
        && !is_valid_serial(serial)
    {
        return Err(CliError::GenericError(format!(
            "{}: {serial}",
            ErrorCode::InvalidSerial
        )));
    }
    if let Some(uuid) = args.uuid.as_deref()
        && !is_valid_uuid(uuid)
    {
        return Err(CliError::GenericError(format!(
            "{}: {uuid}",
            ErrorCode::InvalidUuid
        )));
    }

    let host = api_client
        .infra
        .register_host(&HostRegister {
            name: args.name,
            serial_number: args.serial,
            uuid: args.uuid,
            auto_onboard: args.auto_onboard,
        })
        .await?;
    write_formatted(output_file, format, &host, || host_details(&host)).await
}

pub async fn create(
    args: CreateHost,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
) -> CliResult<()> {
    if args.generate_csv.is_some() {
        return generate_template(&args, output_file).await;
    }
    let Some(path) = args.import_from_csv else {
        return Err(CliError::GenericError(
            "One of --import-from-csv or --generate-csv is required".to_string(),
        ));
    };

    let mut importer = Importer::new(&api_client.infra, &api_client.deployment);
    let summary = importer
        .import_file(&path, &args.overrides, args.dry_run, &chrono::Local::now())
        .await?;

    if summary.dry_run {
        if summary.report.is_none() {
            async_writeln!(
                output_file,
                "{} records in {} are valid",
                summary.total,
                path.display()
            )?;
        }
    } else if !summary.registered.is_empty() {
        write_formatted(output_file, format, &summary.registered, || {
            registered_table(&summary.registered)
        })
        .await?;
    }
    summary.check()
}

pub async fn generate_template(args: &CreateHost, output_file: &mut OutputFile) -> CliResult<()> {
    let Some(template) = args.generate_csv.as_deref() else {
        return Err(CliError::GenericError("--generate-csv requires a file".to_string()));
    };
    write_template(template)?;
    async_writeln!(output_file, "Host import template written to {}", template.display())?;
    Ok(())
}

pub async fn list(
    args: ListHost,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
    verbose: bool,
) -> CliResult<()> {
    let mut filter = args.filter;
    if let Some(site) = args.site.as_deref() {
        let site = find_site(&api_client.infra, site).await?;
        let site_filter = format!("site.resourceId=\"{}\"", site.resource_id);
        filter = Some(match filter {
            Some(f) => format!("({f}) AND {site_filter}"),
            None => site_filter,
        });
    }

    let hosts = api_client.infra.list_hosts(filter.as_deref()).await?;
    write_formatted(output_file, format, &hosts, || host_table(&hosts, verbose)).await
}

pub async fn get(
    args: GetHost,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
) -> CliResult<()> {
    let host = api_client.infra.get_host(&args.host_id).await?;
    write_formatted(output_file, format, &host, || host_details(&host)).await
}

pub async fn delete(
    args: DeleteHost,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
) -> CliResult<()> {
    api_client.infra.delete_host(&args.host_id).await?;
    async_writeln!(output_file, "Host {} deleted", args.host_id)?;
    Ok(())
}

pub async fn deauthorize(
    args: DeauthorizeHost,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
) -> CliResult<()> {
    api_client
        .infra
        .invalidate_host(&args.host_id, args.reason.as_deref())
        .await?;
    async_writeln!(output_file, "Host {} deauthorized", args.host_id)?;
    Ok(())
}

fn host_table(hosts: &[Host], verbose: bool) -> Table {
    let mut table = Table::new();
    if verbose {
        table.set_titles(row![
            "Resource ID",
            "Name",
            "Serial Number",
            "UUID",
            "Site",
            "Host Status",
            "Onboarding Status",
            "Current State",
            "Instance",
            "Metadata",
        ]);
    } else {
        table.set_titles(row![
            "Resource ID",
            "Name",
            "Serial Number",
            "UUID",
            "Site",
            "Host Status",
        ]);
    }

    for host in hosts {
        if verbose {
            table.add_row(row![
                host.resource_id,
                host.name,
                host.serial_number,
                host.uuid,
                host.site_name(),
                host.host_status,
                host.onboarding_status,
                host.current_state,
                host.instance.as_ref().map_or("", |i| i.resource_id.as_str()),
                metadata(host),
            ]);
        } else {
            table.add_row(row![
                host.resource_id,
                host.name,
                host.serial_number,
                host.uuid,
                host.site_name(),
                host.host_status,
            ]);
        }
    }
    table
}

fn host_details(host: &Host) -> Table {
    key_value_table(vec![
        ("Resource ID", host.resource_id.clone()),
        ("Name", host.name.clone()),
        ("Serial Number", host.serial_number.clone()),
        ("UUID", host.uuid.clone()),
        ("Site", host.site_name().to_string()),
        ("Host Status", host.host_status.clone()),
        ("Onboarding Status", host.onboarding_status.clone()),
        ("Registration Status", host.registration_status.clone()),
        ("Current State", host.current_state.clone()),
        ("Desired State", host.desired_state.clone()),
        (
            "Instance",
            host.instance
                .as_ref()
                .map(|i| i.resource_id.clone())
                .unwrap_or_default(),
        ),
        ("Metadata", metadata(host)),
        ("Note", host.note.clone()),
    ])
}

fn metadata(host: &Host) -> String {
    join_pairs(
        host.metadata
            .iter()
            .map(|m| (m.key.as_str(), m.value.as_str())),
    )
}

fn registered_table(hosts: &[RegisteredHost]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Line", "Name", "Host ID", "Instance ID", "Site", "Cluster"]);
    for host in hosts {
        table.add_row(row![
            host.line,
            host.name,
            host.host_id,
            host.instance_id,
            host.site,
            host.cluster.as_deref().unwrap_or(""),
        ]);
    }
    table
}
