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

use std::path::Path;

use base64::prelude::*;
use orch_api::cli::{CliError, CliResult, OutputFormat};
use orch_api::rps::{CERT_FORMAT_STRING, Domain};
use prettytable::{Table, row};

use super::args::{CreateAmtProfile, DeleteAmtProfile, GetAmtProfile, ListAmtProfile};
use crate::async_write::OutputFile;
use crate::async_writeln;
use crate::client::ApiClient;
use crate::output::{key_value_table, write_formatted};

pub async fn list(
    _args: ListAmtProfile,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
) -> CliResult<()> {
    let domains = api_client.rps.list_domains().await?;
    write_formatted(output_file, format, &domains, || domain_table(&domains)).await
}

pub async fn get(
    args: GetAmtProfile,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
) -> CliResult<()> {
    let domain = api_client.rps.get_domain(&args.name).await?;
    let table = || {
        key_value_table(vec![
            ("Name", domain.profile_name.clone()),
            ("Domain Suffix", domain.domain_suffix.clone()),
            ("Certificate Format", domain.provisioning_cert_storage_format.clone()),
            ("Expiration Date", domain.expiration_date.clone()),
            ("Tenant ID", domain.tenant_id.clone()),
            ("Version", domain.version.clone()),
        ])
    };
    write_formatted(output_file, format, &domain, table).await
}

pub async fn create(
    args: CreateAmtProfile,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
) -> CliResult<()> {
    let domain = domain_request(args)?;
    let created = api_client.rps.create_domain(&domain).await?;
    async_writeln!(
        output_file,
        "AMT profile {} created for {}",
        created.profile_name,
        created.domain_suffix
    )?;
    Ok(())
}

pub async fn delete(
    args: DeleteAmtProfile,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
) -> CliResult<()> {
    api_client.rps.delete_domain(&args.name).await?;
    async_writeln!(output_file, "AMT profile {} deleted", args.name)?;
    Ok(())
}

/// Builds the domain from the command arguments, embedding the certificate
/// file as base64.
pub fn domain_request(args: CreateAmtProfile) -> CliResult<Domain> {
    if args.cert_password.is_empty() {
        return Err(CliError::GenericError(
            "The provisioning certificate password must not be empty".to_string(),
        ));
    }
    Ok(Domain {
        profile_name: args.name,
        domain_suffix: args.domain_suffix,
        provisioning_cert: read_certificate(&args.cert)?,
        provisioning_cert_storage_format: CERT_FORMAT_STRING.to_string(),
        provisioning_cert_password: args.cert_password,
        ..Default::default()
    })
}

fn read_certificate(path: &Path) -> CliResult<String> {
    let cert = std::fs::read(path)?;
    if cert.is_empty() {
        return Err(CliError::GenericError(format!(
            "Provisioning certificate {} is empty",
            path.display()
        )));
    }
    Ok(BASE64_STANDARD.encode(cert))
}

fn domain_table(domains: &[Domain]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Name", "Domain Suffix", "Expiration Date"]);
    for domain in domains {
        table.add_row(row![
            domain.profile_name,
            domain.domain_suffix,
            domain.expiration_date,
        ]);
    }
    table
}
