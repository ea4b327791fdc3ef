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
use orch_api::deployment::{Deployment, DeploymentCreate, TargetCluster};
use prettytable::{Table, row};

use super::args::{CreateDeployment, DeleteDeployment, GetDeployment, ListDeployment};
use crate::async_write::OutputFile;
use crate::async_writeln;
use crate::client::ApiClient;
use crate::output::{join_pairs, key_value_table, write_formatted};

pub const DEPLOYMENT_TYPE_TARGETED: &str = "targeted";
pub const DEPLOYMENT_TYPE_AUTO_SCALING: &str = "auto-scaling";

pub async fn list(
    args: ListDeployment,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
    verbose: bool,
) -> CliResult<()> {
    let mut deployments = api_client.deployment.list_deployments().await?;
    if let Some(app_name) = args.app_name.as_deref() {
        deployments.retain(|d| d.app_name == app_name);
    }
    write_formatted(output_file, format, &deployments, || {
        deployment_table(&deployments, verbose)
    })
    .await
}

pub async fn get(
    args: GetDeployment,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
    format: OutputFormat,
) -> CliResult<()> {
    let deployment = api_client
        .deployment
        .get_deployment(&args.deployment_id)
        .await?;
    write_formatted(output_file, format, &deployment, || {
        deployment_details(&deployment)
    })
    .await
}

pub async fn create(
    args: CreateDeployment,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
) -> CliResult<()> {
    let request = deployment_request(args);
    let id = api_client.deployment.create_deployment(&request).await?;
    tracing::info!(
        "Deployment {id} created for {}:{}",
        request.app_name,
        request.app_version
    );
    async_writeln!(output_file, "Deployment {id} created")?;
    Ok(())
}

pub async fn delete(
    args: DeleteDeployment,
    api_client: &ApiClient,
    output_file: &mut OutputFile,
) -> CliResult<()> {
    api_client
        .deployment
        .delete_deployment(&args.deployment_id)
        .await?;
    async_writeln!(output_file, "Deployment {} deleted", args.deployment_id)?;
    Ok(())
}

/// Cluster IDs make a targeted deployment with one target per cluster,
/// labels an auto-scaling deployment with a single labelled target.
pub fn deployment_request(args: CreateDeployment) -> DeploymentCreate {
    let (deployment_type, target_clusters) = if args.cluster_id.is_empty() {
        (
            DEPLOYMENT_TYPE_AUTO_SCALING,
            vec![TargetCluster {
                app_name: args.app_name.clone(),
                labels: args.label.into_iter().collect(),
                ..Default::default()
            }],
        )
    } else {
        (
            DEPLOYMENT_TYPE_TARGETED,
            args.cluster_id
                .into_iter()
                .map(|cluster_id| TargetCluster {
                    app_name: args.app_name.clone(),
                    cluster_id,
                    ..Default::default()
                })
                .collect(),
        )
    };

    DeploymentCreate {
        app_name: args.app_name,
        app_version: args.app_version,
        profile_name: args.profile.unwrap_or_default(),
        display_name: args.display_name.unwrap_or_default(),
        deployment_type: deployment_type.to_string(),
        target_clusters,
    }
}

fn deployment_table(deployments: &[Deployment], verbose: bool) -> Table {
    let mut table = Table::new();
    if verbose {
        table.set_titles(row![
            "Deployment ID",
            "Display Name",
            "Application",
            "Version",
            "Profile",
            "Type",
            "State",
            "Created",
        ]);
    } else {
        table.set_titles(row!["Deployment ID", "Display Name", "Application", "Version", "State"]);
    }

    for d in deployments {
        if verbose {
            table.add_row(row![
                d.deploy_id,
                d.display_name,
                d.app_name,
                d.app_version,
                d.profile_name,
                d.deployment_type,
                d.state(),
                d.create_time,
            ]);
        } else {
            table.add_row(row![d.deploy_id, d.display_name, d.app_name, d.app_version, d.state()]);
        }
    }
    table
}

fn deployment_details(d: &Deployment) -> Table {
    let targets = d
        .target_clusters
        .iter()
        .map(|t| {
            if t.cluster_id.is_empty() {
                join_pairs(t.labels.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            } else {
                t.cluster_id.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    key_value_table(vec![
        ("Deployment ID", d.deploy_id.clone()),
        ("Name", d.name.clone()),
        ("Display Name", d.display_name.clone()),
        ("Application", d.app_name.clone()),
        ("Version", d.app_version.clone()),
        ("Profile", d.profile_name.clone()),
        ("Type", d.deployment_type.clone()),
        ("State", d.state().to_string()),
        (
            "Message",
            d.status.as_ref().map(|s| s.message.clone()).unwrap_or_default(),
        ),
        ("Created", d.create_time.clone()),
        ("Targets", targets),
    ])
}
