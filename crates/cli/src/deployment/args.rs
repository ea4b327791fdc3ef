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

use clap::{ArgGroup, Parser};

#[derive(Parser, Debug, Clone)]
pub struct ListDeployment {
    #[clap(long, help = "Optional, only show deployments of this application")]
    pub app_name: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct GetDeployment {
    #[clap(help = "Deployment ID")]
    pub deployment_id: String,
}

#[derive(Parser, Debug, Clone)]
#[clap(group(ArgGroup::new("target").required(true).args(["cluster_id", "label"])))]
pub struct CreateDeployment {
    #[clap(help = "Deployment package name")]
    pub app_name: String,

    #[clap(help = "Deployment package version")]
    pub app_version: String,

    #[clap(long, help = "Optional, deployment profile, defaults to the package default")]
    pub profile: Option<String>,

    #[clap(long, help = "Optional, display name of the deployment")]
    pub display_name: Option<String>,

    #[clap(
        long,
        help = "Target cluster ID, repeat for several clusters. Creates a targeted deployment"
    )]
    pub cluster_id: Vec<String>,

    #[clap(
        long,
        value_parser = parse_label,
        help = "Cluster label as key=value, repeat for several labels. Creates an auto-scaling deployment"
    )]
    pub label: Vec<(String, String)>,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteDeployment {
    #[clap(help = "Deployment ID")]
    pub deployment_id: String,
}

pub fn parse_label(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("invalid label '{s}', expected key=value")),
    }
}
