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

use clap::{ArgGroup, Args, Parser};

#[derive(Parser, Debug, Clone)]
#[clap(group(ArgGroup::new("identity").required(true).multiple(true).args(["serial", "uuid"])))]
pub struct RegisterHost {
    #[clap(long, help = "Name of the host")]
    pub name: String,

    #[clap(long, help = "Serial number of the host")]
    pub serial: Option<String>,

    #[clap(long, help = "System UUID of the host")]
    pub uuid: Option<String>,

    #[clap(long, help = "Onboard the host as soon as it connects")]
    pub auto_onboard: bool,
}

#[derive(Parser, Debug, Clone)]
#[clap(group(ArgGroup::new("source").required(true).args(["import_from_csv", "generate_csv"])))]
pub struct CreateHost {
    #[clap(
        long,
        value_name = "FILE",
        help = "Register every host listed in a CSV file"
    )]
    pub import_from_csv: Option<PathBuf>,

    #[clap(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = "hosts.csv",
        help = "Write an empty host import template (default: hosts.csv)"
    )]
    pub generate_csv: Option<PathBuf>,

    #[clap(
        long,
        requires = "import_from_csv",
        help = "Only validate the CSV file, writing an error report if needed"
    )]
    pub dry_run: bool,

    #[clap(flatten)]
    pub overrides: ImportOverrides,
}

// ImportOverrides replace the matching column of every record
// before validation.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOverrides {
    #[clap(long, help = "OS profile name or ID for every host")]
    pub os_profile: Option<String>,

    #[clap(long, help = "Site name or ID for every host")]
    pub site: Option<String>,

    #[clap(long, help = "Enable (true) or disable (false) secure boot and FDE for every host")]
    pub secure: Option<bool>,

    #[clap(long, help = "Local account user name for every host")]
    pub remote_user: Option<String>,

    #[clap(long, help = "Metadata for every host, key=value pairs joined by &")]
    pub metadata: Option<String>,

    #[clap(long, help = "Cluster template for every host, <name>:<version>")]
    pub cluster_template: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListHost {
    #[clap(long, help = "Optional, filter expression passed to the orchestrator")]
    pub filter: Option<String>,

    #[clap(long, help = "Optional, only list hosts of this site (name or ID)")]
    pub site: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct GetHost {
    #[clap(help = "Host resource ID")]
    pub host_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteHost {
    #[clap(help = "Host resource ID")]
    pub host_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DeauthorizeHost {
    #[clap(help = "Host resource ID")]
    pub host_id: String,

    #[clap(long, help = "Optional, reason recorded with the deauthorization")]
    pub reason: Option<String>,
}
