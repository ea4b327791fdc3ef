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

use clap::Parser;

#[derive(Parser, Debug, Clone)]
pub struct ListAmtProfile {}

#[derive(Parser, Debug, Clone)]
pub struct GetAmtProfile {
    #[clap(help = "AMT profile name")]
    pub name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CreateAmtProfile {
    #[clap(help = "AMT profile name")]
    pub name: String,

    #[clap(long, help = "Domain suffix the provisioning certificate was issued for")]
    pub domain_suffix: String,

    #[clap(long, help = "Path to the PFX provisioning certificate")]
    pub cert: PathBuf,

    #[clap(
        long,
        env = "ORCH_AMT_CERT_PASSWORD",
        hide_env_values = true,
        help = "Password of the provisioning certificate"
    )]
    pub cert_password: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteAmtProfile {
    #[clap(help = "AMT profile name")]
    pub name: String,
}
