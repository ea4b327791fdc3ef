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

use clap::Parser;

#[derive(Parser, Debug, Clone)]
pub struct ListOsProfile {
    #[clap(
        short,
        long,
        help = "Optional, filter expression passed to the orchestrator, e.g. osType=\"OS_TYPE_IMMUTABLE\""
    )]
    pub filter: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct GetOsProfile {
    #[clap(help = "OS profile name or resource ID")]
    pub os_profile: String,
}
