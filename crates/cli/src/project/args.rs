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
pub struct ListProject {}

#[derive(Parser, Debug, Clone)]
pub struct GetProject {
    #[clap(help = "Project name")]
    pub name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CreateProject {
    #[clap(help = "Project name")]
    pub name: String,

    #[clap(short, long, default_value = "", help = "Optional, project description")]
    pub description: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteProject {
    #[clap(help = "Project name")]
    pub name: String,
}
