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

pub mod args;
pub mod cmds;


use orch_api::cli::CliResult;
pub use args::{Login, Logout};

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

impl Dispatch for Login {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        cmds::login(
            self,
            &ctx.http_client,
            ctx.config.keycloak_endpoint.as_deref(),
            &ctx.config.token_path,
            &mut ctx.output_file,
        )
        .await
    }
}

impl Dispatch for Logout {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        cmds::logout(&ctx.config.token_path, &mut ctx.output_file).await
    }
}
