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

use orch_api::cli::CliResult;

use crate::cfg::cli_options::{
    CliCommand, CreateCmd, DeauthorizeCmd, DeleteCmd, GetCmd, ListCmd, RegisterCmd,
};
use crate::cfg::runtime::RuntimeContext;
use crate::{amt_profile, deployment, deployment_package, host, os_profile, project, site};

// Dispatch is a trait implemented by all CLI command types.
// It provides a unified interface for executing commands with
// the runtime context.
pub(crate) trait Dispatch {
    fn dispatch(self, ctx: RuntimeContext) -> impl std::future::Future<Output = CliResult<()>>;
}

impl Dispatch for CliCommand {
    async fn dispatch(self, ctx: RuntimeContext) -> CliResult<()> {
        match self {
            CliCommand::Login(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Logout(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Register(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Create(cmd) => cmd.dispatch(ctx).await,
            CliCommand::List(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Get(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Delete(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Deauthorize(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Version(cmd) => cmd.dispatch(ctx).await,
            CliCommand::GenerateShellComplete(cmd) => cmd.dispatch(ctx).await,
        }
    }
}

impl Dispatch for RegisterCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        let (api_client, output_file, config) = ctx.api_parts()?;
        match self {
            RegisterCmd::Host(args) => {
                host::cmds::register(args, api_client, output_file, config.format).await
            }
        }
    }
}

impl Dispatch for CreateCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        // Writing the import template needs no orchestrator.
        if let CreateCmd::Host(args) = &self
            && args.generate_csv.is_some()
        {
            return host::cmds::generate_template(args, &mut ctx.output_file).await;
        }

        let (api_client, output_file, config) = ctx.api_parts()?;
        match self {
            CreateCmd::Host(args) => {
                host::cmds::create(args, api_client, output_file, config.format).await
            }
            CreateCmd::Deployment(args) => {
                deployment::cmds::create(args, api_client, output_file).await
            }
            CreateCmd::Project(args) => project::cmds::create(args, api_client, output_file).await,
            CreateCmd::AmtProfile(args) => {
                amt_profile::cmds::create(args, api_client, output_file).await
            }
        }
    }
}

impl Dispatch for ListCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        let (api_client, output_file, config) = ctx.api_parts()?;
        let (format, verbose) = (config.format, config.verbose);
        match self {
            ListCmd::Host(args) => {
                host::cmds::list(args, api_client, output_file, format, verbose).await
            }
            ListCmd::Site(args) => site::cmds::list(args, api_client, output_file, format).await,
            ListCmd::OsProfile(args) => {
                os_profile::cmds::list(args, api_client, output_file, format, verbose).await
            }
            ListCmd::DeploymentPackage(args) => {
                deployment_package::cmds::list(args, api_client, output_file, format, verbose)
                    .await
            }
            ListCmd::Deployment(args) => {
                deployment::cmds::list(args, api_client, output_file, format, verbose).await
            }
            ListCmd::Project(args) => {
                project::cmds::list(args, api_client, output_file, format, verbose).await
            }
            ListCmd::AmtProfile(args) => {
                amt_profile::cmds::list(args, api_client, output_file, format).await
            }
        }
    }
}

impl Dispatch for GetCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        let (api_client, output_file, config) = ctx.api_parts()?;
        let format = config.format;
        match self {
            GetCmd::Host(args) => host::cmds::get(args, api_client, output_file, format).await,
            GetCmd::Site(args) => site::cmds::get(args, api_client, output_file, format).await,
            GetCmd::OsProfile(args) => {
                os_profile::cmds::get(args, api_client, output_file, format).await
            }
            GetCmd::DeploymentPackage(args) => {
                deployment_package::cmds::get(args, api_client, output_file, format).await
            }
            GetCmd::Deployment(args) => {
                deployment::cmds::get(args, api_client, output_file, format).await
            }
            GetCmd::Project(args) => {
                project::cmds::get(args, api_client, output_file, format).await
            }
            GetCmd::AmtProfile(args) => {
                amt_profile::cmds::get(args, api_client, output_file, format).await
            }
        }
    }
}

impl Dispatch for DeleteCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        let (api_client, output_file, _) = ctx.api_parts()?;
        match self {
            DeleteCmd::Host(args) => host::cmds::delete(args, api_client, output_file).await,
            DeleteCmd::Deployment(args) => {
                deployment::cmds::delete(args, api_client, output_file).await
            }
            DeleteCmd::Project(args) => project::cmds::delete(args, api_client, output_file).await,
            DeleteCmd::AmtProfile(args) => {
                amt_profile::cmds::delete(args, api_client, output_file).await
            }
        }
    }
}

impl Dispatch for DeauthorizeCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        let (api_client, output_file, _) = ctx.api_parts()?;
        match self {
            DeauthorizeCmd::Host(args) => {
                host::cmds::deauthorize(args, api_client, output_file).await
            }
        }
    }
}
