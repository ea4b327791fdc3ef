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

use clap::{Parser, Subcommand};
use orch_api::cli::OutputFormat;

use crate::{
    amt_profile, deployment, deployment_package, generate_shell_complete, host, login,
    os_profile, project, site, version,
};

#[derive(Parser, Debug)]
#[clap(name = "orch-cli")]
#[clap(about = "Command line client for the edge orchestrator")]
pub struct CliOptions {
    #[clap(
        long,
        default_value = "false",
        help = "Print version number of orch-cli and exit."
    )]
    pub version: bool,

    #[clap(short = 'a', long, env = "ORCH_API_ENDPOINT")]
    #[clap(
        help = "Default to ORCH_API_ENDPOINT environment variable or $HOME/.config/orch-cli.json file."
    )]
    pub api_endpoint: Option<String>,

    #[clap(short = 'k', long, env = "ORCH_KEYCLOAK_ENDPOINT")]
    #[clap(
        help = "Default to ORCH_KEYCLOAK_ENDPOINT environment variable or $HOME/.config/orch-cli.json file."
    )]
    pub keycloak_endpoint: Option<String>,

    #[clap(short = 'P', long, env = "ORCH_PROJECT")]
    #[clap(
        help = "Default to ORCH_PROJECT environment variable or $HOME/.config/orch-cli.json file."
    )]
    pub project: Option<String>,

    #[clap(long, env = "ORCH_CA_CERT_PATH")]
    #[clap(
        help = "Default to ORCH_CA_CERT_PATH environment variable or $HOME/.config/orch-cli.json file."
    )]
    pub ca_cert_path: Option<String>,

    #[clap(short, long, value_enum, default_value = "ascii-table")]
    pub format: OutputFormat,

    #[clap(short, long)]
    pub output: Option<String>,

    #[clap(short, long, num_args(0..), default_value = "0")]
    pub debug: u8,

    #[clap(short, long, global = true, help = "Show more columns in list output.")]
    pub verbose: bool,

    #[clap(long, default_value_t = 100)]
    #[clap(help = "For commands that internally retrieve data with paging, use this page size.")]
    pub page_size: u32,

    #[clap(subcommand)]
    pub commands: Option<CliCommand>,
}

#[derive(Parser, Debug)]
pub enum CliCommand {
    #[clap(about = "Log in and store an access token")]
    Login(login::Login),
    #[clap(about = "Remove the stored access token")]
    Logout(login::Logout),
    #[clap(about = "Register a resource", subcommand)]
    Register(RegisterCmd),
    #[clap(about = "Create a resource", subcommand)]
    Create(CreateCmd),
    #[clap(about = "List resources", subcommand, visible_alias = "ls")]
    List(ListCmd),
    #[clap(about = "Show a single resource", subcommand)]
    Get(GetCmd),
    #[clap(about = "Delete a resource", subcommand, visible_alias = "rm")]
    Delete(DeleteCmd),
    #[clap(about = "Deauthorize a resource", subcommand)]
    Deauthorize(DeauthorizeCmd),
    #[clap(about = "Print orch-cli build information", visible_alias = "v")]
    Version(version::Opts),
    #[clap(about = "Generate shell autocomplete. Source the output of this command: `source <(orch-cli generate-shell-complete bash)`")]
    GenerateShellComplete(generate_shell_complete::Cmd),
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum RegisterCmd {
    #[clap(about = "Register a host by serial number and/or UUID")]
    Host(host::args::RegisterHost),
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum CreateCmd {
    #[clap(about = "Import hosts from a CSV file, or write an empty import template")]
    Host(host::args::CreateHost),
    #[clap(about = "Deploy a deployment package")]
    Deployment(deployment::args::CreateDeployment),
    #[clap(about = "Create a project")]
    Project(project::args::CreateProject),
    #[clap(about = "Create an AMT profile from a provisioning certificate")]
    AmtProfile(amt_profile::args::CreateAmtProfile),
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum ListCmd {
    Host(host::args::ListHost),
    Site(site::args::ListSite),
    OsProfile(os_profile::args::ListOsProfile),
    DeploymentPackage(deployment_package::args::ListDeploymentPackage),
    Deployment(deployment::args::ListDeployment),
    Project(project::args::ListProject),
    AmtProfile(amt_profile::args::ListAmtProfile),
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum GetCmd {
    Host(host::args::GetHost),
    Site(site::args::GetSite),
    OsProfile(os_profile::args::GetOsProfile),
    DeploymentPackage(deployment_package::args::GetDeploymentPackage),
    Deployment(deployment::args::GetDeployment),
    Project(project::args::GetProject),
    AmtProfile(amt_profile::args::GetAmtProfile),
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum DeleteCmd {
    Host(host::args::DeleteHost),
    Deployment(deployment::args::DeleteDeployment),
    Project(project::args::DeleteProject),
    AmtProfile(amt_profile::args::DeleteAmtProfile),
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum DeauthorizeCmd {
    #[clap(about = "Invalidate a host so it can no longer connect")]
    Host(host::args::DeauthorizeHost),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cmd_structure() {
        CliOptions::command().debug_assert();
    }

    #[test]
    fn test_verb_first_tree() {
        let opts = CliOptions::try_parse_from([
            "orch-cli",
            "--api-endpoint",
            "https://api.orch.example.com",
            "create",
            "host",
            "--import-from-csv",
            "hosts.csv",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(
            opts.api_endpoint.as_deref(),
            Some("https://api.orch.example.com")
        );
        let Some(CliCommand::Create(CreateCmd::Host(args))) = opts.commands else {
            panic!("expected create host");
        };
        assert!(args.dry_run);
    }

    #[test]
    fn test_global_verbose_after_resource() {
        let opts =
            CliOptions::try_parse_from(["orch-cli", "list", "os-profile", "--verbose"]).unwrap();
        assert!(opts.verbose);
        assert!(matches!(
            opts.commands,
            Some(CliCommand::List(ListCmd::OsProfile(_)))
        ));
    }

    #[test]
    fn test_debug_count_and_defaults() {
        let opts = CliOptions::try_parse_from(["orch-cli", "-d", "2"]).unwrap();
        assert_eq!(opts.debug, 2);
        assert_eq!(opts.page_size, 100);
        assert_eq!(opts.format, OutputFormat::AsciiTable);
        assert!(opts.commands.is_none());
    }

    #[test]
    fn test_delete_rejects_unsupported_resource() {
        assert!(CliOptions::try_parse_from(["orch-cli", "delete", "site", "site-a"]).is_err());
        assert!(CliOptions::try_parse_from(["orch-cli", "register", "project", "blue"]).is_err());
    }
}
