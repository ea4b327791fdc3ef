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

// CLI enums variants can be rather large, we are ok with that.
#![allow(clippy::large_enum_variant)]
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use orch_api::{Endpoint, RestClientBuilder};
use tracing::debug;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::async_write::get_output_file_or_stdout;
use crate::cfg::cli_options::CliOptions;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::file_config::{
    CONFIG_FILE, TOKEN_FILE, config_path, get_config_from_file, load_token, resolve, token_path,
};
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::client::ApiClient;

mod amt_profile;
mod async_write;
mod cfg;
mod client;
mod deployment;
mod deployment_package;
mod generate_shell_complete;
mod host;
mod login;
mod os_profile;
mod output;
mod project;
mod site;
mod version;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = CliOptions::parse();
    if config.version {
        println!("{}", orch_version::version!());
        return Ok(());
    }

    // Log level is set from, in order of preference:
    // 1. `--debug N` on cmd line
    // 2. RUST_LOG environment variable
    // 3. Level::Info
    let mut env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
        .add_directive("rustls=warn".parse()?)
        .add_directive("hyper=info".parse()?)
        .add_directive("hyper_util=info".parse()?)
        .add_directive("reqwest=info".parse()?);
    if config.debug != 0 {
        env_filter = env_filter.add_directive(
            match config.debug {
                1 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
            .into(),
        );
    }
    tracing_subscriber::registry()
        .with(fmt::Layer::default().compact().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()?;

    let command = match config.commands {
        None => {
            return Ok(CliOptions::command().print_long_help()?);
        }
        Some(s) => s,
    };

    let file_config = get_config_from_file()?;
    let api_endpoint = resolve(config.api_endpoint, file_config.as_ref(), |c| {
        c.api_endpoint.as_ref()
    });
    let keycloak_endpoint = resolve(config.keycloak_endpoint, file_config.as_ref(), |c| {
        c.keycloak_endpoint.as_ref()
    });
    let project = resolve(config.project, file_config.as_ref(), |c| c.project.as_ref());
    let ca_cert_path = resolve(config.ca_cert_path, file_config.as_ref(), |c| {
        c.ca_cert_path.as_ref()
    });

    let config_path = config_path().unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let token_path = token_path().unwrap_or_else(|| PathBuf::from(TOKEN_FILE));
    let token = load_token(&token_path);
    debug!(
        "api_endpoint={api_endpoint:?} project={project:?} token={}",
        if token.is_some() { "present" } else { "absent" }
    );

    let http_client = RestClientBuilder {
        ca_cert_path: ca_cert_path.map(PathBuf::from),
        ..Default::default()
    }
    .build_http()?;

    // api_client is created here and subsequently
    // borrowed by all others.
    let api_client = api_endpoint.clone().map(|base_url| {
        ApiClient::new(
            http_client.clone(),
            Endpoint {
                base_url,
                project: project.clone(),
                token: token.map(|t| t.access_token),
            },
            config.page_size,
        )
    });

    let output_file = get_output_file_or_stdout(config.output.as_deref()).await?;

    let ctx = RuntimeContext {
        api_client,
        http_client,
        config: RuntimeConfig {
            format: config.format,
            page_size: config.page_size,
            verbose: config.verbose,
            api_endpoint,
            project,
            keycloak_endpoint,
            config_path,
            token_path,
        },
        output_file,
    };

    command.dispatch(ctx).await?;

    Ok(())
}
