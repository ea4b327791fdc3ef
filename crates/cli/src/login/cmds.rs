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

use std::path::Path;

use orch_api::auth;
use orch_api::cli::{CliError, CliResult};
use tracing::info;

use super::args::Login;
use crate::async_write::OutputFile;
use crate::async_writeln;
use crate::cfg::file_config::{remove_token, write_token};

pub async fn login(
    args: Login,
    http_client: &reqwest::Client,
    keycloak_endpoint: Option<&str>,
    token_path: &Path,
    output_file: &mut OutputFile,
) -> CliResult<()> {
    let keycloak_endpoint = keycloak_endpoint.ok_or(CliError::MissingKeycloakEndpoint)?;
    let password = password_or_prompt(args.password, prompt_password)?;

    let token = auth::login(http_client, keycloak_endpoint, &args.username, &password).await?;
    write_token(token_path, &token)?;
    info!("Token written to {}", token_path.display());
    async_writeln!(output_file, "Logged in as {}", args.username)?;
    Ok(())
}

pub async fn logout(token_path: &Path, output_file: &mut OutputFile) -> CliResult<()> {
    if remove_token(token_path)? {
        async_writeln!(output_file, "Logged out")?;
    } else {
        async_writeln!(output_file, "Not logged in")?;
    }
    Ok(())
}

/// Uses the password given on the command line, asking for one only when it
/// was left out.
pub fn password_or_prompt<F>(password: Option<String>, prompt: F) -> CliResult<String>
where
    F: FnOnce() -> CliResult<String>,
{
    let password = match password {
        Some(password) => password,
        None => prompt()?,
    };
    if password.is_empty() {
        return Err(CliError::GenericError("Empty password".to_string()));
    }
    Ok(password)
}

fn prompt_password() -> CliResult<String> {
    dialoguer::Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| CliError::GenericError(format!("Unable to read password: {e}")))
}
