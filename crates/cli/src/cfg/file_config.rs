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

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use orch_api::auth::Token;
use orch_api::cli::{CliError, CliResult};
use serde::Deserialize;
use tracing::warn;

pub const CONFIG_FILE: &str = ".config/orch-cli.json";
pub const TOKEN_FILE: &str = ".config/orch-cli-token.json";

// FileConfig is the optional, user-written $HOME/.config/orch-cli.json.
// Every key is optional; flags and environment variables take precedence.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api_endpoint: Option<String>,
    pub keycloak_endpoint: Option<String>,
    pub project: Option<String>,
    pub ca_cert_path: Option<String>,
}

fn home_path(relative: &str) -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| Path::new(&home).join(relative))
}

pub fn config_path() -> Option<PathBuf> {
    home_path(CONFIG_FILE)
}

pub fn token_path() -> Option<PathBuf> {
    home_path(TOKEN_FILE)
}

pub fn get_config_from_file() -> CliResult<Option<FileConfig>> {
    match config_path() {
        Some(path) if path.exists() => read_config(&path).map(Some),
        _ => Ok(None),
    }
}

pub fn read_config(path: &Path) -> CliResult<FileConfig> {
    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader).map_err(|e| {
        CliError::GenericError(format!("Invalid config file {}: {e}", path.display()))
    })
}

/// Picks the command line (or environment) value first, then the config
/// file's.
pub fn resolve(
    flag: Option<String>,
    file_config: Option<&FileConfig>,
    key: fn(&FileConfig) -> Option<&String>,
) -> Option<String> {
    flag.or_else(|| file_config.and_then(key).cloned())
        .filter(|v| !v.is_empty())
}

pub fn read_token(path: &Path) -> CliResult<Option<Token>> {
    if !path.exists() {
        return Ok(None);
    }
    let reader = BufReader::new(File::open(path)?);
    let token = serde_json::from_reader(reader).map_err(|e| {
        CliError::GenericError(format!(
            "Invalid token file {}, run login again: {e}",
            path.display()
        ))
    })?;
    Ok(Some(token))
}

/// Token to send with API requests. An unreadable token file is logged and
/// ignored so `login` can replace it and `logout` can remove it.
pub fn load_token(path: &Path) -> Option<Token> {
    read_token(path).unwrap_or_else(|e| {
        warn!("{e}");
        None
    })
}

pub fn write_token(path: &Path, token: &Token) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    // mode() only applies when the file is created.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(serde_json::to_string(token)?.as_bytes())?;
    Ok(())
}

/// Returns whether there was a token to remove.
pub fn remove_token(path: &Path) -> CliResult<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
