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

use std::io;

use clap::CommandFactory;
use clap_complete::{Generator, shells};
use orch_api::cli::CliResult;

use super::args::Shell;
use crate::cfg::cli_options::CliOptions;

pub const BIN_NAME: &str = "orch-cli";

pub fn generate(shell: Shell) -> CliResult<()> {
    let mut stdout = io::stdout();
    match shell {
        Shell::Bash => write_completions(shells::Bash, &mut stdout),
        Shell::Elvish => write_completions(shells::Elvish, &mut stdout),
        Shell::Fish => write_completions(shells::Fish, &mut stdout),
        Shell::PowerShell => write_completions(shells::PowerShell, &mut stdout),
        Shell::Zsh => write_completions(shells::Zsh, &mut stdout),
    }
    Ok(())
}

pub fn write_completions<G: Generator>(shell: G, out: &mut dyn io::Write) {
    let mut cmd = CliOptions::command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, out);
}
