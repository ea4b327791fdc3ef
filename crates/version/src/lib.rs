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

//! Build information for the orch-cli binaries.
//!
//! A build script calls [`build`], which records the values below as
//! `ORCH_BUILD_*` compile time environment variables. The crate using them
//! reads them back with [`v!`] or [`version!`].

use std::path::Path;
use std::process::Command;

pub const BUILD_USER: &str = "ORCH_BUILD_USER";
pub const BUILD_DATE: &str = "ORCH_BUILD_DATE";
pub const BUILD_RUSTC_VERSION: &str = "ORCH_BUILD_RUSTC_VERSION";
pub const BUILD_GIT_HASH: &str = "ORCH_BUILD_GIT_HASH";
pub const BUILD_GIT_TAG: &str = "ORCH_BUILD_GIT_TAG";

/// Skips the rerun-on-new-commit hook, for local iteration.
pub const AVOID_REBUILD: &str = "ORCH_VERSION_AVOID_REBUILD";

/// Set the ORCH_BUILD_* environment variables for the crate being built.
/// Call this from a build script.
pub fn build() {
    let rustc = option_env!("RUSTC").unwrap_or("rustc");
    set_env(BUILD_USER, option_env!("USER").unwrap_or_default());
    set_env(
        BUILD_DATE,
        &capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_default(),
    );
    set_env(
        BUILD_RUSTC_VERSION,
        &capture(rustc, &["--version"]).unwrap_or_default(),
    );

    // Source tarballs and containers without the .git directory end up here.
    let in_repo = Command::new("git")
        .arg("rev-parse")
        .status()
        .is_ok_and(|s| s.success());
    if !in_repo {
        println!("cargo:warning=No git, version will be blank");
        set_env(BUILD_GIT_HASH, "");
        set_env(BUILD_GIT_TAG, "");
        return;
    }

    let sha = option_env!("CI_COMMIT_SHORT_SHA")
        .map(String::from)
        .or_else(|| capture("git", &["rev-parse", "--short=8", "HEAD"]))
        .unwrap_or_default();
    set_env(BUILD_GIT_HASH, &sha);

    let tag = option_env!("VERSION")
        .map(String::from)
        .or_else(|| {
            capture(
                "git",
                &["describe", "--tags", "--first-parent", "--always", "--long"],
            )
        })
        .unwrap_or_default();
    set_env(BUILD_GIT_TAG, &tag);

    if std::env::var_os(AVOID_REBUILD).is_none() {
        rerun_on_new_commit();
    }
}

fn set_env(key: &str, value: &str) {
    println!("cargo:rustc-env={key}={value}");
}

fn rerun_on_new_commit() {
    let Some(git_dir) = capture("git", &["rev-parse", "--path-format=absolute", "--git-dir"])
    else {
        return;
    };
    let head = Path::new(&git_dir).join("HEAD");
    if head.exists() {
        println!("cargo:rerun-if-changed={}", head.display());
    } else {
        println!("cargo:warning=Git HEAD not found at {}", head.display());
    }
}

/// Stdout of `cmd`, trimmed. Failures are reported as cargo warnings and
/// yield None.
fn capture(cmd: &str, args: &[&str]) -> Option<String> {
    let invocation = format!("{cmd} {}", args.join(" "));
    match Command::new(cmd).args(args).output() {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
        }
        Ok(output) => {
            println!("cargo:warning=build.rs failed running '{invocation}': '{output:?}'");
            None
        }
        Err(err) => {
            println!("cargo:warning=build.rs error running '{invocation}': {err}.");
            None
        }
    }
}

/// Individual parts of the version, e.g. `orch_version::v!(git_sha)`.
/// Expands to an empty &str when the part was not recorded.
#[macro_export]
macro_rules! v {
    (build_version) => {
        option_env!("ORCH_BUILD_GIT_TAG").unwrap_or_default()
    };
    (build_date) => {
        option_env!("ORCH_BUILD_DATE").unwrap_or_default()
    };
    (git_sha) => {
        option_env!("ORCH_BUILD_GIT_HASH").unwrap_or_default()
    };
    (rust_version) => {
        option_env!("ORCH_BUILD_RUSTC_VERSION").unwrap_or_default()
    };
    (build_user) => {
        option_env!("ORCH_BUILD_USER").unwrap_or_default()
    };
}

/// Version as a string. `orch_version::build()` must have run in the build script.
#[macro_export]
macro_rules! version {
    () => {
        format!(
            "build_version={}, build_date={}, git_sha={}, rust_version={}, build_user={}",
            $crate::v!(build_version),
            $crate::v!(build_date),
            $crate::v!(git_sha),
            $crate::v!(rust_version),
            $crate::v!(build_user),
        )
    };
}
