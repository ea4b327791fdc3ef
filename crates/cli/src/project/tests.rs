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

// The intent of the tests.rs file is to test the integrity of the
// command, including things like basic structure parsing, enum
// translations, and any external input validators that are
// configured. Specific "categories" are:
//
// Command Structure - Baseline debug_assert() of the entire command.
// Argument Parsing  - Ensure required/optional arg combinations parse correctly.

use clap::{CommandFactory, Parser};

use super::args::*;

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation,
// ensuring things like unique argument definitions, group
// configurations, argument references, etc. Things that would
// otherwise be missed until runtime.
#[test]
fn verify_cmd_structure() {
    ListProject::command().debug_assert();
    GetProject::command().debug_assert();
    CreateProject::command().debug_assert();
    DeleteProject::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_create_with_description ensures create parses
// with -d.
#[test]
fn parse_create_with_description() {
    let args = CreateProject::try_parse_from(["project", "blue", "-d", "Blue team edge sites"])
        .expect("should parse with -d");
    assert_eq!(args.name, "blue");
    assert_eq!(args.description, "Blue team edge sites");
}

// parse_create_default_description ensures the
// description defaults to empty.
#[test]
fn parse_create_default_description() {
    let args = CreateProject::try_parse_from(["project", "blue"]).expect("should parse with name");
    assert!(args.description.is_empty());
}

// parse_create_missing_name_fails ensures create requires
// a name.
#[test]
fn parse_create_missing_name_fails() {
    let result = CreateProject::try_parse_from(["project"]);
    assert!(result.is_err(), "should fail without a name");
}

// parse_list_rejects_args ensures list takes no arguments.
#[test]
fn parse_list_rejects_args() {
    assert!(ListProject::try_parse_from(["project"]).is_ok());
    assert!(ListProject::try_parse_from(["project", "blue"]).is_err());
}
