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
    ListSite::command().debug_assert();
    GetSite::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_list_no_args ensures list parses with no arguments.
#[test]
fn parse_list_no_args() {
    let args = ListSite::try_parse_from(["site"]).expect("should parse with no args");
    assert!(args.filter.is_none());
}

// parse_list_with_filter ensures list parses with -f.
#[test]
fn parse_list_with_filter() {
    let args = ListSite::try_parse_from(["site", "-f", "name=\"site-a\""])
        .expect("should parse with -f");
    assert_eq!(args.filter.as_deref(), Some("name=\"site-a\""));
}

// parse_get ensures get takes a site reference.
#[test]
fn parse_get() {
    let args = GetSite::try_parse_from(["site", "site-0a1b2c3d"]).expect("should parse with site");
    assert_eq!(args.site, "site-0a1b2c3d");
}

// parse_get_missing_site_fails ensures get requires a site.
#[test]
fn parse_get_missing_site_fails() {
    let result = GetSite::try_parse_from(["site"]);
    assert!(result.is_err(), "should fail without a site");
}
