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

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use super::args::*;

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation,
// ensuring things like unique argument definitions, group
// configurations, argument references, etc. Things that would
// otherwise be missed until runtime.
#[test]
fn verify_cmd_structure() {
    RegisterHost::command().debug_assert();
    CreateHost::command().debug_assert();
    ListHost::command().debug_assert();
    GetHost::command().debug_assert();
    DeleteHost::command().debug_assert();
    DeauthorizeHost::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_register_with_serial ensures register parses with
// a name and a serial number.
#[test]
fn parse_register_with_serial() {
    let args = RegisterHost::try_parse_from(["host", "--name", "edge-01", "--serial", "FW3R8X2"])
        .expect("should parse with name and serial");

    assert_eq!(args.name, "edge-01");
    assert_eq!(args.serial.as_deref(), Some("FW3R8X2"));
    assert!(args.uuid.is_none());
    assert!(!args.auto_onboard);
}

// parse_register_with_both_ids ensures serial and uuid can
// be given together.
#[test]
fn parse_register_with_both_ids() {
    let args = RegisterHost::try_parse_from([
        "host",
        "--name",
        "edge-01",
        "--serial",
        "FW3R8X2",
        "--uuid",
        "4c4c4544-0044-4210-8031-c2c04f305233",
        "--auto-onboard",
    ])
    .expect("should parse with serial and uuid");

    assert!(args.serial.is_some());
    assert!(args.uuid.is_some());
    assert!(args.auto_onboard);
}

// parse_register_requires_identity ensures one of serial or
// uuid is required.
#[test]
fn parse_register_requires_identity() {
    let result = RegisterHost::try_parse_from(["host", "--name", "edge-01"]);
    assert!(result.is_err(), "should fail without --serial or --uuid");
}

// parse_register_requires_name ensures --name is required.
#[test]
fn parse_register_requires_name() {
    let result = RegisterHost::try_parse_from(["host", "--serial", "FW3R8X2"]);
    assert!(result.is_err(), "should fail without --name");
}

// parse_import_from_csv ensures import parses with overrides.
#[test]
fn parse_import_from_csv() {
    let args = CreateHost::try_parse_from([
        "host",
        "--import-from-csv",
        "hosts.csv",
        "--dry-run",
        "--os-profile",
        "ubuntu-22.04",
        "--secure",
        "false",
        "--metadata",
        "rack=r1&zone=z2",
    ])
    .expect("should parse import with overrides");

    assert_eq!(args.import_from_csv, Some(PathBuf::from("hosts.csv")));
    assert!(args.dry_run);
    assert_eq!(args.overrides.os_profile.as_deref(), Some("ubuntu-22.04"));
    assert_eq!(args.overrides.secure, Some(false));
    assert_eq!(args.overrides.metadata.as_deref(), Some("rack=r1&zone=z2"));
    assert!(args.overrides.site.is_none());
}

// parse_generate_csv_default ensures --generate-csv works
// without a file name.
#[test]
fn parse_generate_csv_default() {
    let args = CreateHost::try_parse_from(["host", "--generate-csv"])
        .expect("should parse --generate-csv without value");

    assert_eq!(args.generate_csv, Some(PathBuf::from("hosts.csv")));
    assert!(args.import_from_csv.is_none());
}

// parse_generate_csv_file ensures --generate-csv takes a
// file name.
#[test]
fn parse_generate_csv_file() {
    let args = CreateHost::try_parse_from(["host", "--generate-csv", "rack1.csv"])
        .expect("should parse --generate-csv with value");

    assert_eq!(args.generate_csv, Some(PathBuf::from("rack1.csv")));
}

// parse_create_requires_source ensures one of
// --import-from-csv or --generate-csv is required.
#[test]
fn parse_create_requires_source() {
    let result = CreateHost::try_parse_from(["host"]);
    assert!(result.is_err(), "should fail without a source");
}

// parse_create_conflicting_sources ensures import and
// generate cannot be combined.
#[test]
fn parse_create_conflicting_sources() {
    let result = CreateHost::try_parse_from([
        "host",
        "--import-from-csv",
        "hosts.csv",
        "--generate-csv",
        "out.csv",
    ]);
    assert!(result.is_err(), "should fail with both sources");
}

// parse_dry_run_requires_import ensures --dry-run only
// applies to an import.
#[test]
fn parse_dry_run_requires_import() {
    let result = CreateHost::try_parse_from(["host", "--generate-csv", "--dry-run"]);
    assert!(result.is_err(), "should fail with --dry-run and no import");
}

// parse_invalid_secure_fails ensures --secure only takes
// true or false.
#[test]
fn parse_invalid_secure_fails() {
    let result = CreateHost::try_parse_from([
        "host",
        "--import-from-csv",
        "hosts.csv",
        "--secure",
        "maybe",
    ]);
    assert!(result.is_err(), "should fail with --secure maybe");
}

// parse_list_with_site ensures list parses with filters.
#[test]
fn parse_list_with_site() {
    let args = ListHost::try_parse_from([
        "host",
        "--site",
        "site-a",
        "--filter",
        "hostStatus=\"Running\"",
    ])
    .expect("should parse with --site and --filter");

    assert_eq!(args.site.as_deref(), Some("site-a"));
    assert_eq!(args.filter.as_deref(), Some("hostStatus=\"Running\""));
}

// parse_get_requires_id ensures get requires a host id.
#[test]
fn parse_get_requires_id() {
    assert!(GetHost::try_parse_from(["host"]).is_err());
    let args = GetHost::try_parse_from(["host", "host-1a2b3c4d"]).expect("should parse with id");
    assert_eq!(args.host_id, "host-1a2b3c4d");
}

// parse_deauthorize_with_reason ensures deauthorize parses
// with an optional reason.
#[test]
fn parse_deauthorize_with_reason() {
    let args = DeauthorizeHost::try_parse_from([
        "host",
        "host-1a2b3c4d",
        "--reason",
        "decommissioned",
    ])
    .expect("should parse with --reason");

    assert_eq!(args.host_id, "host-1a2b3c4d");
    assert_eq!(args.reason.as_deref(), Some("decommissioned"));

    let args = DeleteHost::try_parse_from(["host", "host-1a2b3c4d"]).expect("should parse delete");
    assert_eq!(args.host_id, "host-1a2b3c4d");
}
