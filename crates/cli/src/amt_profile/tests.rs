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
// Request Building  - Certificate handling for create.

use std::io::Write;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use orch_api::rps::CERT_FORMAT_STRING;

use super::args::*;
use super::cmds::domain_request;

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation,
// ensuring things like unique argument definitions, group
// configurations, argument references, etc. Things that would
// otherwise be missed until runtime.
#[test]
fn verify_cmd_structure() {
    ListAmtProfile::command().debug_assert();
    GetAmtProfile::command().debug_assert();
    CreateAmtProfile::command().debug_assert();
    DeleteAmtProfile::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_create ensures create parses with all options.
#[test]
fn parse_create() {
    let args = CreateAmtProfile::try_parse_from([
        "amt-profile",
        "edge-domain",
        "--domain-suffix",
        "edge.example.com",
        "--cert",
        "/tmp/provisioning.pfx",
        "--cert-password",
        "s3cret",
    ])
    .expect("should parse with all options");

    assert_eq!(args.name, "edge-domain");
    assert_eq!(args.domain_suffix, "edge.example.com");
    assert_eq!(args.cert, PathBuf::from("/tmp/provisioning.pfx"));
    assert_eq!(args.cert_password, "s3cret");
}

// parse_create_missing_suffix_fails ensures
// --domain-suffix is required.
#[test]
fn parse_create_missing_suffix_fails() {
    let result = CreateAmtProfile::try_parse_from([
        "amt-profile",
        "edge-domain",
        "--cert",
        "/tmp/provisioning.pfx",
        "--cert-password",
        "s3cret",
    ]);
    assert!(result.is_err(), "should fail without --domain-suffix");
}

// parse_delete ensures delete takes a name.
#[test]
fn parse_delete() {
    let args = DeleteAmtProfile::try_parse_from(["amt-profile", "edge-domain"])
        .expect("should parse with name");
    assert_eq!(args.name, "edge-domain");
}

/////////////////////////////////////////////////////////////////////////////
// Request Building
//
// This section checks how create turns the certificate file
// into the request body.

// domain_request_encodes_certificate ensures the cert file
// is sent as standard base64.
#[test]
fn domain_request_encodes_certificate() {
    let mut cert = tempfile::NamedTempFile::new().unwrap();
    cert.write_all(b"pfx-bytes").unwrap();

    let args = CreateAmtProfile {
        name: "edge-domain".to_string(),
        domain_suffix: "edge.example.com".to_string(),
        cert: cert.path().to_path_buf(),
        cert_password: "s3cret".to_string(),
    };
    let domain = domain_request(args).unwrap();

    assert_eq!(domain.profile_name, "edge-domain");
    assert_eq!(domain.provisioning_cert, "cGZ4LWJ5dGVz");
    assert_eq!(domain.provisioning_cert_storage_format, CERT_FORMAT_STRING);
    assert_eq!(domain.provisioning_cert_password, "s3cret");
}

// domain_request_rejects_empty_certificate ensures an
// empty cert file is an error.
#[test]
fn domain_request_rejects_empty_certificate() {
    let cert = tempfile::NamedTempFile::new().unwrap();
    let args = CreateAmtProfile {
        name: "edge-domain".to_string(),
        domain_suffix: "edge.example.com".to_string(),
        cert: cert.path().to_path_buf(),
        cert_password: "s3cret".to_string(),
    };
    assert!(domain_request(args).is_err());
}

// domain_request_missing_file ensures a missing cert file
// is an I/O error.
#[test]
fn domain_request_missing_file() {
    let args = CreateAmtProfile {
        name: "edge-domain".to_string(),
        domain_suffix: "edge.example.com".to_string(),
        cert: PathBuf::from("/nonexistent/provisioning.pfx"),
        cert_password: "s3cret".to_string(),
    };
    assert!(matches!(
        domain_request(args),
        Err(orch_api::cli::CliError::IOError(_))
    ));
}
