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
use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::ErrorCode;

lazy_static! {
    static ref METADATA_TOKEN: Regex = Regex::new(r"^[a-z0-9]([a-z0-9._/-]{0,61}[a-z0-9])?$")
        .expect("metadata regex is valid");
}

/// One key=value pair from the Metadata column.
pub type MetadataPair = (String, String);

/// HostRecord is one row of a host import file.
///
/// Field values are kept as written (minus surrounding whitespace) so the
/// sanitizer can report on them; `raw_record` holds the untouched row for
/// the error report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRecord {
    pub serial: String,
    pub uuid: String,
    pub os_profile: String,
    pub site: String,
    pub secure: String,
    pub remote_user: String,
    pub metadata: String,
    pub cluster_template: String,
    pub error: String,
    pub raw_record: Vec<String>,
    /// Line in the source file, 0 for records built in memory.
    pub line: u64,
}

impl HostRecord {
    pub(crate) fn from_fields(fields: &[&str], line: u64) -> Self {
        let field = |idx: usize| fields.get(idx).map(|f| f.trim().to_string()).unwrap_or_default();
        HostRecord {
            serial: field(0),
            uuid: field(1),
            os_profile: field(2),
            site: field(3),
            secure: field(4),
            remote_user: field(5),
            metadata: field(6),
            cluster_template: field(7),
            error: String::new(),
            raw_record: fields.iter().take(8).map(|f| f.to_string()).collect(),
            line,
        }
    }

    /// The eight data columns in file order.
    pub fn fields(&self) -> [&str; 8] {
        [
            &self.serial,
            &self.uuid,
            &self.os_profile,
            &self.site,
            &self.secure,
            &self.remote_user,
            &self.metadata,
            &self.cluster_template,
        ]
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_empty()
    }

    pub fn append_error(&mut self, code: ErrorCode) {
        self.append_error_msg(code);
    }

    /// Errors accumulate; every message is terminated with ';'.
    pub fn append_error_msg(&mut self, msg: impl std::fmt::Display) {
        self.error.push_str(&format!("{msg};"));
    }

    /// Only an explicit "true" requests the secure feature set.
    pub fn is_secure(&self) -> bool {
        self.secure.eq_ignore_ascii_case("true")
    }

    pub fn secure_is_valid(&self) -> bool {
        self.secure.is_empty()
            || self.secure.eq_ignore_ascii_case("true")
            || self.secure.eq_ignore_ascii_case("false")
    }

    /// Host name used at registration: serial number when present,
    /// otherwise the UUID.
    pub fn host_name(&self) -> &str {
        if self.serial.is_empty() {
            &self.uuid
        } else {
            &self.serial
        }
    }

    /// Cluster template split into name and version.
    pub fn cluster_template_parts(&self) -> Option<(&str, &str)> {
        let (name, version) = self.cluster_template.split_once(':')?;
        let (name, version) = (name.trim(), version.trim());
        if name.is_empty() || version.is_empty() || version.contains(':') {
            return None;
        }
        Some((name, version))
    }
}

/// parse_metadata parses "key=value&key2=value2". An empty string is an
/// empty list; any malformed pair fails the whole string.
pub fn parse_metadata(metadata: &str) -> Option<Vec<MetadataPair>> {
    if metadata.trim().is_empty() {
        return Some(Vec::new());
    }
    metadata
        .split('&')
        .map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let (key, value) = (key.trim(), value.trim());
            if !METADATA_TOKEN.is_match(key) || !METADATA_TOKEN.is_match(value) {
                return None;
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}
