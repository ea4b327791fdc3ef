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
use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{ErrorCode, ValidationError};
use crate::record::{HostRecord, parse_metadata};

lazy_static! {
    static ref SERIAL_NUMBER: Regex =
        Regex::new(r"^[A-Za-z0-9]{5,20}$").expect("serial number regex is valid");
}

pub fn is_valid_serial(serial: &str) -> bool {
    SERIAL_NUMBER.is_match(serial)
}

/// Only the hyphenated 8-4-4-4-12 form is accepted. `Uuid::try_parse`
/// alone would also take the simple, braced and urn forms.
pub fn is_valid_uuid(uuid: &str) -> bool {
    uuid.len() == 36 && uuid::Uuid::try_parse(uuid).is_ok()
}

/// sanitize checks every record of an import batch.
///
/// Failures are written into each record's error column instead of
/// stopping at the first bad row. Duplicates are only looked for among
/// records whose fields are valid, and a duplicate names the row (counted
/// among those valid records, starting at 1) holding the first occurrence.
/// Returns `CheckFailed` when any record ended up with an error.
pub fn sanitize(records: &mut [HostRecord]) -> Result<(), ValidationError> {
    for record in records.iter_mut() {
        check_fields(record);
    }
    check_duplicates(records);

    let invalid = records.iter().filter(|r| !r.is_valid()).count();
    if invalid > 0 {
        tracing::warn!("{invalid} of {} host records failed validation", records.len());
        return Err(ValidationError::CheckFailed {
            invalid,
            total: records.len(),
        });
    }
    Ok(())
}

fn check_fields(record: &mut HostRecord) {
    if record.serial.is_empty() && record.uuid.is_empty() {
        record.append_error(ErrorCode::MissingSerialOrUuid);
    }
    if !record.serial.is_empty() && !is_valid_serial(&record.serial) {
        record.append_error(ErrorCode::InvalidSerial);
    }
    if !record.uuid.is_empty() && !is_valid_uuid(&record.uuid) {
        record.append_error(ErrorCode::InvalidUuid);
    }
    if record.os_profile.is_empty() {
        record.append_error(ErrorCode::MissingOsProfile);
    }
    if record.site.is_empty() {
        record.append_error(ErrorCode::MissingSite);
    }
    if !record.secure_is_valid() {
        record.append_error(ErrorCode::InvalidSecure);
    }
    if parse_metadata(&record.metadata).is_none() {
        record.append_error(ErrorCode::InvalidMetadata);
    }
    if !record.cluster_template.is_empty() && record.cluster_template_parts().is_none() {
        record.append_error(ErrorCode::InvalidClusterTemplate);
    }
}

fn check_duplicates(records: &mut [HostRecord]) {
    let mut serials: HashMap<String, usize> = HashMap::new();
    let mut uuids: HashMap<String, usize> = HashMap::new();

    let valid = records.iter_mut().filter(|r| r.is_valid()).collect::<Vec<_>>();
    for (idx, record) in valid.into_iter().enumerate() {
        let row = idx + 1;

        if !record.serial.is_empty() {
            if let Some(first) = serials.get(&record.serial.to_lowercase()) {
                record.append_error_msg(format!("{} (row {first})", ErrorCode::DuplicateSerial));
            } else {
                serials.insert(record.serial.to_lowercase(), row);
            }
        }
        if !record.uuid.is_empty() {
            if let Some(first) = uuids.get(&record.uuid.to_lowercase()) {
                record.append_error_msg(format!("{} (row {first})", ErrorCode::DuplicateUuid));
            } else {
                uuids.insert(record.uuid.to_lowercase(), row);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UUID_A: &str = "4c4c4544-0044-4210-8031-c2c04f305233";
    const UUID_B: &str = "9b3e0f2a-1c44-4d1e-a0b2-5f6e7d8c9a01";

    fn record(serial: &str, uuid: &str) -> HostRecord {
        HostRecord {
            serial: serial.to_string(),
            uuid: uuid.to_string(),
            os_profile: "ubuntu-22.04".to_string(),
            site: "site-a".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_batch() {
        let mut records = vec![
            record("FW3R8X2", UUID_A),
            record("GH71K00", ""),
            record("", UUID_B),
        ];
        assert!(sanitize(&mut records).is_ok());
        assert!(records.iter().all(|r| r.error.is_empty()));
    }

    #[test]
    fn test_missing_serial_and_uuid() {
        let mut records = vec![record("", ""), record("FW3R8X2", "")];
        let err = sanitize(&mut records).expect_err("should fail");
        assert!(matches!(
            err,
            ValidationError::CheckFailed {
                invalid: 1,
                total: 2
            }
        ));
        assert_eq!(records[0].error, "One of Serial number or UUID required;");
        assert!(records[1].is_valid());
    }

    #[test]
    fn test_serial_format() {
        assert!(is_valid_serial("FW3R8X2"));
        assert!(is_valid_serial("abcde"));
        assert!(is_valid_serial("A1234567890123456789"));
        assert!(!is_valid_serial("abcd"));
        assert!(!is_valid_serial("A12345678901234567890"));
        assert!(!is_valid_serial("FW3R-8X2"));
        assert!(!is_valid_serial("FW3R 8X2"));

        let mut records = vec![record("FW3R_8X2", "")];
        assert!(sanitize(&mut records).is_err());
        assert_eq!(records[0].error, "Invalid Serial number;");
    }

    #[test]
    fn test_uuid_format() {
        assert!(is_valid_uuid(UUID_A));
        assert!(is_valid_uuid(&UUID_A.to_uppercase()));

        for bad in [
            "4c4c4544004442108031c2c04f305233",
            "4c4c4544-00444210-8031-c2c04f305233-",
            "4c4c454-40044-4210-8031-c2c04f305233",
            "4c4c4544-0044-4210-8031-c2c04f30523g",
            "4c4c4544-0044-4210-8031 c2c04f305233",
            "{4c4c4544-0044-4210-8031-c2c04f305233}",
            "urn:uuid:4c4c4544-0044-4210-8031-c2c04f305233",
        ] {
            assert!(!is_valid_uuid(bad), "{bad} should be rejected");
            let mut records = vec![record("", bad)];
            assert!(sanitize(&mut records).is_err());
            assert_eq!(records[0].error, "Invalid UUID;", "error for {bad}");
        }
    }

    #[test]
    fn test_required_fields_accumulate() {
        let mut records = vec![HostRecord {
            serial: "bad!".to_string(),
            uuid: "not-a-uuid".to_string(),
            secure: "yes".to_string(),
            metadata: "rack".to_string(),
            cluster_template: "baseline".to_string(),
            ..Default::default()
        }];
        assert!(sanitize(&mut records).is_err());
        assert_eq!(
            records[0].error,
            "Invalid Serial number;Invalid UUID;OS Profile required;Site required;\
             Invalid Secure value, expected true or false;\
             Invalid Metadata, expected key=value pairs separated by &;\
             Invalid Cluster template, expected <name>:<version>;"
        );
    }

    #[test]
    fn test_duplicate_serial_case_insensitive() {
        let mut records = vec![
            record("FW3R8X2", ""),
            record("GH71K00", ""),
            record("fw3r8x2", ""),
        ];
        assert!(sanitize(&mut records).is_err());
        assert!(records[0].is_valid());
        assert!(records[1].is_valid());
        assert_eq!(records[2].error, "Duplicate Serial number (row 1);");
    }

    #[test]
    fn test_duplicate_uuid_flags_every_later_occurrence() {
        let mut records = vec![
            record("", UUID_A),
            record("", &UUID_A.to_uppercase()),
            record("GH71K00", UUID_A),
        ];
        assert!(sanitize(&mut records).is_err());
        assert!(records[0].is_valid());
        assert_eq!(records[1].error, "Duplicate UUID (row 1);");
        assert_eq!(records[2].error, "Duplicate UUID (row 1);");
    }

    #[test]
    fn test_duplicate_rows_counted_among_valid_records() {
        let mut records = vec![
            record("", ""),
            record("FW3R8X2", ""),
            record("GH71K00", ""),
            record("", "bad"),
            record("GH71K00", UUID_B),
        ];
        assert!(sanitize(&mut records).is_err());
        assert_eq!(records[0].error, "One of Serial number or UUID required;");
        assert_eq!(records[3].error, "Invalid UUID;");
        // GH71K00 is the second valid record.
        assert_eq!(records[4].error, "Duplicate Serial number (row 2);");
    }

    #[test]
    fn test_invalid_records_do_not_take_part_in_duplicates() {
        let mut records = vec![record("FW3R8X2", "bad"), record("FW3R8X2", "")];
        assert!(sanitize(&mut records).is_err());
        assert_eq!(records[0].error, "Invalid UUID;");
        assert!(records[1].is_valid());
    }
}
