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
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use crate::errors::ValidationError;
use crate::record::HostRecord;

pub const ERROR_COLUMN: &str = "Error - do not fill";

/// Header of every host import file, in record field order.
pub const CSV_HEADER: [&str; 9] = [
    "Serial",
    "UUID",
    "OSProfile",
    "Site",
    "Secure",
    "RemoteUser",
    "Metadata",
    "ClusterTemplate",
    ERROR_COLUMN,
];

const DATA_COLUMNS: usize = CSV_HEADER.len() - 1;

/// read_host_records loads every record of a host import file.
pub fn read_host_records(path: &Path) -> Result<Vec<HostRecord>, ValidationError> {
    let display = path.display().to_string();
    let file = File::open(path).map_err(|source| ValidationError::Io {
        path: display.clone(),
        source,
    })?;
    read_host_records_from(file, &display)
}

/// read_host_records_from parses host records from any reader; `source`
/// only names the input in error messages.
///
/// Rows may omit the error column entirely. A file is rejected as a whole
/// when the header is wrong, a row has the wrong number of fields or a row
/// still carries an error from a previous run.
pub fn read_host_records_from<R: io::Read>(
    reader: R,
    source: &str,
) -> Result<Vec<HostRecord>, ValidationError> {
    let csv_err = |e: csv::Error| ValidationError::Csv {
        path: source.to_string(),
        source: e,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_err)?.clone();
    check_header(&headers, source)?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result.map_err(csv_err)?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        if row.len() != DATA_COLUMNS && row.len() != CSV_HEADER.len() {
            return Err(ValidationError::InvalidRowWidth {
                path: source.to_string(),
                line,
                expected: CSV_HEADER.len(),
                found: row.len(),
            });
        }
        if row.get(DATA_COLUMNS).is_some_and(|e| !e.trim().is_empty()) {
            return Err(ValidationError::ErrorColumnPopulated {
                path: source.to_string(),
                line,
            });
        }

        let fields = row.iter().collect::<Vec<&str>>();
        records.push(HostRecord::from_fields(&fields, line));
    }

    if records.is_empty() {
        return Err(ValidationError::Empty {
            path: source.to_string(),
        });
    }
    tracing::debug!("Loaded {} host records from {source}", records.len());

    Ok(records)
}

fn check_header(headers: &csv::StringRecord, source: &str) -> Result<(), ValidationError> {
    let found = headers.iter().map(str::trim).collect::<Vec<&str>>();
    let matches = (found.len() == DATA_COLUMNS || found.len() == CSV_HEADER.len())
        && found.iter().zip(CSV_HEADER.iter()).all(|(f, e)| f == e);
    if matches {
        return Ok(());
    }
    Err(ValidationError::InvalidHeader {
        path: source.to_string(),
        expected: CSV_HEADER.join(","),
        found: found.join(","),
    })
}

/// write_host_records writes the records with their error column filled
/// in. Records read from a file are written back exactly as they were
/// read.
pub fn write_host_records(path: &Path, records: &[HostRecord]) -> Result<(), ValidationError> {
    let display = path.display().to_string();
    let io_err = |source: io::Error| ValidationError::Io {
        path: display.clone(),
        source,
    };
    let csv_err = |e: csv::Error| ValidationError::Csv {
        path: display.clone(),
        source: e,
    };

    let mut wtr = csv::Writer::from_path(path).map_err(csv_err)?;
    wtr.write_record(CSV_HEADER).map_err(csv_err)?;
    for record in records {
        let mut row = if record.raw_record.is_empty() {
            record.fields().iter().map(|f| f.to_string()).collect()
        } else {
            record.raw_record.clone()
        };
        row.resize(DATA_COLUMNS, String::new());
        row.push(record.error.clone());
        wtr.write_record(&row).map_err(csv_err)?;
    }
    wtr.flush().map_err(io_err)?;

    Ok(())
}

/// write_template writes an import file containing only the header.
pub fn write_template(path: &Path) -> Result<(), ValidationError> {
    write_host_records(path, &[])
}

/// error_report_path names the error report for an import file. It sits
/// next to the input: `import_error_<timestamp>_<input file name>`.
pub fn error_report_path<Tz: TimeZone>(source: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "hosts.csv".to_string());
    let report = format!("import_error_{}_{file_name}", now.format("%Y%m%dT%H%M%S"));
    match source.parent() {
        Some(dir) => dir.join(report),
        None => PathBuf::from(report),
    }
}
