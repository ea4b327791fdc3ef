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

//! Host import file handling: the CSV format accepted by
//! `create host --import-from-csv`, the error codes reported back to the
//! user, and the sanitizer that checks a batch before anything is sent to
//! the API.

mod csv_io;
mod errors;
mod record;
mod sanitize;

pub use csv_io::{
    CSV_HEADER, ERROR_COLUMN, error_report_path, read_host_records, read_host_records_from,
    write_host_records, write_template,
};
pub use errors::{ErrorCode, ValidationError};
pub use record::{HostRecord, MetadataPair, parse_metadata};
pub use sanitize::{is_valid_serial, is_valid_uuid, sanitize};
