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

use orch_api::cli::{CliResult, OutputFormat};
use prettytable::{Cell, Row, Table};
use serde::Serialize;

use crate::async_write::{OutputFile, write_table_as_csv};
use crate::async_write;

/// Writes `value` in the requested format. Table and CSV output share the
/// table built by `to_table`, which is only called for those formats.
pub async fn write_formatted<T, F>(
    output_file: &mut OutputFile,
    format: OutputFormat,
    value: &T,
    to_table: F,
) -> CliResult<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> Table,
{
    match format {
        OutputFormat::Json => {
            async_write!(output_file, "{}\n", serde_json::to_string_pretty(value)?)?;
        }
        OutputFormat::Yaml => {
            async_write!(output_file, "{}", serde_yaml::to_string(value)?)?;
        }
        OutputFormat::AsciiTable => {
            async_write!(output_file, "{}", to_table())?;
        }
        OutputFormat::Csv => write_table_as_csv(output_file, &to_table()).await?,
    }
    Ok(())
}

/// Two column table used by the `get` commands.
pub fn key_value_table(rows: Vec<(&str, String)>) -> Table {
    let mut table = Table::new();
    for (key, value) in rows {
        table.add_row(Row::new(vec![Cell::new(key), Cell::new(&value)]));
    }
    table
}

/// Renders `key=value` pairs one per line, the way labels and metadata are
/// shown in table cells.
pub fn join_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use prettytable::row;

    use super::*;

    #[test]
    fn test_key_value_table() {
        let table = key_value_table(vec![
            ("Name", "edge-01".to_string()),
            ("Site", "site-a".to_string()),
        ]);
        assert_eq!(table.len(), 2);
        let mut output = Vec::new();
        table.to_csv(&mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Name,edge-01\nSite,site-a\n"
        );
    }

    #[test]
    fn test_join_pairs() {
        assert_eq!(
            join_pairs([("rack", "r1"), ("zone", "z2")]),
            "rack=r1\nzone=z2"
        );
        assert_eq!(join_pairs(Vec::<(&str, &str)>::new()), "");
    }

    #[tokio::test]
    async fn test_write_formatted_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut output = crate::async_write::get_output_file_or_stdout(path.to_str())
            .await
            .unwrap();

        let value = vec!["edge-01", "edge-02"];
        write_formatted(&mut output, OutputFormat::Json, &value, || {
            let mut table = Table::new();
            table.add_row(row!["unused"]);
            table
        })
        .await
        .unwrap();
        drop(output);

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, vec!["edge-01", "edge-02"]);
    }
}
