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

use std::pin::Pin;

use orch_api::cli::CliResult;
use prettytable::Table;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Destination of everything a command prints: `--output` or stdout.
pub type OutputFile = Pin<Box<dyn AsyncWrite>>;

pub async fn get_output_file_or_stdout(output_filename: Option<&str>) -> CliResult<OutputFile> {
    if let Some(filename) = output_filename {
        let file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(filename)
            .await?;
        Ok(Box::pin(file))
    } else {
        Ok(Box::pin(tokio::io::stdout()))
    }
}

/// Writes the whole buffer and flushes, so output interleaves correctly
/// with log lines on stderr.
pub async fn write_flushed(writer: &mut OutputFile, bytes: &[u8]) -> std::io::Result<()> {
    writer.write_all(bytes).await?;
    writer.flush().await
}

pub async fn write_table_as_csv(writer: &mut OutputFile, table: &Table) -> CliResult<()> {
    let mut output = Vec::default();
    table.to_csv(&mut output)?;
    write_flushed(writer, &output).await?;
    Ok(())
}

/// Like write! for an [`OutputFile`].
#[macro_export]
macro_rules! async_write {
    ($writer:expr, $($arg:tt)*) => {
        $crate::async_write::write_flushed($writer, format!($($arg)*).as_bytes()).await
    };
}

/// Like writeln! for an [`OutputFile`].
#[macro_export]
macro_rules! async_writeln {
    ($writer:expr) => {
        $crate::async_write::write_flushed($writer, b"\n").await
    };
    ($writer:expr, $($arg:tt)+) => {{
        let mut formatted = format!($($arg)+);
        formatted.push('\n');
        $crate::async_write::write_flushed($writer, formatted.as_bytes()).await
    }};
}
