//! Combination report output.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::debug;

use crate::{aggregate::AggregateEntry, io_utils, schema::LogicalField};

pub const DEFAULT_OUTPUT: &str = "combination_count.csv";
pub const COUNT_COLUMN: &str = "count";

/// Picks the combinations file path. A requested path is honored only when it
/// ends in `.csv`; anything else falls back to [`DEFAULT_OUTPUT`].
pub fn resolve_output_path(requested: Option<&Path>) -> PathBuf {
    match requested {
        Some(path) if path.to_string_lossy().ends_with(".csv") => path.to_path_buf(),
        Some(path) => {
            debug!(
                "Ignoring output path {path:?} without a .csv suffix; using {DEFAULT_OUTPUT}"
            );
            PathBuf::from(DEFAULT_OUTPUT)
        }
        None => PathBuf::from(DEFAULT_OUTPUT),
    }
}

pub fn report_headers() -> Vec<&'static str> {
    LogicalField::ALL
        .into_iter()
        .map(LogicalField::name)
        .chain([COUNT_COLUMN])
        .collect()
}

/// Writes the header row and one row per entry, even when `entries` is empty.
pub fn write_combinations(entries: &[AggregateEntry], path: &Path) -> Result<()> {
    let mut writer = io_utils::open_csv_writer(path)?;
    write_rows(&mut writer, entries).with_context(|| format!("Writing combinations to {path:?}"))
}

pub fn write_combinations_to<W: Write>(entries: &[AggregateEntry], output: W) -> Result<()> {
    let mut writer = io_utils::open_csv_writer_to(output);
    write_rows(&mut writer, entries)
}

fn write_rows<W: Write>(writer: &mut csv::Writer<W>, entries: &[AggregateEntry]) -> Result<()> {
    writer.write_record(report_headers())?;
    for entry in entries {
        let count = entry.count.to_string();
        writer.write_record(
            entry
                .record
                .values()
                .iter()
                .map(String::as_str)
                .chain([count.as_str()]),
        )?;
    }
    writer.flush()?;
    Ok(())
}
