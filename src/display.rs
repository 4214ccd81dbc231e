//! Human-readable listing of parsed records.
//!
//! Two layouts are offered: one block per record (the default), or an aligned
//! table with one line per record.

use std::{borrow::Cow, fmt::Write as _};

use itertools::Itertools;

use crate::{record::Record, schema::LogicalField};

const LISTING_BANNER: &str = "Products parsed successfully. Product records listed below:";
const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Blocks,
    Table,
}

pub fn render_records(records: &[Record], layout: Layout) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{LISTING_BANNER}");
    let _ = writeln!(output);
    match layout {
        Layout::Blocks => render_blocks(&mut output, records),
        Layout::Table => render_table(&mut output, records),
    }
    output
}

pub fn display_records(records: &[Record], layout: Layout) {
    print!("{}", render_records(records, layout));
}

fn render_blocks(output: &mut String, records: &[Record]) {
    let label_width = LogicalField::ALL
        .iter()
        .map(|field| field.name().len() + 1)
        .max()
        .unwrap_or_default();
    for (idx, record) in records.iter().enumerate() {
        let _ = writeln!(output, "Product #{}", idx + 1);
        for field in LogicalField::ALL {
            let label = format!("{field}:");
            let line = format!("  {label:<label_width$} {}", sanitize(record.get(field)));
            let _ = writeln!(output, "{}", line.trim_end());
        }
        let _ = writeln!(output);
    }
}

fn render_table(output: &mut String, records: &[Record]) {
    let mut widths = LogicalField::ALL.map(|field| field.name().chars().count());
    for record in records {
        for (width, value) in widths.iter_mut().zip(record.values()) {
            *width = (*width).max(sanitize(value).chars().count());
        }
    }

    let header = LogicalField::ALL.iter().map(|field| field.name());
    let _ = writeln!(output, "{}", format_line(header, &widths));
    let rule = widths.iter().map(|width| "-".repeat((*width).max(3)));
    let _ = writeln!(output, "{}", format_line(rule, &widths));
    for record in records {
        let cells = record.values().iter().map(|value| sanitize(value));
        let _ = writeln!(output, "{}", format_line(cells, &widths));
    }
}

fn format_line<I, S>(cells: I, widths: &[usize]) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let line = cells
        .into_iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref()))
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}

fn sanitize(value: &str) -> Cow<'_, str> {
    if value.contains(['\n', '\r', '\t']) {
        Cow::Owned(value.replace(['\n', '\r', '\t'], " "))
    } else {
        Cow::Borrowed(value)
    }
}
