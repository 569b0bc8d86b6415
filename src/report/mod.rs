//! Rendering summaries for the console
//!
//! JSON is the summary records as-is. CSV writes plain numbers under a
//! header that is a subset of the JSON keys; identifiers such as
//! `departmentId` are JSON only. The text table uses human titles, Rupiah
//! amounts and right-aligned numeric columns.

pub mod inspect;
pub mod tabular;

pub use inspect::{inspect_department, inspect_proposal, InspectedProposal, InspectedTable, TableLines};
pub use tabular::{Field, Header, Tabular};

use crate::config::OutputFormat;
use crate::error::{ErrorCode, RecapError, Result};
use serde::Serialize;
use std::io::Write;

const COLUMN_GAP: &str = "  ";

/// Render `records` in `format` to `out`
pub fn render<T, W>(records: &[T], format: OutputFormat, pretty: bool, out: &mut W) -> Result<()>
where
    T: Tabular + Serialize,
    W: Write,
{
    match format {
        OutputFormat::Json => render_json(records, pretty, out),
        OutputFormat::Csv => render_csv(records, out),
        OutputFormat::Table => render_table(records, out),
    }
}

/// Write any serializable value as JSON followed by a newline
pub fn render_json<T: Serialize + ?Sized, W: Write>(value: &T, pretty: bool, out: &mut W) -> Result<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *out, value)
    } else {
        serde_json::to_writer(&mut *out, value)
    };
    written.map_err(|e| {
        RecapError::render_with_code(ErrorCode::RENDER_JSON, "Failed to write JSON").with_source(e)
    })?;
    writeln!(out).map_err(io_error)
}

/// CSV with one header line per run of records sharing a shape
pub fn render_csv<T: Tabular, W: Write>(records: &[T], out: &mut W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(&mut *out);

    for group in records.chunk_by(|a, b| a.headers() == b.headers()) {
        let headers = group[0].headers();
        writer
            .write_record(headers.iter().map(|(key, _)| *key))
            .map_err(csv_error)?;
        for record in group {
            writer
                .write_record(record.fields().iter().map(Field::raw))
                .map_err(csv_error)?;
        }
    }

    writer.flush().map_err(io_error)
}

/// Aligned text table; each run of same-shaped records gets its own block
pub fn render_table<T: Tabular, W: Write>(records: &[T], out: &mut W) -> Result<()> {
    if records.is_empty() {
        return writeln!(out, "No records").map_err(io_error);
    }

    for (i, group) in records
        .chunk_by(|a, b| a.headers() == b.headers())
        .enumerate()
    {
        if i > 0 {
            writeln!(out).map_err(io_error)?;
        }
        write_block(group, out)?;
    }
    Ok(())
}

fn write_block<T: Tabular, W: Write>(group: &[T], out: &mut W) -> Result<()> {
    let headers = group[0].headers();
    let rows: Vec<Vec<Field>> = group.iter().map(Tabular::fields).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(Field::display).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|(_, title)| title.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    // numeric columns are right-aligned, including their title
    let numeric: Vec<bool> = rows[0].iter().map(Field::is_numeric).collect();

    let title_line = headers
        .iter()
        .zip(&widths)
        .zip(&numeric)
        .map(|(((_, title), width), right)| pad(title, *width, *right))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    writeln!(out, "{}", title_line.trim_end()).map_err(io_error)?;

    let rule = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    writeln!(out, "{rule}").map_err(io_error)?;

    for row in &cells {
        let line = row
            .iter()
            .zip(&widths)
            .zip(&numeric)
            .map(|((cell, width), right)| pad(cell, *width, *right))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        writeln!(out, "{}", line.trim_end()).map_err(io_error)?;
    }
    Ok(())
}

fn pad(text: &str, width: usize, right: bool) -> String {
    if right {
        format!("{text:>width$}")
    } else {
        format!("{text:<width$}")
    }
}

fn io_error(e: std::io::Error) -> RecapError {
    RecapError::render_with_code(ErrorCode::RENDER_IO, "Failed to write output").with_source(e)
}

fn csv_error(e: csv::Error) -> RecapError {
    RecapError::render_with_code(ErrorCode::RENDER_CSV, "Failed to write CSV").with_source(e)
}
