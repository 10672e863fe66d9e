//! Output formatting for catalog listings.

use crate::models::ModelRecord;
use crate::{Error, Result};
use std::io::Write;
use std::str::FromStr;

/// Disclaimer shown under every table listing and by `diaglab notice`.
pub const CLINICAL_NOTICE: &str =
    "All models should be used for preliminary support. Not a substitute for final clinical decisions.";

/// Output format for `list` and `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format (default).
    #[default]
    Table,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl OutputFormat {
    /// Parses a format name; unknown names fall back to table.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "yaml" | "yml" => Self::Yaml,
            _ => Self::Table,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

fn write_failed(e: impl std::fmt::Display) -> Error {
    Error::operation("write_output", e)
}

/// Writes records as a table.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_table<W: Write>(
    writer: &mut W,
    records: &[&ModelRecord],
    verbose: bool,
) -> Result<()> {
    let id_width = column_width("ID", records.iter().map(|r| r.id.as_str()));
    let title_width = column_width("TITLE", records.iter().map(|r| r.title.as_str()));
    let version_width = column_width("VERSION", records.iter().map(|r| r.version.as_str()));

    let mut header = format!(
        "{:<id_width$}{:<title_width$}{:<10}{:<10}{:<version_width$}{:<9}",
        "ID", "TITLE", "MODALITY", "STATUS", "VERSION", "ENABLED"
    );
    if verbose {
        header.push_str("TAGS");
    }
    writeln!(writer, "{}", header.trim_end()).map_err(write_failed)?;

    for record in records {
        let mut line = format!(
            "{:<id_width$}{:<title_width$}{:<10}{:<10}{:<version_width$}{:<9}",
            record.id.as_str(),
            record.title,
            record.modality.as_str(),
            record.status.as_str(),
            record.version,
            if record.enabled { "on" } else { "off" }
        );
        if verbose {
            line.push_str(&record.tags.join(", "));
        }
        writeln!(writer, "{}", line.trim_end()).map_err(write_failed)?;
    }
    Ok(())
}

/// Widest cell of a column in chars, plus two spaces of gutter.
fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .fold(header.len(), usize::max)
        + 2
}

/// Writes one record with every field on its own line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_detail<W: Write>(writer: &mut W, record: &ModelRecord) -> Result<()> {
    let lines = [
        format!("{} ({})", record.title, record.id),
        format!("  {}", record.description),
        format!("  version:  {}", record.version),
        format!("  status:   {}", record.status),
        format!("  modality: {}", record.modality),
        format!("  tags:     {}", record.tags.join(", ")),
        format!("  enabled:  {}", if record.enabled { "on" } else { "off" }),
    ];
    for line in lines {
        writeln!(writer, "{line}").map_err(write_failed)?;
    }
    Ok(())
}

/// Writes the "showing N of M" summary and the clinical notice.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    shown: usize,
    total: usize,
    enabled: usize,
) -> Result<()> {
    writeln!(writer).map_err(write_failed)?;
    writeln!(
        writer,
        "Showing {shown} of {total} models ({enabled} enabled)"
    )
    .map_err(write_failed)?;
    writeln!(writer, "Note: {CLINICAL_NOTICE}").map_err(write_failed)?;
    Ok(())
}

/// Writes any serializable value as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write, T: serde::Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(write_failed)?;
    writeln!(writer, "{json}").map_err(write_failed)
}

/// Writes any serializable value as YAML.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_yaml<W: Write, T: serde::Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    let yaml = serde_yaml_ng::to_string(value).map_err(write_failed)?;
    write!(writer, "{yaml}").map_err(write_failed)
}
