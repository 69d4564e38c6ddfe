//! The validation report: its contents, text layout and report file.

use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use prettytable::{Cell, Row, Table as Grid, format};
use tracing::info;

use crate::error::Result;
use crate::stats::statistics::Statistics;
use crate::structure::StructuralVerdict;
use crate::table::MismatchRecord;

const RULE: &str = "====================";

/// Outcome of the UTF-8 check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingVerdict {
    /// True if the content decoded as UTF-8.
    pub valid: bool,
    /// Human-readable explanation.
    pub details: String,
}

impl EncodingVerdict {
    /// Verdict for content that decoded cleanly.
    pub fn utf8(has_bom: bool) -> Self {
        let details = if has_bom { "UTF-8 (with BOM)" } else { "UTF-8" };
        Self {
            valid: true,
            details: details.to_string(),
        }
    }

    /// Verdict for content that failed to decode.
    pub fn invalid(details: impl Into<String>) -> Self {
        Self {
            valid: false,
            details: details.into(),
        }
    }
}

/// Everything known about one validated file.
///
/// Built once by [`crate::Validator`]; `Display` renders the report text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Input file name without directories.
    pub file_name: String,
    /// Input size in bytes.
    pub file_size: usize,
    /// Physical line count of the input.
    pub line_count: usize,
    /// Encoding verdict.
    pub encoding: EncodingVerdict,
    /// Column alignment verdict.
    pub structure: StructuralVerdict,
    /// Header width.
    pub width: usize,
    /// Rows whose width differs from the header's.
    pub mismatches: Vec<MismatchRecord>,
    /// Statistics, absent when the content could not be decoded.
    pub statistics: Option<Statistics>,
}

impl ValidationReport {
    /// True if both the encoding and the structural checks passed.
    pub fn is_valid(&self) -> bool {
        self.encoding.valid && self.structure.well_formed
    }

    /// One-line reason for a failing verdict.
    pub fn failure_reason(&self) -> Option<&str> {
        if !self.encoding.valid {
            Some(self.encoding.details.as_str())
        } else if !self.structure.well_formed {
            Some(self.structure.details.as_str())
        } else {
            None
        }
    }

    /// Name of the report file for a run at `timestamp`.
    pub fn file_name_at(&self, timestamp: &DateTime<Local>) -> String {
        let stem = Path::new(&self.file_name)
            .file_stem()
            .map_or_else(|| self.file_name.clone(), |s| s.to_string_lossy().into_owned());
        format!(
            "{stem}_validation_report_{}.txt",
            timestamp.format("%Y%m%d_%H%M%S")
        )
    }

    /// Write the report into `dir`, named after the input file and the
    /// current local time. Returns the path written.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.file_name_at(&Local::now()));

        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(self.to_string().as_bytes())?;
        writer.flush()?;

        info!(path = %path.display(), "report written");
        Ok(path)
    }

    fn write_format_section(&self, out: &mut String) -> fmt::Result {
        section(out, "CSV Format Validation")?;
        writeln!(out, "File: {}", self.file_name)?;
        writeln!(out, "Size: {} bytes", self.file_size)?;
        writeln!(out, "Lines: {}", self.line_count)?;
        writeln!(
            out,
            "Encoding: {} {}",
            mark(self.encoding.valid),
            self.encoding.details
        )?;
        writeln!(
            out,
            "Status: {}",
            if self.is_valid() { "✓ Valid" } else { "✗ Invalid" }
        )?;
        writeln!(
            out,
            "Details: {}",
            self.failure_reason().unwrap_or(self.structure.details.as_str())
        )
    }

    fn write_alignment_section(&self, out: &mut String) -> fmt::Result {
        section(out, "Alignment Details")?;
        if self.statistics.is_none() {
            return writeln!(out, "{}", NOT_COMPUTED);
        }

        if self.width == 0 {
            return writeln!(out, "No header row");
        }

        writeln!(out, "Expected Columns: {}", self.width)?;
        if self.mismatches.is_empty() {
            return writeln!(out, "All rows match the header width");
        }

        writeln!(out, "Mismatched Rows: {}", self.mismatches.len())?;
        let rows = self
            .mismatches
            .iter()
            .map(|m| vec![m.row.to_string(), m.line.to_string(), m.fields.to_string()]);
        write!(
            out,
            "{}",
            grid(&[("Row", true), ("Line", true), ("Fields", true)], rows)
        )
    }

    fn write_statistics_sections(&self, out: &mut String) -> fmt::Result {
        let Some(stats) = &self.statistics else {
            for title in ["Basic Statistics", "Null Value Analysis", "Column Statistics"] {
                writeln!(out)?;
                section(out, title)?;
                writeln!(out, "{}", NOT_COMPUTED)?;
            }
            return Ok(());
        };

        writeln!(out)?;
        section(out, "Basic Statistics")?;
        writeln!(out, "Total Rows: {}", stats.row_count)?;
        writeln!(out, "Total Columns: {}", stats.column_count)?;
        writeln!(out, "Duplicate Rows: {}", stats.duplicate_rows)?;
        writeln!(out, "Excluded Rows: {}", stats.excluded_rows)?;

        writeln!(out)?;
        section(out, "Null Value Analysis")?;
        let nulls = stats
            .columns
            .iter()
            .map(|col| vec![col.name.clone(), col.null_count.to_string()]);
        write!(
            out,
            "{}",
            grid(&[("Column", false), ("Null Count", true)], nulls)
        )?;

        writeln!(out)?;
        section(out, "Column Statistics")?;
        let columns = stats.columns.iter().map(|col| {
            vec![
                col.name.clone(),
                col.data_type.to_string(),
                col.unique_values.to_string(),
            ]
        });
        write!(
            out,
            "{}",
            grid(
                &[
                    ("Column", false),
                    ("Data Type", false),
                    ("Unique Values", true),
                ],
                columns,
            )
        )
    }
}

const NOT_COMPUTED: &str = "Not computed: file content could not be decoded";

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_format_section(&mut out)?;
        writeln!(out)?;
        self.write_alignment_section(&mut out)?;
        self.write_statistics_sections(&mut out)?;
        f.write_str(&out)
    }
}

fn section(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out, "{title}")?;
    writeln!(out, "{RULE}")
}

fn mark(ok: bool) -> &'static str {
    if ok { "✓" } else { "✗" }
}

/// Build a `+---+` bordered table with a `=` rule under the titles.
///
/// `columns` pairs each title with whether the column is right-aligned.
fn grid<I>(columns: &[(&str, bool)], rows: I) -> Grid
where
    I: IntoIterator<Item = Vec<String>>,
{
    let align = |right: bool| if right { "r" } else { "l" };

    let mut table = Grid::new();
    table.set_format(*format::consts::FORMAT_DEFAULT);
    table.set_titles(Row::new(
        columns
            .iter()
            .map(|&(title, right)| Cell::new(title).style_spec(align(right)))
            .collect(),
    ));

    for row in rows {
        table.add_row(Row::new(
            row.iter()
                .zip(columns)
                .map(|(value, &(_, right))| Cell::new(value).style_spec(align(right)))
                .collect(),
        ));
    }

    table
}
