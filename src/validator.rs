//! Validator builder driving the loader, structural check and statistics.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::dialect::{Dialect, Quote};
use crate::error::{Result, ValidatorError};
use crate::loader::RawFile;
use crate::report::{EncodingVerdict, ValidationReport};
use crate::stats::statistics::{Statistics, compute_statistics};
use crate::structure::{StructuralVerdict, validate_structure};

/// CSV validator.
///
/// # Example
///
/// ```no_run
/// use csv_validator::Validator;
///
/// let validator = Validator::new();
/// let report = validator.validate_path("data.csv").unwrap();
/// println!("{report}");
/// let written = validator.write_report(&report).unwrap();
/// println!("Report saved to {}", written.display());
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    /// Dialect used to split records.
    dialect: Dialect,
    /// Directory receiving report files.
    output_dir: PathBuf,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new Validator with default settings.
    ///
    /// Comma delimited, double-quoted, reports written to the current
    /// working directory.
    pub fn new() -> Self {
        Self {
            dialect: Dialect::default(),
            output_dir: PathBuf::from("."),
        }
    }

    /// Set the field delimiter.
    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.dialect.delimiter = delimiter;
        self
    }

    /// Set the quote character.
    pub fn quote(&mut self, quote: Quote) -> &mut Self {
        self.dialect.quote = quote;
        self
    }

    /// Set the directory report files are written to.
    pub fn output_dir<P: Into<PathBuf>>(&mut self, dir: P) -> &mut Self {
        self.output_dir = dir.into();
        self
    }

    /// Validate the CSV file at `path`.
    ///
    /// Only precondition, IO and CSV syntax failures are errors; encoding
    /// problems, empty files and misaligned rows end up in the report.
    pub fn validate_path<P: AsRef<Path>>(&self, path: P) -> Result<ValidationReport> {
        let raw = RawFile::read(path)?;
        self.validate_raw(&raw)
    }

    /// Validate in-memory CSV data; `name` stands in for the file name.
    pub fn validate_bytes(&self, name: &str, data: &[u8]) -> Result<ValidationReport> {
        self.validate_raw(&RawFile::from_bytes(name, data.to_vec()))
    }

    /// Validate an already read file.
    pub fn validate_raw(&self, raw: &RawFile) -> Result<ValidationReport> {
        let mut report = ValidationReport {
            file_name: raw.file_name(),
            file_size: raw.len(),
            line_count: raw.line_count,
            encoding: EncodingVerdict::utf8(raw.has_bom),
            structure: StructuralVerdict::empty_file(),
            width: 0,
            mismatches: Vec::new(),
            statistics: None,
        };

        match raw.load_table(&self.dialect) {
            Ok(table) => {
                report.structure = validate_structure(&table);
                report.width = table.width();
                report.statistics = Some(compute_statistics(&table));
                report.mismatches = table.mismatches;
            }
            Err(err @ ValidatorError::Encoding { .. }) => {
                debug!(file = %report.file_name, "{err}");
                report.encoding = EncodingVerdict::invalid(err.to_string());
                report.structure = StructuralVerdict {
                    well_formed: false,
                    details: "Not checked".to_string(),
                };
            }
            Err(ValidatorError::EmptyFile) => {
                report.statistics = Some(Statistics::default());
            }
            Err(err) => return Err(err),
        }

        if !report.structure.well_formed && report.encoding.valid {
            debug!(
                file = %report.file_name,
                mismatches = report.mismatches.len(),
                "{}",
                report.structure.details
            );
        }
        debug!(file = %report.file_name, valid = report.is_valid(), "validation finished");

        Ok(report)
    }

    /// Write `report` to the configured output directory.
    pub fn write_report(&self, report: &ValidationReport) -> Result<PathBuf> {
        report.write_to_dir(&self.output_dir)
    }
}
