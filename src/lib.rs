//! csv-validator: structural and statistical validation of CSV files
//!
//! Reads one CSV file and produces a report covering encoding, column
//! alignment, duplicate rows, null counts, inferred column types and
//! per-column cardinality.
//!
//! # Quick Start
//!
//! ```no_run
//! use csv_validator::Validator;
//!
//! let validator = Validator::new();
//! let report = validator.validate_path("data.csv").unwrap();
//!
//! println!("Valid: {}", report.is_valid());
//! if let Some(stats) = &report.statistics {
//!     println!("Rows: {}", stats.row_count);
//!     println!("Duplicates: {}", stats.duplicate_rows);
//!     for column in &stats.columns {
//!         println!("{}: {} ({} nulls)", column.name, column.data_type, column.null_count);
//!     }
//! }
//! ```
//!
//! # Pipeline
//!
//! 1. The loader checks the path (exists, `.csv` extension), reads the bytes,
//!    validates UTF-8 and splits records with the `csv` crate. The first
//!    record is the header; rows of a different width are recorded as
//!    [`MismatchRecord`]s but kept.
//! 2. The structural check turns the mismatch list into a verdict.
//! 3. Statistics are computed over the rows matching the header width.
//! 4. [`ValidationReport`] renders the text report and writes it to
//!    `<stem>_validation_report_<YYYYMMDD_HHMMSS>.txt`.

mod dialect;
mod encoding;
mod error;
mod field_type;
mod loader;
mod report;
mod stats;
mod structure;
mod table;
mod validator;

pub use dialect::{Dialect, Quote};
pub use error::{Result, ValidatorError};
pub use field_type::Type;
pub use loader::{RawFile, check_path, load_path};
pub use report::{EncodingVerdict, ValidationReport};
pub use stats::statistics::{ColumnStats, Statistics, compute_statistics};
pub use structure::{StructuralVerdict, validate_structure};
pub use table::{MismatchRecord, Table, parse_table};
pub use validator::Validator;

// Re-export for advanced usage
pub use encoding::{EncodingFailure, check_utf8, is_utf8};
pub use stats::type_detection::{detect_cell_type, infer_column_type, is_null_value};
