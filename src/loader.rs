//! Reading the input file: precondition checks, encoding and record splitting.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::dialect::Dialect;
use crate::encoding::{EncodingFailure, check_utf8, has_utf8_bom, skip_bom};
use crate::error::{Result, ValidatorError};
use crate::table::{Table, parse_table};

/// The raw bytes of the input file plus what we know about them.
#[derive(Debug, Clone)]
pub struct RawFile {
    /// Path as given by the caller.
    pub path: PathBuf,
    /// File content.
    pub bytes: Vec<u8>,
    /// Number of physical lines (a trailing partial line counts).
    pub line_count: usize,
    /// Whether the content starts with a UTF-8 BOM.
    pub has_bom: bool,
}

impl RawFile {
    /// Check the path preconditions and read the whole file.
    ///
    /// Fails with `NotFound` or `WrongExtension` before any byte is read.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        check_path(path)?;

        let bytes = fs::read(path)?;
        debug!(path = %path.display(), len = bytes.len(), "read input file");
        Ok(Self::from_bytes(path, bytes))
    }

    /// Wrap bytes that did not come from [`RawFile::read`].
    pub fn from_bytes<P: Into<PathBuf>>(path: P, bytes: Vec<u8>) -> Self {
        let newlines = bytecount::count(&bytes, b'\n');
        let line_count = if bytes.last().is_some_and(|&b| b != b'\n') {
            newlines + 1
        } else {
            newlines
        };

        Self {
            path: path.into(),
            has_bom: has_utf8_bom(&bytes),
            line_count,
            bytes,
        }
    }

    /// Size of the content in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the file has no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// File name without directories, for display.
    pub fn file_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    /// The content as UTF-8 with any BOM removed.
    pub fn text(&self) -> std::result::Result<&str, EncodingFailure> {
        let offset = if self.has_bom { 3 } else { 0 };
        check_utf8(skip_bom(&self.bytes)).map_err(|mut failure| {
            failure.offset += offset;
            failure
        })
    }

    /// Split the content into a [`Table`].
    pub fn load_table(&self, dialect: &Dialect) -> Result<Table> {
        let text = self.text().map_err(|failure| ValidatorError::Encoding {
            offset: failure.offset,
            guess: failure.guess.name(),
        })?;

        let table = parse_table(text, dialect)?;
        if table.is_empty() {
            return Err(ValidatorError::EmptyFile);
        }

        debug!(
            rows = table.num_rows(),
            width = table.width(),
            mismatches = table.mismatches.len(),
            "parsed table"
        );
        Ok(table)
    }
}

/// Verify `path` exists and ends in `.csv` (any case).
pub fn check_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ValidatorError::NotFound(path.to_path_buf()));
    }

    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(ValidatorError::WrongExtension(path.to_path_buf()));
    }

    Ok(())
}

/// Read and parse the CSV file at `path` in one step.
pub fn load_path<P: AsRef<Path>>(path: P, dialect: &Dialect) -> Result<Table> {
    RawFile::read(path)?.load_table(dialect)
}
