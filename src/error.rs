use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for CSV validation operations.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// The input path does not exist.
    #[error("The file {} does not exist", .0.display())]
    NotFound(PathBuf),

    /// The input path does not carry a `.csv` extension.
    #[error("The file {} is not a CSV file", .0.display())]
    WrongExtension(PathBuf),

    /// The file content is not valid UTF-8.
    #[error("File is not valid UTF-8: invalid byte sequence at offset {offset} (looks like {guess})")]
    Encoding {
        /// Byte offset of the first invalid sequence.
        offset: usize,
        /// Name of the encoding the data most likely uses.
        guess: &'static str,
    },

    /// The file contains no records at all.
    #[error("Empty CSV file")]
    EmptyFile,

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

impl ValidatorError {
    /// Returns true for failures detected before the file is read.
    ///
    /// No report can be produced for these.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ValidatorError::NotFound(_) | ValidatorError::WrongExtension(_)
        )
    }
}

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, ValidatorError>;
