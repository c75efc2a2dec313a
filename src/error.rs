//! Error handling for the template processor.
//! Defines the crate error type and the result alias used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for template processing.
///
/// Configuration problems are reported before any row is read. Row-level
/// problems (`MissingColumn`, `UnsafeFileName`) carry the 1-based CSV record
/// number of the row, header included. Blank lines are not counted.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents malformed CSV input
    #[error("CSV error: {0}.")]
    CsvError(#[from] csv::Error),

    /// Missing input file, malformed field modifier, bad replace pattern or regex
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A data row has fewer columns than declared template variables
    #[error("No column for template variable '{variable}' in row {row}.")]
    MissingColumn { variable: String, row: usize },

    /// A resolved output file name would escape the output directory
    #[error("Unsafe output file name '{file_name}' in row {row}.")]
    UnsafeFileName { file_name: String, row: usize },

    /// The hydrated file could not be written
    #[error("Failed to write '{}': {source}.", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Whether the error concerns a single data row rather than the whole run.
    pub fn is_row_error(&self) -> bool {
        matches!(self, Error::MissingColumn { .. } | Error::UnsafeFileName { .. })
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
