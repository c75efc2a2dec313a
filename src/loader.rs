//! File-or-literal option loading.
//! Options such as the variable list or the filename pattern may be given
//! inline on the command line or as a path to a file holding the same text.
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Represents where an option value comes from.
#[derive(Debug, PartialEq, Eq)]
pub enum OptionSource {
    /// Path to an existing file whose contents are the value
    File(PathBuf),
    /// The argument text itself
    Literal(String),
}

impl std::fmt::Display for OptionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionSource::File(path) => write!(f, "file: '{}'", path.display()),
            OptionSource::Literal(text) => write!(f, "literal: '{text}'"),
        }
    }
}

impl OptionSource {
    /// Classifies an argument: an existing file path wins over literal text.
    pub fn from_string(s: &str) -> Self {
        let path = PathBuf::from(s);
        if !s.is_empty() && path.is_file() {
            Self::File(path)
        } else {
            Self::Literal(s.to_string())
        }
    }

    /// Returns the option value, reading the file for `File` sources.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the file cannot be read as UTF-8 text
    pub fn load(self) -> Result<String> {
        match self {
            OptionSource::File(path) => {
                debug!("Reading option value from {}", path.display());
                fs::read_to_string(&path).map_err(|e| {
                    Error::ConfigError(format!("failed to read '{}': {e}", path.display()))
                })
            }
            OptionSource::Literal(text) => Ok(text),
        }
    }
}

/// Resolves a file-or-literal argument to its text.
pub fn resolve_source(input: &str) -> Result<String> {
    OptionSource::from_string(input).load()
}

/// Like [`resolve_source`], dropping trailing line terminators a file may end with.
pub fn resolve_source_line(input: &str) -> Result<String> {
    let text = resolve_source(input)?;
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}
