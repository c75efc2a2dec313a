//! Run configuration.
//! Resolves and validates every command-line option before any data row is
//! read, so configuration mistakes abort the run up front.

use crate::cli::Args;
use crate::error::{Error, Result};
use crate::hydrator::TemplateHydrator;
use crate::loader::{resolve_source, resolve_source_line};
use crate::matcher::PlaceholderPattern;
use crate::modifier::FieldModifier;
use log::info;
use std::path::{Path, PathBuf};

/// Validated configuration, read-only once built.
#[derive(Debug)]
pub struct Config {
    pub template_path: PathBuf,
    pub data_path: PathBuf,
    pub output_dir: PathBuf,
    pub ignore_header: bool,
    pub skip_invalid_rows: bool,
    pub variables: Vec<String>,
    pub filename_pattern: String,
    pub modifier: FieldModifier,
    pub placeholder: PlaceholderPattern,
    pub hydrator: TemplateHydrator,
}

/// Splits a comma separated variable list, trimming each name.
///
/// # Errors
/// * `Error::ConfigError` if the list contains an empty name
pub fn parse_variables(list: &str) -> Result<Vec<String>> {
    list.split(',')
        .map(|name| {
            let name = name.trim();
            if name.is_empty() {
                Err(Error::ConfigError(format!(
                    "template variables '{list}' contain an empty name"
                )))
            } else {
                Ok(name.to_string())
            }
        })
        .collect()
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::ConfigError(format!("{what} {} doesn't exist", path.display())))
    }
}

impl Config {
    /// Builds the configuration from parsed arguments.
    ///
    /// # Errors
    /// * `Error::ConfigError` for a missing template or data file, an invalid
    ///   variable list, field modifier or replace pattern
    pub fn from_args(args: &Args) -> Result<Self> {
        ensure_file_exists(&args.sample_template, "Sample template file")?;
        ensure_file_exists(&args.data_file, "Data file")?;

        let variables = parse_variables(&resolve_source_line(&args.template_variables)?)?;
        let filename_pattern = resolve_source_line(&args.filename_pattern)?;
        if filename_pattern.trim().is_empty() {
            return Err(Error::ConfigError("filename pattern is empty".to_string()));
        }
        let modifier = FieldModifier::parse(&resolve_source(&args.field_modifier)?)?;
        let placeholder = PlaceholderPattern::new(resolve_source_line(&args.replace_pattern)?)?;
        let hydrator = TemplateHydrator::new(&placeholder, &variables)?;

        Ok(Self {
            template_path: args.sample_template.clone(),
            data_path: args.data_file.clone(),
            output_dir: args.output_directory.clone(),
            ignore_header: args.ignore_header,
            skip_invalid_rows: args.skip_invalid_rows,
            variables,
            filename_pattern,
            modifier,
            placeholder,
            hydrator,
        })
    }

    /// Logs every configured option.
    pub fn log_summary(&self) {
        info!("Sample template      : {}", self.template_path.display());
        info!("Data file            : {}", self.data_path.display());
        info!("Ignoring header      : {}", self.ignore_header);
        info!("Template vars        : {}", self.variables.join(","));
        info!("Out dir              : {}", self.output_dir.display());
        info!("Out filename pattern : {}", self.filename_pattern);
        info!("Field modifiers      : {}", self.modifier.describe());
        info!("Replace pattern      : {}", self.placeholder.as_str());
        info!("Skip invalid rows    : {}", self.skip_invalid_rows);
    }
}
