//! Row-by-row generation driver.
//! Reads the data file sequentially and, for each row, maps it to a record,
//! hydrates the template, resolves the target path and writes the file
//! before moving on to the next row.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::filename::{resolve_file_name, resolve_target_path};
use crate::hydrator::TemplateHydrator;
use crate::modifier::FieldModifier;
use crate::record::map_row;
use log::{debug, warn};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// What happens to a row once it has been rendered.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOperation {
    /// The header row, consumed without output
    SkipHeader,
    /// Write hydrated content to target
    Write { target: PathBuf, content: String },
}

/// Outcome of a whole run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Files written, in data file order
    pub written: Vec<PathBuf>,
    /// 1-based record numbers of rows skipped as invalid
    pub skipped_rows: Vec<usize>,
}

/// Creates the output directory, including parents, if absent.
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let output_dir = output_dir.as_ref();
    if !output_dir.exists() {
        debug!("Creating output directory {}", output_dir.display());
    }
    fs::create_dir_all(output_dir).map_err(|source| Error::WriteError {
        path: output_dir.to_path_buf(),
        source,
    })
}

/// Writes `content` to `target`, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(content: &str, target: P) -> Result<()> {
    let target = target.as_ref();
    let write_error = |source| Error::WriteError {
        path: target.to_path_buf(),
        source,
    };
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(target, content).map_err(write_error)
}

/// Drives generation for one template over a stream of CSV rows.
pub struct Processor<'a> {
    template: &'a str,
    variables: &'a [String],
    filename_pattern: &'a str,
    modifier: &'a FieldModifier,
    hydrator: &'a TemplateHydrator,
    output_dir: &'a Path,
    ignore_header: bool,
    skip_invalid_rows: bool,
}

impl<'a> Processor<'a> {
    pub fn new(config: &'a Config, template: &'a str) -> Self {
        Self {
            template,
            variables: &config.variables,
            filename_pattern: &config.filename_pattern,
            modifier: &config.modifier,
            hydrator: &config.hydrator,
            output_dir: &config.output_dir,
            ignore_header: config.ignore_header,
            skip_invalid_rows: config.skip_invalid_rows,
        }
    }

    /// Renders one data row into the file it should produce.
    ///
    /// # Errors
    /// * `Error::MissingColumn` if the row is shorter than the variable list
    /// * `Error::UnsafeFileName` if the resolved name leaves the output directory
    pub fn render_row<S: AsRef<str>>(&self, fields: &[S], row: usize) -> Result<FileOperation> {
        let record = map_row(self.variables, fields, self.modifier, row)?;
        let content = self.hydrator.hydrate(self.template, &record);
        let file_name = resolve_file_name(self.filename_pattern, self.variables, &record);
        let target = resolve_target_path(self.output_dir, &file_name, row)?;
        Ok(FileOperation::Write { target, content })
    }

    /// Processes every row of `data`, in order, one at a time.
    ///
    /// Rows are numbered by CSV record, header included: blank lines are not
    /// rows and a quoted field spanning several lines stays one row.
    ///
    /// The first unrecoverable error stops the run; files already written stay
    /// in place. With `skip_invalid_rows`, row-level errors are logged and the
    /// row is skipped instead.
    pub fn run<R: Read>(&self, data: R) -> Result<Summary> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data);

        let mut summary = Summary::default();
        let mut header_pending = self.ignore_header;

        for (index, result) in reader.records().enumerate() {
            let row = index + 1;
            let record = result?;

            let operation = if header_pending {
                header_pending = false;
                FileOperation::SkipHeader
            } else {
                let fields: Vec<&str> = record.iter().collect();
                match self.render_row(&fields, row) {
                    Ok(operation) => operation,
                    Err(e) if e.is_row_error() && self.skip_invalid_rows => {
                        warn!("Skipping row: {e}");
                        summary.skipped_rows.push(row);
                        continue;
                    }
                    Err(e) => return Err(e),
                }
            };

            match operation {
                FileOperation::SkipHeader => debug!("Ignoring header row {row}"),
                FileOperation::Write { target, content } => {
                    debug!("Writing row {row} to {}", target.display());
                    write_file(&content, &target)?;
                    println!("Created: '{}'", target.display());
                    summary.written.push(target);
                }
            }
        }

        Ok(summary)
    }
}
