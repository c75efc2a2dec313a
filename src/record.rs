use crate::error::{Error, Result};
use crate::modifier::FieldModifier;
use indexmap::IndexMap;

/// Variable name → value mapping derived from one data row.
pub type Record = IndexMap<String, String>;

/// Maps a data row onto the template variables by position.
///
/// Each value passes through `modifier` first. Columns beyond the variable
/// list are ignored. When a name appears twice in `variables` the later
/// column wins.
///
/// # Errors
/// * `Error::MissingColumn` naming the first variable without a column
pub fn map_row<S: AsRef<str>>(
    variables: &[String],
    fields: &[S],
    modifier: &FieldModifier,
    row: usize,
) -> Result<Record> {
    variables
        .iter()
        .enumerate()
        .try_fold(Record::new(), |mut record, (i, variable)| -> Result<Record> {
            let raw = fields.get(i).ok_or_else(|| Error::MissingColumn {
                variable: variable.clone(),
                row,
            })?;
            record.insert(variable.clone(), modifier.apply(raw.as_ref()));
            Ok(record)
        })
}
