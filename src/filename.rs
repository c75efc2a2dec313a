//! Output file naming.
//!
//! The filename pattern always refers to variables as `@name`, independent
//! of the replace pattern used inside the template.

use crate::constants::FILENAME_VARIABLE_PREFIX;
use crate::error::{Error, Result};
use crate::record::Record;
use std::path::{Component, Path, PathBuf};

/// Substitutes every literal `@name` in `pattern` with the record's value,
/// in variable-list order.
///
/// With variables `name` and `name2`, `@name2` is rewritten by `@name` first;
/// list the longer name earlier to avoid that.
pub fn resolve_file_name(pattern: &str, variables: &[String], record: &Record) -> String {
    variables.iter().fold(pattern.to_string(), |file_name, variable| {
        match record.get(variable) {
            Some(value) => {
                file_name.replace(&format!("{FILENAME_VARIABLE_PREFIX}{variable}"), value)
            }
            None => file_name,
        }
    })
}

/// Checks that a resolved file name stays inside the output directory.
///
/// Relative subdirectories are accepted. Empty names, absolute paths and
/// any `..` component are rejected.
pub fn is_file_name_safe(file_name: &str) -> bool {
    let path = Path::new(file_name);
    !file_name.trim().is_empty()
        && path.components().next().is_some()
        && path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        && path.file_name().is_some()
}

/// Joins a resolved file name onto the output directory.
///
/// # Errors
/// * `Error::UnsafeFileName` if the name fails [`is_file_name_safe`]
pub fn resolve_target_path<P: AsRef<Path>>(
    output_dir: P,
    file_name: &str,
    row: usize,
) -> Result<PathBuf> {
    if !is_file_name_safe(file_name) {
        return Err(Error::UnsafeFileName {
            file_name: file_name.to_string(),
            row,
        });
    }
    Ok(output_dir.as_ref().join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn vars(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_single_variable() {
        let name = resolve_file_name(
            "@serial.txt",
            &vars(&["serial", "code"]),
            &record(&[("serial", "A1"), ("code", "X")]),
        );
        assert_eq!(name, "A1.txt");
    }

    #[test]
    fn test_resolve_every_occurrence() {
        let name = resolve_file_name(
            "@serial-@code-@serial.txt",
            &vars(&["serial", "code"]),
            &record(&[("serial", "A1"), ("code", "X")]),
        );
        assert_eq!(name, "A1-X-A1.txt");
    }

    #[test]
    fn test_prefix_is_literal() {
        // `.` is not a wildcard in filename patterns
        let name = resolve_file_name("@a.b", &vars(&["a.b"]), &record(&[("a.b", "v")]));
        assert_eq!(name, "v");
        let name = resolve_file_name("@axb", &vars(&["a.b"]), &record(&[("a.b", "v")]));
        assert_eq!(name, "@axb");
    }

    #[test]
    fn test_is_file_name_safe() {
        assert!(is_file_name_safe("A1.txt"));
        assert!(is_file_name_safe("group/A1.txt"));
        assert!(is_file_name_safe("./A1.txt"));
        assert!(!is_file_name_safe(""));
        assert!(!is_file_name_safe("   "));
        assert!(!is_file_name_safe("../A1.txt"));
        assert!(!is_file_name_safe("group/../../A1.txt"));
        assert!(!is_file_name_safe("/etc/passwd"));
        assert!(!is_file_name_safe("."));
    }

    #[test]
    fn test_resolve_target_path() {
        let path = resolve_target_path("output", "A1.txt", 1).unwrap();
        assert_eq!(path, PathBuf::from("output/A1.txt"));

        match resolve_target_path("output", "../A1.txt", 4) {
            Err(Error::UnsafeFileName { file_name, row }) => {
                assert_eq!(file_name, "../A1.txt");
                assert_eq!(row, 4);
            }
            other => panic!("Expected UnsafeFileName, got {other:?}"),
        }
    }
}
