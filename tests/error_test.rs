use std::io;
use std::path::PathBuf;

use template_processor::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::MissingColumn {
        variable: "b".to_string(),
        row: 2,
    };
    assert_eq!(err.to_string(), "No column for template variable 'b' in row 2.");

    let err = Error::WriteError {
        path: PathBuf::from("out/a.txt"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to write 'out/a.txt': denied.");
}

#[test]
fn test_row_errors() {
    assert!(Error::MissingColumn {
        variable: "a".to_string(),
        row: 1
    }
    .is_row_error());
    assert!(Error::UnsafeFileName {
        file_name: "../x".to_string(),
        row: 1
    }
    .is_row_error());
    assert!(!Error::ConfigError("x".to_string()).is_row_error());
}
