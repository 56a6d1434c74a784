use std::io;

use vibecode::error::Error;

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
    let err = Error::ConfigError("invalid answers".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid answers.");

    let err = Error::TemplateError("unclosed block".to_string());
    assert_eq!(err.to_string(), "Template error: unclosed block.");

    let err = Error::EnvironmentError("Not in a git repository.".to_string());
    assert_eq!(err.to_string(), "Environment error: Not in a git repository.");
}
