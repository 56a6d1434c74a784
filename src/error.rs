//! Error handling for the vibecode application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for vibecode operations.
///
/// This enum represents all possible errors that can occur while gathering
/// configuration, materializing a project and wiring up git.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised while walking the template root
    #[error("Failed to read template directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Failed to build skip patterns. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    /// Represents errors that occur while compiling a template
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The environment is not suitable for generating a project
    #[error("Environment error: {0}")]
    EnvironmentError(String),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Failed to serialize. Original error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cannot proceed: output directory '{output_dir}' is not a directory.")]
    OutputDirectoryError { output_dir: String },
}

/// Convenience type alias for Results with vibecode's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("❌ Setup failed: {}", err);
    std::process::exit(1);
}
