use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Document generated successfully
    Success = 0,
    /// Application error (unreadable input, invalid SBOM, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors raised at the I/O boundary.
///
/// The graph engine itself never fails; these errors only come from reading
/// inputs and writing documents.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Input file not found: {path}\n\n💡 Hint: {suggestion}")]
    InputNotFound { path: PathBuf, suggestion: String },

    #[error("Invalid SBOM document: {path}\nDetails: {details}\n\n💡 Hint: Provide a JSON array of components or an object with a \"components\" array")]
    InvalidSbom { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to generate {format} output\nDetails: {details}")]
    ExportError { format: String, details: String },

    /// Validation error for builder patterns and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
