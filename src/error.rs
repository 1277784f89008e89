//! Error types and handling for xdt-apply
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for xdt-apply operations
#[derive(Error, Diagnostic, Debug)]
pub enum XdtError {
    // Path errors
    #[error("Invalid path argument: {reason}")]
    #[diagnostic(
        code(xdt_apply::path::invalid),
        help("Paths passed to internal checks must be non-empty")
    )]
    InvalidPath { reason: String },

    #[error("File not found: {path}")]
    #[diagnostic(code(xdt_apply::fs::not_found))]
    FileNotFound { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(xdt_apply::fs::io_error))]
    IoError { message: String },

    // Gating errors
    #[error("Transform is not applicable: {reason}")]
    #[diagnostic(
        code(xdt_apply::gate::not_applicable),
        help(
            "Run 'xdt-apply check' to see why the selection was rejected. The transform \
             must be named <prefix>.<label>.config, be well-formed XML, belong to a \
             .csproj/.vbproj/.fsproj project, and have its destination file on disk"
        )
    )]
    NotApplicable { reason: String },

    // Engine errors
    #[error("Transform engine '{program}' failed: {reason}")]
    #[diagnostic(
        code(xdt_apply::engine::failed),
        help("The engine is run as: <program> <original> <transform> <output>")
    )]
    EngineFailed { program: String, reason: String },
}

impl From<std::io::Error> for XdtError {
    fn from(err: std::io::Error) -> Self {
        XdtError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, XdtError>;
