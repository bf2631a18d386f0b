//! # Error Types
//!
//! This module defines error types used throughout the etp library.

use thiserror::Error;

/// Main error type for etp operations
#[derive(Debug, Error)]
pub enum EtpError {
    /// Model identifier is not in the registry
    #[error("Model \"{0}\" not supported")]
    ModelNotSupported(String),

    /// Template source is not valid UTF-8 text
    #[error("Template is not valid UTF-8: {0}")]
    InvalidTemplateEncoding(#[from] std::str::Utf8Error),

    /// A character has no representation in the target code page
    #[error("Character '{ch}' (U+{code:04X}) not representable in {code_page}", code = u32::from(*.ch))]
    Encoding { ch: char, code_page: &'static str },

    /// Template parsing or execution failed
    #[error("Template execute: {0}")]
    TemplateExecution(String),

    /// Invalid command or parameter
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Runtime data could not be loaded
    #[error("Data error: {0}")]
    Data(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, EtpError>;
