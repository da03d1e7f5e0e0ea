//! Error types for the menu-data crate.
//!
//! Only the failures a caller has to act on live here. Malformed records
//! inside a menu document are not errors: the extractors skip them.

use thiserror::Error;

/// Errors that can occur while building date ranges or reading menu documents
#[derive(Error, Debug)]
pub enum MenuError {
    /// A user-supplied value was rejected before any work started
    #[error("Invalid value for {field}: {value}")]
    InvalidInput { field: String, value: String },

    /// The response body was neither a JSON object nor an XML document
    ///
    /// Both parser messages are kept so the report says why each attempt failed.
    #[error("Unexpected response format (not JSON/XML): json: {json}; xml: {xml}")]
    UnrecognizedFormat { json: String, xml: String },

    /// I/O error while writing an export or dump file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, MenuError>;
