//! Error types for datagrid-core

use std::fmt;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in datagrid-core
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed range or address expression
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A connector required a configuration key that was not supplied
    #[error("Missing configuration key: {0}")]
    MissingConfig(String),

    /// A configuration value could not be interpreted
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidConfig { key: String, message: String },

    /// The requested sheet does not exist at the given location
    #[error("Sheet '{sheet}' not found in '{location}'")]
    SheetNotFound { location: String, sheet: String },

    /// A connector was used before `connect` succeeded
    #[error("Connector is not connected")]
    NotConnected,

    /// Connector-specific failure
    #[error("Connector error: {0}")]
    Connector(String),
}

impl Error {
    /// Create a connector error with a message
    pub fn connector<S: Into<String>>(msg: S) -> Self {
        Error::Connector(msg.into())
    }
}

/// What was wrong with a range or address expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// No `:` separating the two endpoints
    MissingColon,
    /// More than one `:`
    TooManyColons,
    /// Column part is empty or contains a non-letter
    InvalidColumn,
    /// Row part is empty or not a decimal number
    InvalidRow,
    /// Row number 0 (rows are 1-based)
    ZeroRow,
    /// Column or row does not fit in an index
    Overflow,
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FormatErrorKind::MissingColon => "missing ':' between endpoints",
            FormatErrorKind::TooManyColons => "more than one ':'",
            FormatErrorKind::InvalidColumn => "column must be one or more letters",
            FormatErrorKind::InvalidRow => "row must be a positive integer",
            FormatErrorKind::ZeroRow => "row numbers start at 1",
            FormatErrorKind::Overflow => "index out of range",
        };
        f.write_str(msg)
    }
}

/// A malformed range expression such as `"A1B2"` or `"A0:B2"`
///
/// The whole expression is rejected; `token` names the part that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid range '{expression}': {kind} (at '{token}')")]
pub struct FormatError {
    /// The expression as given by the caller
    pub expression: String,
    /// The offending token
    pub token: String,
    /// Classification of the failure
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub(crate) fn new(expression: &str, token: &str, kind: FormatErrorKind) -> Self {
        Self {
            expression: expression.to_string(),
            token: token.to_string(),
            kind,
        }
    }
}
