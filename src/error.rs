//! Error types for the payroll component calculator.
//!
//! The calculation builders themselves never fail; inapplicable rules are
//! reported as `None`. These errors cover configuration loading and the
//! ingestion boundary where statutory rule rows are parsed.

use thiserror::Error;

/// The main error type for the payroll component calculator.
///
/// # Example
///
/// ```
/// use payroll_components::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/statutory.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/statutory.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No statutory rule of the requested kind exists for the given key.
    #[error("No {kind} rule configured for '{key}'")]
    RuleNotFound {
        /// The rule kind (e.g. "professional_tax").
        kind: String,
        /// The lookup key, usually an Indian state name.
        key: String,
    },

    /// A professional tax bracket table could not be parsed.
    #[error("Invalid gross salary range: {message}")]
    InvalidBracketTable {
        /// A description of what was wrong with the table.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
