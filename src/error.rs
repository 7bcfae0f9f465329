//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading payroll data and
//! computing payslips.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::UnknownEmployee { id: 42 };
/// assert_eq!(error.to_string(), "Unknown employee: 42");
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

    /// The rate configuration contained a negative rate or a fraction above 1.
    #[error("Invalid rate configuration '{field}': {message}")]
    InvalidConfig {
        /// The rate field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An employee identifier could not be resolved against the roster.
    #[error("Unknown employee: {id}")]
    UnknownEmployee {
        /// The identifier that was not found.
        id: u32,
    },

    /// An employee record was invalid or conflicted with the roster.
    #[error("Invalid employee {id}: {message}")]
    InvalidEmployee {
        /// The ID of the invalid employee.
        id: u32,
        /// A description of what made the employee invalid.
        message: String,
    },

    /// An attendance entry was invalid or contained inconsistent data.
    #[error("Invalid attendance entry {entry_id}: {message}")]
    InvalidAttendance {
        /// The ID of the invalid attendance entry.
        entry_id: u32,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A calculation could not be completed, such as an amount overflowing.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
