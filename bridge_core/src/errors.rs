//! # Error Types
//!
//! Structured error types for bridge_core. Every stage of the analysis
//! pipeline fails fast with one of these variants; nothing is retried
//! because the computation is deterministic.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length: f64) -> CalcResult<()> {
//!     if length <= 0.0 {
//!         return Err(CalcError::validation(
//!             "length",
//!             length.to_string(),
//!             "Span length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bridge_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for analysis operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Malformed geometry or load data (non-positive length/inertia,
    /// support-count mismatch, mismatched load-case span references)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    /// A setting or code-rule input that cannot produce a valid configuration
    #[error("Invalid configuration for '{field}': {value} - {reason}")]
    Configuration {
        field: String,
        value: String,
        reason: String,
    },

    /// Two envelopes (or an envelope and a series) sampled on different grids
    #[error("Grid mismatch: expected {expected} stations, found {found} - {reason}")]
    GridMismatch {
        expected: usize,
        found: usize,
        reason: String,
    },

    /// A span's coordinate range contains no sampled station
    #[error("No stations within span {span_index} range [{start}, {end}]")]
    EmptySubset {
        span_index: usize,
        start: f64,
        end: f64,
    },

    /// Error raised by the structural solver, carried unchanged
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

/// Category of a structural solver failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverErrorKind {
    /// Stiffness matrix is singular (mechanism or insufficient restraint)
    Singular,
    /// A load lies outside its span or has a non-finite magnitude
    InvalidLoad,
    /// Sampling or sweep step is not a positive finite number
    InvalidStep,
}

/// Error reported by a [`StructuralSolver`](crate::solver::StructuralSolver).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[error("{kind:?}: {message}")]
pub struct SolverError {
    pub kind: SolverErrorKind,
    pub message: String,
}

impl SolverError {
    pub fn new(kind: SolverErrorKind, message: impl Into<String>) -> Self {
        SolverError {
            kind,
            message: message.into(),
        }
    }

    pub fn singular(message: impl Into<String>) -> Self {
        Self::new(SolverErrorKind::Singular, message)
    }
}

impl CalcError {
    /// Create a Validation error
    pub fn validation(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Validation {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Configuration error
    pub fn configuration(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Configuration {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a GridMismatch error
    pub fn grid_mismatch(expected: usize, found: usize, reason: impl Into<String>) -> Self {
        CalcError::GridMismatch {
            expected,
            found,
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::Validation { .. } => "VALIDATION_ERROR",
            CalcError::Configuration { .. } => "CONFIGURATION_ERROR",
            CalcError::GridMismatch { .. } => "GRID_MISMATCH",
            CalcError::EmptySubset { .. } => "EMPTY_SUBSET",
            CalcError::Solver(_) => "SOLVER_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::validation("spans[0].length", "-5", "Span length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::configuration("width", "2", "narrow").error_code(), "CONFIGURATION_ERROR");
        assert_eq!(CalcError::grid_mismatch(3, 4, "x").error_code(), "GRID_MISMATCH");
        let solver: CalcError = SolverError::singular("mechanism").into();
        assert_eq!(solver.error_code(), "SOLVER_ERROR");
    }

    #[test]
    fn test_solver_error_carried_verbatim() {
        let inner = SolverError::singular("node 2 unrestrained");
        let outer = CalcError::from(inner.clone());
        match outer {
            CalcError::Solver(e) => assert_eq!(e, inner),
            other => panic!("unexpected {other:?}"),
        }
    }
}
