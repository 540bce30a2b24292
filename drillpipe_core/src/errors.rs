//! # Error Types
//!
//! Structured error types for drillpipe_core. Every failure the engine can
//! report is a permanent input problem: the calculations are deterministic,
//! so retrying the same request always fails the same way.
//!
//! Torque beyond the torsional yield limit is *not* an error. Such points are
//! reported as valid zero-capacity points by the envelope sweep.
//!
//! ## Example
//!
//! ```rust
//! use drillpipe_core::errors::{CalcError, CalcResult};
//!
//! fn validate_yield(yield_psi: f64) -> CalcResult<()> {
//!     if yield_psi <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "yield_strength_psi",
//!             yield_psi.to_string(),
//!             "Yield strength must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_yield(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for drillpipe_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Pipe dimensions describe a physically impossible annulus
    /// (wall at least half the outer diameter, or non-positive sizes).
    #[error("Invalid geometry: OD {outer_diameter_in} in, wall {wall_thickness_in} in - {reason}")]
    InvalidGeometry {
        outer_diameter_in: f64,
        wall_thickness_in: f64,
        reason: String,
    },

    /// An input value is invalid (out of range, unknown unit, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No catalog entry for the requested size/weight pair
    #[error("Pipe not found: {size} at {weight} lb/ft")]
    PipeNotFound { size: String, weight: String },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(outer_diameter_in: f64, wall_thickness_in: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            outer_diameter_in,
            wall_thickness_in,
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a PipeNotFound error
    pub fn pipe_not_found(size: impl Into<String>, weight: impl Into<String>) -> Self {
        CalcError::PipeNotFound {
            size: size.into(),
            weight: weight.into(),
        }
    }

    /// Always false: every error here is a deterministic validation failure.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::PipeNotFound { .. } => "PIPE_NOT_FOUND",
        }
    }
}
