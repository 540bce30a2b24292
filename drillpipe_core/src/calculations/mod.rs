//! # Torque-Tension Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Request` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(request) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! No state is kept between calls. A changed parameter means a new request
//! and a full recomputation.
//!
//! ## Available Calculations
//!
//! - [`envelope`] - Torque vs. maximum tension curve over the torsional range
//! - [`safety`] - Safety margin derating applied to raw limits

pub mod envelope;
pub mod safety;

pub use envelope::{
    calculate, EnvelopeRequest, EnvelopeResult, OperatingPointCheck, StressEnvelopePoint, DEFAULT_SAMPLE_COUNT,
};
pub use safety::SafetyMargin;
