//! # drillpipe_core - Drill Pipe Torque-Tension Engine
//!
//! `drillpipe_core` computes combined torsion-tension operating limits for
//! drill pipe. Given a pipe's OD, wall thickness and yield strength it derives
//! the section properties, the torsional yield torque and the curve of
//! maximum tension versus applied torque, then derates that curve by a safety
//! margin.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take a request and return a result
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Auditable**: Every formula constant is named and documented
//!
//! ## Quick Start
//!
//! ```rust
//! use drillpipe_core::calculations::{calculate, EnvelopeRequest, SafetyMargin};
//! use drillpipe_core::catalog::{self, NominalSize, PipeGrade};
//!
//! let spec = catalog::lookup(NominalSize::D5, 19.5, PipeGrade::E75).unwrap();
//! let mut request = EnvelopeRequest::new(spec);
//! request.safety_margin = SafetyMargin::new(20).unwrap();
//!
//! let result = calculate(&request).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("torsional_limit"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Envelope sweep and safety derating
//! - [`equations`] - Section and combined-stress formulas
//! - [`geometry`] - Pipe specification and derived section properties
//! - [`catalog`] - Standard drill pipe sizes, weights and grades
//! - [`units`] - Type-safe unit wrappers and display-unit selection
//! - [`settings`] - Serializable analysis defaults
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod equations;
pub mod errors;
pub mod geometry;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{EnvelopeRequest, EnvelopeResult, SafetyMargin, StressEnvelopePoint};
pub use errors::{CalcError, CalcResult};
pub use geometry::{GeometryProperties, PipeSpecification};
pub use settings::AnalysisSettings;
pub use units::{TensionUnit, TorqueUnit, UnitPreference};
