//! # Drill Pipe Mechanics Equations
//!
//! Fundamental formulas used by the torque-tension calculations. Keeping them
//! in one place makes each formula easy to audit against the API references.
//!
//! ## Modules
//!
//! - [`section`] - Annular cross-section properties (ID, A, J)
//! - [`combined_stress`] - Torsional yield torque and tension limit under torque
//!
//! ## Sign Conventions
//!
//! - **Tension**: Positive pulls the pipe apart
//! - **Torque**: Magnitude only; the limit formulas are even in torque
//!
//! ## References
//!
//! - API RP 7G: Drill Stem Design and Operating Limits
//! - API Spec 5DP: Drill Pipe
//! - Roark's Formulas for Stress and Strain, 8th Edition

pub mod combined_stress;
pub mod section;

pub use combined_stress::{max_tension, torsional_yield_torque, TORSIONAL_SHEAR_FACTOR};
pub use section::{annulus_area, annulus_moment_of_inertia, inner_diameter};
