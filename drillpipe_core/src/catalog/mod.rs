//! # Drill Pipe Catalog
//!
//! Lookup service that turns a (nominal size, nominal weight, grade) key into
//! a [`PipeSpecification`]. The torque-tension engine never depends on this
//! module; it only consumes the resulting specification.
//!
//! Table contents are reference data and are not re-validated here beyond
//! what [`PipeSpecification::validate`] checks during a calculation.
//!
//! ## Example
//!
//! ```rust
//! use drillpipe_core::catalog::{self, NominalSize, PipeGrade};
//!
//! let spec = catalog::lookup(NominalSize::D5, 19.5, PipeGrade::E75).unwrap();
//! assert_eq!(spec.outer_diameter_in, 5.0);
//! assert_eq!(spec.wall_thickness_in, 0.362);
//! assert_eq!(spec.yield_strength_psi, 75_000.0);
//! assert_eq!(spec.label, "5\" 19.50 lb/ft E-75");
//! ```

pub mod grades;
pub mod sizes;

pub use grades::PipeGrade;
pub use sizes::{NominalSize, NominalWeight};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::PipeSpecification;

/// Flat catalog row, convenient for listing and export
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub size: NominalSize,
    pub outer_diameter_in: f64,
    pub weight_lb_ft: f64,
    pub wall_thickness_in: f64,
}

/// Resolve a catalog key into a pipe specification.
///
/// # Errors
///
/// [`CalcError::PipeNotFound`] when the size has no such nominal weight.
pub fn lookup(size: NominalSize, weight_lb_ft: f64, grade: PipeGrade) -> CalcResult<PipeSpecification> {
    let nominal = size
        .find_weight(weight_lb_ft)
        .ok_or_else(|| CalcError::pipe_not_found(size.label(), format!("{:.2}", weight_lb_ft)))?;

    Ok(PipeSpecification::new(
        format!("{} {:.2} lb/ft {}", size.label(), nominal.weight_lb_ft, grade),
        size.outer_diameter_in(),
        nominal.wall_thickness_in,
        grade.min_yield_psi(),
    ))
}

/// Every size/weight combination in the catalog, smallest size first
pub fn entries() -> Vec<CatalogEntry> {
    NominalSize::ALL
        .iter()
        .flat_map(|size| {
            size.nominal_weights().iter().map(move |nw| CatalogEntry {
                size: *size,
                outer_diameter_in: size.outer_diameter_in(),
                weight_lb_ft: nw.weight_lb_ft,
                wall_thickness_in: nw.wall_thickness_in,
            })
        })
        .collect()
}
