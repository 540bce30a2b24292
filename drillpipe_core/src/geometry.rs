//! # Pipe Specification and Geometry
//!
//! [`PipeSpecification`] is the record handed to the engine by whatever
//! resolves a pipe (the [`crate::catalog`] or a user typing dimensions).
//! [`GeometryProperties`] are the section properties derived from it.
//!
//! ## Example
//!
//! ```rust
//! use drillpipe_core::geometry::{GeometryProperties, PipeSpecification};
//!
//! let spec = PipeSpecification::new("5\" test pipe", 5.0, 0.5, 75_000.0);
//! let geometry = GeometryProperties::from_spec(&spec).unwrap();
//!
//! assert_eq!(geometry.inner_diameter_in, 4.0);
//! assert!((geometry.area_in2 - 7.0686).abs() < 0.001);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section::{annulus_area, annulus_moment_of_inertia, inner_diameter};
use crate::errors::{CalcError, CalcResult};

/// Geometric and material description of one drill pipe body.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "5\" 19.50 lb/ft E-75",
///   "outer_diameter_in": 5.0,
///   "wall_thickness_in": 0.362,
///   "yield_strength_psi": 75000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeSpecification {
    /// Human-readable label (e.g., `5" 19.50 lb/ft E-75`)
    pub label: String,

    /// Outer diameter in inches
    pub outer_diameter_in: f64,

    /// Wall thickness in inches
    pub wall_thickness_in: f64,

    /// Minimum yield strength in psi
    pub yield_strength_psi: f64,
}

impl PipeSpecification {
    pub fn new(label: impl Into<String>, outer_diameter_in: f64, wall_thickness_in: f64, yield_strength_psi: f64) -> Self {
        Self {
            label: label.into(),
            outer_diameter_in,
            wall_thickness_in,
            yield_strength_psi,
        }
    }

    /// Validate dimensions and yield strength.
    ///
    /// Geometry problems are reported as [`CalcError::InvalidGeometry`];
    /// a bad yield strength is [`CalcError::InvalidInput`].
    pub fn validate(&self) -> CalcResult<()> {
        validate_dimensions(self.outer_diameter_in, self.wall_thickness_in)?;
        if !self.yield_strength_psi.is_finite() || self.yield_strength_psi <= 0.0 {
            return Err(CalcError::invalid_input(
                "yield_strength_psi",
                self.yield_strength_psi.to_string(),
                "Yield strength must be positive",
            ));
        }
        Ok(())
    }
}

fn validate_dimensions(outer: f64, wall: f64) -> CalcResult<()> {
    if !outer.is_finite() || outer <= 0.0 {
        return Err(CalcError::invalid_geometry(outer, wall, "Outer diameter must be positive"));
    }
    if !wall.is_finite() || wall <= 0.0 {
        return Err(CalcError::invalid_geometry(outer, wall, "Wall thickness must be positive"));
    }
    if wall >= outer / 2.0 {
        return Err(CalcError::invalid_geometry(
            outer,
            wall,
            "Wall thickness must be less than half the outer diameter",
        ));
    }
    Ok(())
}

/// Section properties of the pipe body. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryProperties {
    /// Inner diameter (in)
    pub inner_diameter_in: f64,

    /// Steel cross-sectional area (in²)
    pub area_in2: f64,

    /// Polar moment of inertia (in⁴)
    pub moment_of_inertia_in4: f64,
}

impl GeometryProperties {
    /// Derive properties from outer diameter and wall thickness.
    ///
    /// Fails with [`CalcError::InvalidGeometry`] when the wall is not
    /// strictly less than half the OD, so callers never see a negative ID.
    pub fn from_dimensions(outer_diameter_in: f64, wall_thickness_in: f64) -> CalcResult<Self> {
        validate_dimensions(outer_diameter_in, wall_thickness_in)?;

        let inner = inner_diameter(outer_diameter_in, wall_thickness_in);
        Ok(Self {
            inner_diameter_in: inner,
            area_in2: annulus_area(outer_diameter_in, inner),
            moment_of_inertia_in4: annulus_moment_of_inertia(outer_diameter_in, inner),
        })
    }

    /// Derive properties from a pipe specification.
    pub fn from_spec(spec: &PipeSpecification) -> CalcResult<Self> {
        Self::from_dimensions(spec.outer_diameter_in, spec.wall_thickness_in)
    }
}
