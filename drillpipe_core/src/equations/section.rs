//! # Annular Cross-Section Formulas
//!
//! Geometric properties of a hollow circular (tube) section, which is the
//! body of a drill pipe joint between tool joints.
//!
//! ## Notation
//!
//! - `D` = Outer diameter (OD)
//! - `d` = Inner diameter (ID)
//! - `t` = Wall thickness
//! - `A` = Cross-sectional area of steel
//! - `J` = Polar second moment of area about the pipe axis
//!
//! ## References
//!
//! - API RP 7G: Recommended Practice for Drill Stem Design and Operating Limits
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1

// =============================================================================
// ANNULUS (TUBE) SECTION PROPERTIES
// =============================================================================

/// Calculate inner diameter from outer diameter and wall thickness
///
/// ```text
///      ┌───────────────┐
///      │ t ┌───────┐ t │
///      │   │   d   │   │   D = d + 2t
///      │   └───────┘   │
///      └───────────────┘
///              D
/// ```
///
/// # Formula
/// d = D − 2t
///
/// The result is zero or negative when t ≥ D/2. This function does not
/// guard against that; use [`crate::geometry::GeometryProperties::from_spec`]
/// for a validated computation.
///
/// # Example
/// ```rust
/// use drillpipe_core::equations::section::inner_diameter;
///
/// // 5" drill pipe with 0.5" wall
/// assert_eq!(inner_diameter(5.0, 0.5), 4.0);
/// ```
#[inline]
pub fn inner_diameter(outer: f64, wall: f64) -> f64 {
    outer - 2.0 * wall
}

/// Calculate steel area of an annular section
///
/// # Formula
/// A = (π/4)(D² − d²)
///
/// # Arguments
/// * `outer` - Outer diameter
/// * `inner` - Inner diameter
///
/// # Returns
/// Cross-sectional area in square units of input (e.g., in²)
///
/// # Example
/// ```rust
/// use drillpipe_core::equations::section::annulus_area;
///
/// // 5" OD, 4" ID: A = (π/4)(25 − 16) = 7.0686 in²
/// let a = annulus_area(5.0, 4.0);
/// assert!((a - 7.0686).abs() < 0.001);
/// ```
#[inline]
pub fn annulus_area(outer: f64, inner: f64) -> f64 {
    (std::f64::consts::PI / 4.0) * (outer.powi(2) - inner.powi(2))
}

/// Calculate polar second moment of area of an annular section
///
/// This is the torsional "moment of inertia" used in the shear stress
/// relation τ = T·r / J.
///
/// # Formula
/// J = π(D⁴ − d⁴) / 32
///
/// # Arguments
/// * `outer` - Outer diameter
/// * `inner` - Inner diameter
///
/// # Returns
/// Moment of inertia in fourth power of input units (e.g., in⁴)
///
/// # Example
/// ```rust
/// use drillpipe_core::equations::section::annulus_moment_of_inertia;
///
/// // 5" OD, 4" ID: J = π(625 − 256)/32 = 36.23 in⁴
/// let j = annulus_moment_of_inertia(5.0, 4.0);
/// assert!((j - 36.23).abs() < 0.01);
/// ```
///
/// # Reference
/// - Roark's Formulas, Table 10.1, case 10
#[inline]
pub fn annulus_moment_of_inertia(outer: f64, inner: f64) -> f64 {
    std::f64::consts::PI * (outer.powi(4) - inner.powi(4)) / 32.0
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.01;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 0.001
    }

    #[test]
    fn test_inner_diameter() {
        assert_eq!(inner_diameter(5.0, 0.5), 4.0);
        // 5" 19.50 lb/ft: 0.362" wall
        assert!(approx_eq(inner_diameter(5.0, 0.362), 4.276));
    }

    #[test]
    fn test_inner_diameter_unguarded_at_half_od() {
        assert_eq!(inner_diameter(5.0, 2.5), 0.0);
        assert!(inner_diameter(5.0, 3.0) < 0.0);
    }

    #[test]
    fn test_annulus_area() {
        let a = annulus_area(5.0, 4.0);
        assert!(approx_eq(a, 7.0686), "A = {} (expected 7.0686)", a);
    }

    #[test]
    fn test_annulus_moment_of_inertia() {
        let j = annulus_moment_of_inertia(5.0, 4.0);
        assert!(approx_eq(j, 36.223), "J = {} (expected 36.223)", j);
    }

    #[test]
    fn test_solid_bar_limit() {
        // With d = 0 the annulus degenerates to a solid bar: J = πD⁴/32
        let j = annulus_moment_of_inertia(2.0, 0.0);
        let expected = std::f64::consts::PI * 16.0 / 32.0;
        assert!(approx_eq(j, expected), "J = {} (expected {})", j, expected);
    }

    #[test]
    fn test_thin_wall_approximation() {
        // Thin tube: A ≈ π·D_mean·t
        let (outer, wall) = (6.625, 0.05);
        let a = annulus_area(outer, inner_diameter(outer, wall));
        let approx = std::f64::consts::PI * (outer - wall) * wall;
        assert!(approx_eq(a, approx), "A = {}, πDt = {}", a, approx);
    }
}
