//! # Combined Torsion-Tension Yield Formulas
//!
//! Operating limits for a tube loaded by axial tension and torque at the
//! same time. Axial stress and torsional shear stress combine in quadrature
//! against a single yield strength:
//!
//! ```text
//!     σ_axial² + (T·D / (0.09167·J))² ≤ Ym²
//! ```
//!
//! Solving for the axial force gives the tension limit at a given torque.
//!
//! ## Units
//!
//! - `D`: outer diameter, in
//! - `J`: polar moment of inertia, in⁴
//! - `Ym`: minimum yield strength, psi
//! - `A`: steel area, in²
//! - `T`: torque, ft-lb
//! - `P`: tension, lbf
//!
//! ## References
//!
//! - API RP 7G, Section 4: torsional and tensile capacity of drill pipe

/// Torsional shear geometry factor used by the torque-tension formulas.
///
/// Relates outer-fiber shear stress to torque for a tube with torque in ft-lb,
/// dimensions in inches and stress in psi: `T = 0.09167 · J · Ym / D`.
/// This is a fixed constant of the model, not a tuning parameter.
pub const TORSIONAL_SHEAR_FACTOR: f64 = 0.09167;

/// Calculate the torque at which shear alone reaches yield
///
/// # Formula
/// T_max = Ym · 0.09167 · J / D
///
/// # Arguments
/// * `yield_strength` - Minimum yield strength (psi)
/// * `moment_of_inertia` - Polar moment of inertia (in⁴)
/// * `outer_diameter` - Outer diameter (in)
///
/// # Returns
/// Torsional yield torque in ft-lb
///
/// # Example
/// ```rust
/// use drillpipe_core::equations::combined_stress::torsional_yield_torque;
///
/// // 5" OD / 4" ID, E-75
/// let t_max = torsional_yield_torque(75_000.0, 36.2265, 5.0);
/// assert!((t_max - 49_812.0).abs() < 5.0);
/// ```
#[inline]
pub fn torsional_yield_torque(yield_strength: f64, moment_of_inertia: f64, outer_diameter: f64) -> f64 {
    (yield_strength * TORSIONAL_SHEAR_FACTOR * moment_of_inertia) / outer_diameter
}

/// Calculate maximum axial tension at an applied torque
///
/// # Formula
/// P = A · √max(Ym² − (T·D / (0.09167·J))², 0)
///
/// The discriminant is clamped at zero: once torque reaches the torsional
/// yield limit there is no tension capacity left, and torque beyond it still
/// reports zero rather than an imaginary result. The shear term is squared,
/// so the sign of the torque does not matter.
///
/// # Arguments
/// * `area` - Steel area (in²)
/// * `yield_strength` - Minimum yield strength (psi)
/// * `torque` - Applied torque (ft-lb)
/// * `outer_diameter` - Outer diameter (in)
/// * `moment_of_inertia` - Polar moment of inertia (in⁴)
///
/// # Returns
/// Maximum tension in lbf
///
/// # Example
/// ```rust
/// use drillpipe_core::equations::combined_stress::max_tension;
///
/// // Pure tension: P = A · Ym
/// let p = max_tension(7.0686, 75_000.0, 0.0, 5.0, 36.2265);
/// assert!((p - 530_145.0).abs() < 1.0);
/// ```
pub fn max_tension(area: f64, yield_strength: f64, torque: f64, outer_diameter: f64, moment_of_inertia: f64) -> f64 {
    let denominator = TORSIONAL_SHEAR_FACTOR * moment_of_inertia;
    let shear_term = (torque * outer_diameter / denominator).powi(2);
    let under_root = (yield_strength.powi(2) - shear_term).max(0.0);
    area * under_root.sqrt()
}

// =============================================================================
// UNIT TESTS
// =============================================================================
