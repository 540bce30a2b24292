//! # Torque-Tension Envelope
//!
//! Sweeps applied torque from zero to the torsional yield limit and reports
//! the maximum tension (raw and derated by the safety margin) at each step.
//!
//! The sweep runs in the caller's display units: the torque axis is split
//! into evenly spaced samples in the selected torque unit, each sample is
//! converted back to ft-lb for the stress formula, and the resulting tension
//! is converted from lbf to the selected tension unit.
//!
//! Every call recomputes the whole curve. The result is fully materialized
//! before it is returned; there is no partial or incremental output.
//!
//! ## Example
//!
//! ```rust
//! use drillpipe_core::calculations::envelope::{calculate, EnvelopeRequest};
//! use drillpipe_core::calculations::safety::SafetyMargin;
//! use drillpipe_core::geometry::PipeSpecification;
//! use drillpipe_core::units::UnitPreference;
//!
//! let request = EnvelopeRequest {
//!     spec: PipeSpecification::new("5\" test pipe", 5.0, 0.5, 75_000.0),
//!     units: UnitPreference::default(),
//!     safety_margin: SafetyMargin::new(20).unwrap(),
//!     sample_count: 200,
//! };
//!
//! let result = calculate(&request).unwrap();
//! assert_eq!(result.points.len(), 200);
//!
//! // Pure tension at zero torque: 7.0686 in² × 75 ksi ≈ 530 klb
//! assert!((result.points[0].max_tension - 530.145).abs() < 0.01);
//! assert!((result.points[0].derated_tension - 424.116).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::safety::SafetyMargin;
use crate::equations::combined_stress::{max_tension, torsional_yield_torque};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{GeometryProperties, PipeSpecification};
use crate::units::{FtLb, Pounds, UnitPreference};

/// Number of torque samples used when the caller does not choose one
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// Fewest samples that still describe a curve (both end points)
pub const MIN_SAMPLE_COUNT: usize = 2;

/// Input parameters for one envelope calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "spec": {
///     "label": "5\" 19.50 lb/ft E-75",
///     "outer_diameter_in": 5.0,
///     "wall_thickness_in": 0.362,
///     "yield_strength_psi": 75000.0
///   },
///   "units": { "torque_unit": "kft-lb", "tension_unit": "klb" },
///   "safety_margin": 20,
///   "sample_count": 200
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeRequest {
    /// Pipe to analyze
    pub spec: PipeSpecification,

    /// Display units for the torque and tension axes
    #[serde(default)]
    pub units: UnitPreference,

    /// Safety margin applied to the raw tension limit
    #[serde(default)]
    pub safety_margin: SafetyMargin,

    /// Number of evenly spaced torque samples, at least 2
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

impl EnvelopeRequest {
    /// Request with default units, no safety margin and the default sample count
    pub fn new(spec: PipeSpecification) -> Self {
        Self {
            spec,
            units: UnitPreference::default(),
            safety_margin: SafetyMargin::NONE,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.sample_count < MIN_SAMPLE_COUNT {
            return Err(CalcError::invalid_input(
                "sample_count",
                self.sample_count.to_string(),
                format!("At least {} samples are required", MIN_SAMPLE_COUNT),
            ));
        }
        self.spec.validate()
    }
}

/// One sample of the envelope, in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressEnvelopePoint {
    /// Applied torque
    pub torque: f64,

    /// Maximum tension at this torque
    pub max_tension: f64,

    /// Maximum tension after the safety margin; never above `max_tension`
    pub derated_tension: f64,
}

/// Results from an envelope calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeResult {
    /// Label of the analyzed pipe
    pub label: String,

    /// Display units of every torque/tension value below (except *_ftlb, *_lb)
    pub units: UnitPreference,

    /// Safety margin used for `derated_tension`
    pub safety_margin: SafetyMargin,

    /// Section properties of the pipe body
    pub geometry: GeometryProperties,

    /// Torque at which shear alone reaches yield (ft-lb)
    pub torsional_yield_ftlb: f64,

    /// Torsional yield limit in the display torque unit; the sweep's upper bound
    pub torsional_limit: f64,

    /// Tension capacity at zero torque (lbf)
    pub pure_tension_limit_lb: f64,

    /// Tension capacity at zero torque in the display tension unit
    pub pure_tension_limit: f64,

    /// Ordered samples from zero torque to `torsional_limit`
    pub points: Vec<StressEnvelopePoint>,
}

/// Result of checking one operating point against an envelope
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingPointCheck {
    /// Applied torque (display unit)
    pub torque: f64,

    /// Applied tension (display unit)
    pub tension: f64,

    /// Raw tension limit at the applied torque
    pub max_tension: f64,

    /// Derated tension limit at the applied torque
    pub allowable_tension: f64,

    /// tension / allowable_tension; `None` when nothing is allowable but tension is applied
    pub utilization: Option<f64>,
}

impl OperatingPointCheck {
    /// Check if the point lies inside the derated envelope
    pub fn passes(&self) -> bool {
        self.tension <= self.allowable_tension
    }
}

impl EnvelopeResult {
    /// Raw and derated tension at an arbitrary torque, interpolated linearly
    /// between samples.
    ///
    /// Torque is taken by magnitude. At or beyond the torsional limit both
    /// values are zero, as they are for a NaN torque.
    ///
    /// Returns `(max_tension, derated_tension)` in display units.
    pub fn tension_at(&self, torque: f64) -> (f64, f64) {
        let torque = torque.abs();
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return (0.0, 0.0),
        };
        if torque <= first.torque {
            return (first.max_tension, first.derated_tension);
        }
        if torque.is_nan() || torque >= last.torque {
            return (0.0, 0.0);
        }

        // First sample strictly above the requested torque; always in 1..len
        let upper = self.points.partition_point(|p| p.torque <= torque);
        let (a, b) = (&self.points[upper - 1], &self.points[upper]);
        let t = (torque - a.torque) / (b.torque - a.torque);
        (
            a.max_tension + t * (b.max_tension - a.max_tension),
            a.derated_tension + t * (b.derated_tension - a.derated_tension),
        )
    }

    /// Check an operating point (both values in display units) against the
    /// derated envelope.
    pub fn check_operating_point(&self, torque: f64, tension: f64) -> OperatingPointCheck {
        let (max_tension, allowable_tension) = self.tension_at(torque);
        let utilization = if allowable_tension > 0.0 {
            Some(tension / allowable_tension)
        } else if tension <= 0.0 {
            Some(0.0)
        } else {
            None
        };

        OperatingPointCheck {
            torque,
            tension,
            max_tension,
            allowable_tension,
            utilization,
        }
    }
}

/// Calculate the torque-tension envelope.
///
/// # Arguments
///
/// * `request` - Pipe, display units, safety margin and sample count
///
/// # Returns
///
/// * `Ok(EnvelopeResult)` - Geometry, limits and the sampled curve
/// * `Err(CalcError)` - If the pipe geometry or any request field is invalid
pub fn calculate(request: &EnvelopeRequest) -> CalcResult<EnvelopeResult> {
    if let Err(err) = request.validate() {
        warn!(label = %request.spec.label, error = %err, "envelope request rejected");
        return Err(err);
    }

    let spec = &request.spec;
    let units = request.units;
    let geometry = GeometryProperties::from_spec(spec)?;

    let yield_psi = spec.yield_strength_psi;
    let outer = spec.outer_diameter_in;
    let inertia = geometry.moment_of_inertia_in4;

    let torsional_yield_ftlb = torsional_yield_torque(yield_psi, inertia, outer);
    let torsional_limit = units.torque_unit.to_display(FtLb(torsional_yield_ftlb));
    let pure_tension_limit_lb = max_tension(geometry.area_in2, yield_psi, 0.0, outer, inertia);

    debug!(
        label = %spec.label,
        area_in2 = geometry.area_in2,
        inertia_in4 = inertia,
        torsional_yield_ftlb,
        samples = request.sample_count,
        "computing torque-tension envelope"
    );

    let points = linspace(0.0, torsional_limit, request.sample_count)
        .map(|torque| {
            let torque_ftlb = units.torque_unit.to_base(torque);
            let tension_lb = max_tension(geometry.area_in2, yield_psi, torque_ftlb.0, outer, inertia);
            let raw = units.tension_unit.to_display(Pounds(tension_lb));
            StressEnvelopePoint {
                torque,
                max_tension: raw,
                derated_tension: request.safety_margin.derate(raw),
            }
        })
        .collect();

    Ok(EnvelopeResult {
        label: spec.label.clone(),
        units,
        safety_margin: request.safety_margin,
        geometry,
        torsional_yield_ftlb,
        torsional_limit,
        pure_tension_limit_lb,
        pure_tension_limit: units.tension_unit.to_display(Pounds(pure_tension_limit_lb)),
        points,
    })
}

/// `count` evenly spaced values over `[start, stop]`, both ends included.
/// The last value is exactly `stop`.
fn linspace(start: f64, stop: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 { (stop - start) / (count - 1) as f64 } else { 0.0 };
    (0..count).map(move |i| if i + 1 == count { stop } else { start + step * i as f64 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, NominalSize, PipeGrade};
    use crate::units::{TensionUnit, TorqueUnit};

    fn test_request() -> EnvelopeRequest {
        EnvelopeRequest::new(PipeSpecification::new("5\" x 0.5\" E-75", 5.0, 0.5, 75_000.0))
    }

    #[test]
    fn test_linspace() {
        let values: Vec<f64> = linspace(0.0, 1.0, 5).collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let values: Vec<f64> = linspace(0.0, 49.8, 2).collect();
        assert_eq!(values, vec![0.0, 49.8]);
    }

    #[test]
    fn test_envelope_end_points() {
        let result = calculate(&test_request()).unwrap();
        assert_eq!(result.points.len(), DEFAULT_SAMPLE_COUNT);

        let first = result.points.first().unwrap();
        let last = result.points.last().unwrap();

        assert_eq!(first.torque, 0.0);
        assert!((first.max_tension - 530.145).abs() < 0.01, "P0 = {}", first.max_tension);
        assert_eq!(last.torque, result.torsional_limit);
        assert!(last.max_tension / first.max_tension < 1e-6, "P_end = {}", last.max_tension);
    }

    #[test]
    fn test_envelope_monotonic_non_increasing() {
        let result = calculate(&test_request()).unwrap();
        for pair in result.points.windows(2) {
            assert!(pair[1].torque > pair[0].torque);
            assert!(pair[1].max_tension <= pair[0].max_tension);
            assert!(pair[1].derated_tension <= pair[0].derated_tension);
        }
    }

    #[test]
    fn test_derated_never_exceeds_raw() {
        let mut request = test_request();
        request.safety_margin = SafetyMargin::new(35).unwrap();
        let result = calculate(&request).unwrap();
        for p in &result.points {
            assert!(p.derated_tension <= p.max_tension);
            assert!((p.derated_tension - 0.65 * p.max_tension).abs() < 1e-9);
        }
    }

    #[test]
    fn test_torsional_limit_in_display_units() {
        let mut request = test_request();
        let kft = calculate(&request).unwrap();
        assert!((kft.torsional_limit - kft.torsional_yield_ftlb / 1000.0).abs() < 1e-12);
        assert!((kft.torsional_yield_ftlb - 49_812.0).abs() < 5.0);

        request.units.torque_unit = TorqueUnit::KiloNewtonMeter;
        let knm = calculate(&request).unwrap();
        assert!((knm.torsional_limit - knm.torsional_yield_ftlb / 737.56).abs() < 1e-12);
    }

    #[test]
    fn test_display_units_do_not_change_physics() {
        let mut request = test_request();
        let klb = calculate(&request).unwrap();

        request.units = UnitPreference::new(TorqueUnit::KiloNewtonMeter, TensionUnit::MetricTon);
        let metric = calculate(&request).unwrap();

        assert_eq!(klb.geometry, metric.geometry);
        assert_eq!(klb.torsional_yield_ftlb, metric.torsional_yield_ftlb);

        // Samples land on the same base torques up to rounding
        let tolerance_lb = 1e-6 * klb.pure_tension_limit_lb;
        for (a, b) in klb.points.iter().zip(&metric.points) {
            let a_lb = a.max_tension * 1000.0;
            let b_lb = b.max_tension / 0.00045359;
            assert!((a_lb - b_lb).abs() < tolerance_lb, "{} vs {}", a_lb, b_lb);
        }
    }

    #[test]
    fn test_minimum_sample_count() {
        let mut request = test_request();
        request.sample_count = 2;
        let result = calculate(&request).unwrap();
        assert_eq!(result.points.len(), 2);

        request.sample_count = 1;
        let err = calculate(&request).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_invalid_geometry_rejected_before_stress() {
        let mut request = test_request();
        request.spec.wall_thickness_in = 2.5;
        let err = calculate(&request).unwrap_err();
        assert!(matches!(err, CalcError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_tension_at_interpolates() {
        let result = calculate(&test_request()).unwrap();
        let (raw0, _) = result.tension_at(0.0);
        assert_eq!(raw0, result.points[0].max_tension);

        // Exactly on a sample
        let p = result.points[50];
        let (raw, derated) = result.tension_at(p.torque);
        assert!((raw - p.max_tension).abs() < 1e-9);
        assert!((derated - p.derated_tension).abs() < 1e-9);

        // Between two samples
        let (a, b) = (result.points[10], result.points[11]);
        let (raw_mid, _) = result.tension_at(0.5 * (a.torque + b.torque));
        assert!(raw_mid <= a.max_tension && raw_mid >= b.max_tension);

        // Beyond the limit
        assert_eq!(result.tension_at(result.torsional_limit * 2.0), (0.0, 0.0));
    }

    #[test]
    fn test_operating_point_check() {
        let mut request = test_request();
        request.safety_margin = SafetyMargin::new(20).unwrap();
        let result = calculate(&request).unwrap();

        let ok = result.check_operating_point(10.0, 300.0);
        assert!(ok.passes());
        assert!(ok.utilization.unwrap() < 1.0);

        let over = result.check_operating_point(10.0, 500.0);
        assert!(!over.passes());
        assert!(over.utilization.unwrap() > 1.0);

        let past_yield = result.check_operating_point(result.torsional_limit * 1.1, 1.0);
        assert!(!past_yield.passes());
        assert_eq!(past_yield.utilization, None);
    }

    #[test]
    fn test_non_finite_torque() {
        let result = calculate(&test_request()).unwrap();
        assert_eq!(result.tension_at(f64::NAN), (0.0, 0.0));
        assert_eq!(result.tension_at(f64::INFINITY), (0.0, 0.0));
        assert_eq!(result.tension_at(f64::NEG_INFINITY), (0.0, 0.0));

        let check = result.check_operating_point(f64::NAN, 100.0);
        assert!(!check.passes());
        assert_eq!(check.allowable_tension, 0.0);
        assert_eq!(check.utilization, None);
    }

    #[test]
    fn test_catalog_pipe_envelope() {
        let spec = catalog::lookup(NominalSize::D5, 19.5, PipeGrade::G105).unwrap();
        let result = calculate(&EnvelopeRequest::new(spec)).unwrap();
        // A = (π/4)(5² − 4.276²) = 5.2746 in²; P0 = A × 105 ksi ≈ 553.8 klb
        assert!((result.pure_tension_limit - 553.8).abs() < 0.5, "P0 = {}", result.pure_tension_limit);
        assert_eq!(result.label, "5\" 19.50 lb/ft G-105");
    }

    #[test]
    fn test_request_json_defaults() {
        let json = r#"{
            "spec": {
                "label": "5\" 19.50 lb/ft E-75",
                "outer_diameter_in": 5.0,
                "wall_thickness_in": 0.362,
                "yield_strength_psi": 75000.0
            }
        }"#;
        let request: EnvelopeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.sample_count, DEFAULT_SAMPLE_COUNT);
        assert_eq!(request.safety_margin, SafetyMargin::NONE);
        assert_eq!(request.units, UnitPreference::default());
    }

    #[test]
    fn test_result_serialization() {
        let mut request = test_request();
        request.sample_count = 5;
        let result = calculate(&request).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        let roundtrip: EnvelopeResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.points.len(), roundtrip.points.len());
        assert_eq!(result.label, roundtrip.label);
    }
}
