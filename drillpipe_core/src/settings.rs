//! # Analysis Settings
//!
//! Defaults applied when a front end builds an [`EnvelopeRequest`]: display
//! units, safety margin, sample count and the pipe preselected in the
//! catalog. Settings are plain serde data; loading them from disk is the
//! front end's job.
//!
//! Every field has a default, so a settings file only needs the values it
//! wants to change.
//!
//! ## Example
//!
//! ```rust
//! use drillpipe_core::settings::AnalysisSettings;
//!
//! let settings: AnalysisSettings = serde_json::from_str(r#"{ "safety_margin": 15 }"#).unwrap();
//! assert_eq!(settings.safety_margin.percent(), 15);
//! assert_eq!(settings.sample_count, 200);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::envelope::{EnvelopeRequest, DEFAULT_SAMPLE_COUNT};
use crate::calculations::safety::SafetyMargin;
use crate::catalog::{self, NominalSize, PipeGrade};
use crate::errors::CalcResult;
use crate::geometry::PipeSpecification;
use crate::units::UnitPreference;

/// Global analysis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Display units for new analyses
    pub units: UnitPreference,

    /// Safety margin for new analyses
    pub safety_margin: SafetyMargin,

    /// Torque samples per envelope
    pub sample_count: usize,

    /// Pipe selected when none is given
    pub default_pipe: DefaultPipe,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            units: UnitPreference::default(),
            safety_margin: SafetyMargin::NONE,
            sample_count: DEFAULT_SAMPLE_COUNT,
            default_pipe: DefaultPipe::default(),
        }
    }
}

impl AnalysisSettings {
    /// Build an envelope request for `spec` using these defaults
    pub fn request_for(&self, spec: PipeSpecification) -> EnvelopeRequest {
        EnvelopeRequest {
            spec,
            units: self.units,
            safety_margin: self.safety_margin,
            sample_count: self.sample_count,
        }
    }
}

/// Catalog key of the default pipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultPipe {
    pub size: NominalSize,
    pub weight_lb_ft: f64,
    pub grade: PipeGrade,
}

impl Default for DefaultPipe {
    fn default() -> Self {
        DefaultPipe {
            size: NominalSize::D5,
            weight_lb_ft: 19.5,
            grade: PipeGrade::E75,
        }
    }
}

impl DefaultPipe {
    /// Resolve this key through the catalog
    pub fn resolve(&self) -> CalcResult<PipeSpecification> {
        catalog::lookup(self.size, self.weight_lb_ft, self.grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{TensionUnit, TorqueUnit};

    #[test]
    fn test_defaults() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.sample_count, 200);
        assert_eq!(settings.safety_margin, SafetyMargin::NONE);
        assert_eq!(settings.units.torque_unit, TorqueUnit::KipFt);
        assert_eq!(settings.units.tension_unit, TensionUnit::Kips);
    }

    #[test]
    fn test_default_pipe_resolves() {
        let spec = DefaultPipe::default().resolve().unwrap();
        assert_eq!(spec.outer_diameter_in, 5.0);
        assert_eq!(spec.wall_thickness_in, 0.362);
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "units": { "torque_unit": "kNm", "tension_unit": "mT" },
            "default_pipe": { "size": "3-1/2", "weight_lb_ft": 13.3 }
        }"#;
        let settings: AnalysisSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.units.torque_unit, TorqueUnit::KiloNewtonMeter);
        assert_eq!(settings.default_pipe.size, NominalSize::D3_5);
        assert_eq!(settings.default_pipe.grade, PipeGrade::E75);
        assert_eq!(settings.sample_count, 200);
    }

    #[test]
    fn test_out_of_range_margin_rejected() {
        let json = r#"{ "safety_margin": 120 }"#;
        assert!(serde_json::from_str::<AnalysisSettings>(json).is_err());
    }

    #[test]
    fn test_request_for() {
        let mut settings = AnalysisSettings::default();
        settings.sample_count = 50;
        settings.safety_margin = SafetyMargin::new(10).unwrap();
        let request = settings.request_for(DefaultPipe::default().resolve().unwrap());
        assert_eq!(request.sample_count, 50);
        assert_eq!(request.safety_margin.percent(), 10);
    }
}
