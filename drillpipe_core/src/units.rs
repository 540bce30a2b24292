//! # Unit Types
//!
//! Type-safe wrappers for the quantities in a torque-tension analysis, plus
//! the display-unit selection that the envelope sweep works in.
//!
//! ## Base Units
//!
//! All engine math runs in US oilfield units:
//! - Length: inches (in)
//! - Stress: pounds per square inch (psi)
//! - Torque: foot-pounds (ft-lb)
//! - Tension: pounds-force (lbf)
//!
//! ## Display Units
//!
//! | Quantity | Display unit | From base |
//! |----------|--------------|-----------|
//! | Torque   | kft-lb       | ÷ 1000    |
//! | Torque   | kNm          | ÷ 737.56  |
//! | Tension  | klb          | ÷ 1000    |
//! | Tension  | mT           | × 0.00045359 |
//!
//! Torque converts both ways because the sweep samples in display units and
//! evaluates in base units. Tension only ever leaves the engine, so it only
//! converts base to display.
//!
//! ## Example
//!
//! ```rust
//! use drillpipe_core::units::{FtLb, KipFt, TorqueUnit};
//!
//! let torque = FtLb(25_000.0);
//! let display: KipFt = torque.into();
//! assert_eq!(display.0, 25.0);
//!
//! let back = TorqueUnit::KiloNewtonMeter.to_base(TorqueUnit::KiloNewtonMeter.to_display(torque));
//! assert!((back.0 - torque.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::errors::{CalcError, CalcResult};

/// Foot-pounds per kip-foot (1 kft-lb = 1000 ft-lb)
pub const FTLB_PER_KIP_FT: f64 = 1000.0;

/// Foot-pounds per kilonewton-meter (1 kNm ≈ 737.56 ft-lb)
pub const FTLB_PER_KNM: f64 = 737.56;

/// Pounds-force per kip (1 klb = 1000 lbf)
pub const LBF_PER_KIP: f64 = 1000.0;

/// Metric tons-force per pound-force (1 lbf ≈ 0.00045359 tonne-force)
pub const METRIC_TON_PER_LBF: f64 = 0.00045359;

// ============================================================================
// Torque Units
// ============================================================================

/// Torque in foot-pounds (base unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FtLb(pub f64);

/// Torque in kip-feet (kft-lb)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KipFt(pub f64);

/// Torque in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

impl From<FtLb> for KipFt {
    fn from(ftlb: FtLb) -> Self {
        KipFt(ftlb.0 / FTLB_PER_KIP_FT)
    }
}

impl From<KipFt> for FtLb {
    fn from(kipft: KipFt) -> Self {
        FtLb(kipft.0 * FTLB_PER_KIP_FT)
    }
}

impl From<FtLb> for KnM {
    fn from(ftlb: FtLb) -> Self {
        KnM(ftlb.0 / FTLB_PER_KNM)
    }
}

impl From<KnM> for FtLb {
    fn from(knm: KnM) -> Self {
        FtLb(knm.0 * FTLB_PER_KNM)
    }
}

// ============================================================================
// Tension Units (output only)
// ============================================================================

/// Force in pounds (base unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Force in kips (1 kip = 1000 pounds)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kips(pub f64);

/// Force in metric tons-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricTons(pub f64);

impl From<Pounds> for Kips {
    fn from(lb: Pounds) -> Self {
        Kips(lb.0 / LBF_PER_KIP)
    }
}

impl From<Pounds> for MetricTons {
    fn from(lb: Pounds) -> Self {
        MetricTons(lb.0 * METRIC_TON_PER_LBF)
    }
}

// ============================================================================
// Display Unit Selection
// ============================================================================

/// Torque unit used for the envelope's torque axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TorqueUnit {
    /// Thousands of foot-pounds
    #[default]
    #[serde(rename = "kft-lb")]
    KipFt,
    /// Kilonewton-meters
    #[serde(rename = "kNm")]
    KiloNewtonMeter,
}

impl TorqueUnit {
    pub const ALL: [TorqueUnit; 2] = [TorqueUnit::KipFt, TorqueUnit::KiloNewtonMeter];

    /// Display symbol (e.g., "kft-lb")
    pub fn symbol(&self) -> &'static str {
        match self {
            TorqueUnit::KipFt => "kft-lb",
            TorqueUnit::KiloNewtonMeter => "kNm",
        }
    }

    /// Convert a base-unit torque into this display unit
    pub fn to_display(self, torque: FtLb) -> f64 {
        match self {
            TorqueUnit::KipFt => KipFt::from(torque).0,
            TorqueUnit::KiloNewtonMeter => KnM::from(torque).0,
        }
    }

    /// Convert a torque expressed in this display unit back to foot-pounds
    pub fn to_base(self, value: f64) -> FtLb {
        match self {
            TorqueUnit::KipFt => KipFt(value).into(),
            TorqueUnit::KiloNewtonMeter => KnM(value).into(),
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '_', '.', '·'], "-").as_str() {
            "kft-lb" | "kftlb" | "kft-lbs" | "kip-ft" | "kipft" | "k-ft" => Ok(TorqueUnit::KipFt),
            "knm" | "kn-m" | "kilonewton-meter" | "kilonewton-metre" => Ok(TorqueUnit::KiloNewtonMeter),
            _ => Err(CalcError::invalid_input(
                "torque_unit",
                s,
                "Expected 'kft-lb' or 'kNm'",
            )),
        }
    }
}

impl std::fmt::Display for TorqueUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Tension unit used for the envelope's tension axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TensionUnit {
    /// Thousands of pounds-force
    #[default]
    #[serde(rename = "klb")]
    Kips,
    /// Metric tons-force
    #[serde(rename = "mT")]
    MetricTon,
}

impl TensionUnit {
    pub const ALL: [TensionUnit; 2] = [TensionUnit::Kips, TensionUnit::MetricTon];

    /// Display symbol (e.g., "klb")
    pub fn symbol(&self) -> &'static str {
        match self {
            TensionUnit::Kips => "klb",
            TensionUnit::MetricTon => "mT",
        }
    }

    /// Convert a base-unit tension into this display unit
    pub fn to_display(self, tension: Pounds) -> f64 {
        match self {
            TensionUnit::Kips => Kips::from(tension).0,
            TensionUnit::MetricTon => MetricTons::from(tension).0,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '_', '.'], "-").as_str() {
            "klb" | "klbs" | "kip" | "kips" => Ok(TensionUnit::Kips),
            "mt" | "t" | "tonne" | "tonnes" | "metric-ton" | "metric-tons" | "tf" => Ok(TensionUnit::MetricTon),
            _ => Err(CalcError::invalid_input(
                "tension_unit",
                s,
                "Expected 'klb' or 'mT'",
            )),
        }
    }
}

impl std::fmt::Display for TensionUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Presentation units for an envelope. Base-unit math is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitPreference {
    pub torque_unit: TorqueUnit,
    pub tension_unit: TensionUnit,
}

impl UnitPreference {
    pub fn new(torque_unit: TorqueUnit, tension_unit: TensionUnit) -> Self {
        Self {
            torque_unit,
            tension_unit,
        }
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(FtLb);
impl_arithmetic!(KipFt);
impl_arithmetic!(KnM);
impl_arithmetic!(Pounds);
impl_arithmetic!(Kips);
impl_arithmetic!(MetricTons);
