//! Standard Drill Pipe Sizes (API Spec 5DP)
//!
//! Nominal sizes with their outer diameters, and the nominal weights
//! available for each size. A nominal weight (lb/ft) selects the wall
//! thickness for a given OD.
//!
//! | Size   | OD (in) | Weights (lb/ft)        |
//! |--------|---------|------------------------|
//! | 2-3/8  | 2.375   | 4.85, 6.65             |
//! | 2-7/8  | 2.875   | 6.85, 10.40            |
//! | 3-1/2  | 3.500   | 9.50, 13.30, 15.50     |
//! | 4      | 4.000   | 11.85, 14.00, 15.70    |
//! | 4-1/2  | 4.500   | 13.75, 16.60, 20.00    |
//! | 5      | 5.000   | 16.25, 19.50, 25.60    |
//! | 5-1/2  | 5.500   | 21.90, 24.70           |
//! | 6-5/8  | 6.625   | 25.20, 27.70           |

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Tolerance when matching a requested nominal weight against the table (lb/ft)
const WEIGHT_MATCH_TOLERANCE: f64 = 0.005;

/// Nominal drill pipe size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NominalSize {
    /// 2-3/8" (2.375" OD)
    #[serde(rename = "2-3/8")]
    D2_375,
    /// 2-7/8" (2.875" OD)
    #[serde(rename = "2-7/8")]
    D2_875,
    /// 3-1/2" (3.5" OD)
    #[serde(rename = "3-1/2")]
    D3_5,
    /// 4" (4.0" OD)
    #[serde(rename = "4")]
    D4,
    /// 4-1/2" (4.5" OD)
    #[serde(rename = "4-1/2")]
    D4_5,
    /// 5" (5.0" OD)
    #[default]
    #[serde(rename = "5")]
    D5,
    /// 5-1/2" (5.5" OD)
    #[serde(rename = "5-1/2")]
    D5_5,
    /// 6-5/8" (6.625" OD)
    #[serde(rename = "6-5/8")]
    D6_625,
}

/// One nominal weight option for a size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NominalWeight {
    /// Nominal weight designation (lb/ft)
    pub weight_lb_ft: f64,
    /// Body wall thickness (in)
    pub wall_thickness_in: f64,
}

const fn w(weight_lb_ft: f64, wall_thickness_in: f64) -> NominalWeight {
    NominalWeight {
        weight_lb_ft,
        wall_thickness_in,
    }
}

const WEIGHTS_2_375: [NominalWeight; 2] = [w(4.85, 0.190), w(6.65, 0.280)];
const WEIGHTS_2_875: [NominalWeight; 2] = [w(6.85, 0.217), w(10.40, 0.362)];
const WEIGHTS_3_5: [NominalWeight; 3] = [w(9.50, 0.254), w(13.30, 0.368), w(15.50, 0.449)];
const WEIGHTS_4: [NominalWeight; 3] = [w(11.85, 0.262), w(14.00, 0.330), w(15.70, 0.380)];
const WEIGHTS_4_5: [NominalWeight; 3] = [w(13.75, 0.271), w(16.60, 0.337), w(20.00, 0.430)];
const WEIGHTS_5: [NominalWeight; 3] = [w(16.25, 0.296), w(19.50, 0.362), w(25.60, 0.500)];
const WEIGHTS_5_5: [NominalWeight; 2] = [w(21.90, 0.361), w(24.70, 0.415)];
const WEIGHTS_6_625: [NominalWeight; 2] = [w(25.20, 0.330), w(27.70, 0.362)];

impl NominalSize {
    /// All sizes, smallest first
    pub const ALL: [NominalSize; 8] = [
        NominalSize::D2_375,
        NominalSize::D2_875,
        NominalSize::D3_5,
        NominalSize::D4,
        NominalSize::D4_5,
        NominalSize::D5,
        NominalSize::D5_5,
        NominalSize::D6_625,
    ];

    /// Actual outer diameter in inches
    pub fn outer_diameter_in(&self) -> f64 {
        match self {
            NominalSize::D2_375 => 2.375,
            NominalSize::D2_875 => 2.875,
            NominalSize::D3_5 => 3.5,
            NominalSize::D4 => 4.0,
            NominalSize::D4_5 => 4.5,
            NominalSize::D5 => 5.0,
            NominalSize::D5_5 => 5.5,
            NominalSize::D6_625 => 6.625,
        }
    }

    /// Fractional designation (e.g., "2-3/8")
    pub fn code(&self) -> &'static str {
        match self {
            NominalSize::D2_375 => "2-3/8",
            NominalSize::D2_875 => "2-7/8",
            NominalSize::D3_5 => "3-1/2",
            NominalSize::D4 => "4",
            NominalSize::D4_5 => "4-1/2",
            NominalSize::D5 => "5",
            NominalSize::D5_5 => "5-1/2",
            NominalSize::D6_625 => "6-5/8",
        }
    }

    /// Label as shown in selection lists (e.g., `2-3/8"`)
    pub fn label(&self) -> String {
        format!("{}\"", self.code())
    }

    /// Available nominal weights, lightest first
    pub fn nominal_weights(&self) -> &'static [NominalWeight] {
        match self {
            NominalSize::D2_375 => &WEIGHTS_2_375,
            NominalSize::D2_875 => &WEIGHTS_2_875,
            NominalSize::D3_5 => &WEIGHTS_3_5,
            NominalSize::D4 => &WEIGHTS_4,
            NominalSize::D4_5 => &WEIGHTS_4_5,
            NominalSize::D5 => &WEIGHTS_5,
            NominalSize::D5_5 => &WEIGHTS_5_5,
            NominalSize::D6_625 => &WEIGHTS_6_625,
        }
    }

    /// Find the weight entry matching a nominal weight in lb/ft
    pub fn find_weight(&self, weight_lb_ft: f64) -> Option<NominalWeight> {
        self.nominal_weights()
            .iter()
            .copied()
            .find(|nw| (nw.weight_lb_ft - weight_lb_ft).abs() < WEIGHT_MATCH_TOLERANCE)
    }

    /// Parse from fractional or decimal notation ("5-1/2", "5 1/2", "5.5", "5.5\"")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let cleaned = s.trim().trim_end_matches(['"', '\'']).trim().replace(' ', "-");

        if let Some(size) = NominalSize::ALL.iter().find(|size| size.code() == cleaned) {
            return Ok(*size);
        }

        if let Ok(od) = cleaned.parse::<f64>() {
            if let Some(size) = NominalSize::ALL
                .iter()
                .find(|size| (size.outer_diameter_in() - od).abs() < 1e-6)
            {
                return Ok(*size);
            }
        }

        Err(CalcError::invalid_input(
            "size",
            s,
            "Expected a standard drill pipe size such as 3-1/2, 5 or 5.5",
        ))
    }
}

impl std::fmt::Display for NominalSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
