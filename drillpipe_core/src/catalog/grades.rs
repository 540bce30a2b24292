//! Drill Pipe Steel Grades (API Spec 5DP)
//!
//! Minimum yield strengths for the standard drill pipe body grades.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Drill pipe body grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PipeGrade {
    /// Grade E-75
    #[default]
    #[serde(rename = "E-75")]
    E75,
    /// Grade X-95
    #[serde(rename = "X-95")]
    X95,
    /// Grade G-105
    #[serde(rename = "G-105")]
    G105,
    /// Grade S-135
    #[serde(rename = "S-135")]
    S135,
}

impl PipeGrade {
    /// All grades in order of increasing strength
    pub const ALL: [PipeGrade; 4] = [PipeGrade::E75, PipeGrade::X95, PipeGrade::G105, PipeGrade::S135];

    /// Grade code (e.g., "E-75")
    pub fn code(&self) -> &'static str {
        match self {
            PipeGrade::E75 => "E-75",
            PipeGrade::X95 => "X-95",
            PipeGrade::G105 => "G-105",
            PipeGrade::S135 => "S-135",
        }
    }

    /// Minimum yield strength in psi
    pub fn min_yield_psi(&self) -> f64 {
        match self {
            PipeGrade::E75 => 75_000.0,
            PipeGrade::X95 => 95_000.0,
            PipeGrade::G105 => 105_000.0,
            PipeGrade::S135 => 135_000.0,
        }
    }

    /// Parse from common string representations ("E-75", "e75", "S135", "G")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "E75" | "E" => Ok(PipeGrade::E75),
            "X95" | "X" => Ok(PipeGrade::X95),
            "G105" | "G" => Ok(PipeGrade::G105),
            "S135" | "S" => Ok(PipeGrade::S135),
            _ => Err(CalcError::invalid_input(
                "grade",
                s,
                "Expected one of E-75, X-95, G-105, S-135",
            )),
        }
    }
}

impl std::fmt::Display for PipeGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
