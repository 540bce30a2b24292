//! # Safety Margin Derating
//!
//! A safety margin is a whole-number percentage taken off a raw engineering
//! limit: `derated = (1 - percent/100) * raw`.
//!
//! ## Example
//!
//! ```rust
//! use drillpipe_core::calculations::safety::SafetyMargin;
//!
//! let margin = SafetyMargin::new(20).unwrap();
//! assert_eq!(margin.derate(500.0), 400.0);
//! assert!(SafetyMargin::new(95).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Safety margin percentage, 0..=90.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SafetyMargin(u8);

impl SafetyMargin {
    /// Largest accepted margin in percent
    pub const MAX_PERCENT: u8 = 90;

    /// No derating
    pub const NONE: SafetyMargin = SafetyMargin(0);

    pub fn new(percent: u8) -> CalcResult<Self> {
        if percent > Self::MAX_PERCENT {
            return Err(CalcError::invalid_input(
                "safety_margin",
                percent.to_string(),
                format!("Safety margin must be between 0 and {}%", Self::MAX_PERCENT),
            ));
        }
        Ok(Self(percent))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Fraction of the raw limit that remains after derating
    pub fn retained_fraction(&self) -> f64 {
        1.0 - f64::from(self.0) / 100.0
    }

    /// Apply the margin to a raw limit
    pub fn derate(&self, raw: f64) -> f64 {
        self.retained_fraction() * raw
    }
}

impl TryFrom<u8> for SafetyMargin {
    type Error = CalcError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        SafetyMargin::new(percent)
    }
}

impl From<SafetyMargin> for u8 {
    fn from(margin: SafetyMargin) -> Self {
        margin.0
    }
}

impl std::fmt::Display for SafetyMargin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
