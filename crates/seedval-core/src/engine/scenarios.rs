use serde::{Deserialize, Serialize};

pub const CONSERVATIVE_BAND: f64 = 0.8;
pub const OPTIMISTIC_BAND: f64 = 1.2;

/// Fixed bands around the base valuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenarios {
    pub conservative: f64,
    pub base: f64,
    pub optimistic: f64,
}

impl Scenarios {
    pub fn from_base(base: f64) -> Self {
        Self {
            conservative: base * CONSERVATIVE_BAND,
            base,
            optimistic: base * OPTIMISTIC_BAND,
        }
    }
}

/// Percentage of equity a raise of `capital_sought` implies at `base`.
///
/// Returns `None` for a non-positive base, where the ratio has no meaning.
pub fn equity_dilution(capital_sought: f64, base: f64) -> Option<f64> {
    if base > 0.0 {
        Some(capital_sought / base * 100.0)
    } else {
        None
    }
}
