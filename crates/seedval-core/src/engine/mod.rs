//! Valuation engine.
//!
//! A single forward pass over six stages:
//!
//! ```text
//! benchmarks ─▶ AverageMultiples ─▶ MethodologyEstimates ─▶ raw (weighted)
//!                                                              │
//! profile + risk ─▶ AdjustmentLedger ─▶ factor ────────────────┤
//!                                                              ▼
//!                                          base ─▶ Scenarios, dilution, runway
//! ```
//!
//! Everything here is synchronous and allocation-light; the engine holds no
//! state between calls and is safe to share across threads.

mod adjustments;
mod methodology;
mod multiples;
mod scenarios;

pub use adjustments::{AdjustmentLedger, HIGH_GROWTH_THRESHOLD_PERCENT};
pub use methodology::{
    efficiency_ratio, Method, MethodologyEstimates, MRR_MULTIPLE_WEIGHT, REVENUE_MULTIPLE_WEIGHT,
    UNIT_ECONOMICS_MULTIPLIER_CAP, UNIT_ECONOMICS_WEIGHT, USER_BASED_WEIGHT,
};
pub use multiples::AverageMultiples;
pub use scenarios::{equity_dilution, Scenarios, CONSERVATIVE_BAND, OPTIMISTIC_BAND};

use tracing::debug;

use crate::{
    BenchmarkSet, OperatingProfile, RiskProfile, RunwayBand, ValidationError, ValuationResult,
};

/// Engine configuration. The only tunable is the adjustment-factor floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationEngine {
    factor_floor: f64,
}

impl Default for ValuationEngine {
    fn default() -> Self {
        Self { factor_floor: 0.0 }
    }
}

impl ValuationEngine {
    /// Clamp the adjustment factor to at least `floor` (a fraction of the raw
    /// valuation).
    pub fn with_factor_floor(floor: f64) -> Result<Self, ValidationError> {
        if !floor.is_finite() || floor < 0.0 {
            return Err(ValidationError::InvalidFactorFloor { value: floor });
        }
        Ok(Self {
            factor_floor: floor,
        })
    }

    pub const fn factor_floor(&self) -> f64 {
        self.factor_floor
    }

    pub fn compute(
        &self,
        profile: &OperatingProfile,
        benchmarks: &BenchmarkSet,
        risk: &RiskProfile,
    ) -> ValuationResult {
        let multiples = AverageMultiples::from_benchmarks(benchmarks);
        let estimates = MethodologyEstimates::compute(profile, &multiples);
        let raw_valuation = estimates.weighted();

        let ledger = AdjustmentLedger::build(profile, risk);
        let unclamped = ledger.factor();
        let adjustment_factor = unclamped.max(self.factor_floor);
        if adjustment_factor != unclamped {
            debug!(
                unclamped,
                floor = self.factor_floor,
                "adjustment factor clamped to floor"
            );
        }

        let base = raw_valuation * adjustment_factor;
        let scenarios = Scenarios::from_base(base);

        debug!(
            benchmarks = benchmarks.len(),
            raw_valuation,
            adjustment_factor,
            base,
            "valuation computed"
        );

        ValuationResult {
            conservative: scenarios.conservative,
            base: scenarios.base,
            optimistic: scenarios.optimistic,
            methodology_breakdown: estimates.breakdown(),
            adjustments: ledger.into_entries(),
            equity_dilution: equity_dilution(profile.seeking_capital, base),
            runway_status: RunwayBand::classify(profile.runway_months).status(),
            raw_valuation,
            adjustment_factor,
            post_money: base + profile.seeking_capital,
        }
    }
}

/// Run the engine with the default configuration.
pub fn compute_valuation(
    profile: &OperatingProfile,
    benchmarks: &BenchmarkSet,
    risk: &RiskProfile,
) -> ValuationResult {
    ValuationEngine::default().compute(profile, benchmarks, risk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_profile;
    use crate::{ComparableBenchmark, RunwayStatus};

    fn benchmarks() -> BenchmarkSet {
        BenchmarkSet::new(vec![ComparableBenchmark::new(
            "Peer", "USA", "SaaS", 12.0, 10.0, 150.0, "",
        )
        .expect("valid")])
        .expect("non-empty")
    }

    #[test]
    fn reproduces_reference_scenario() {
        let result = compute_valuation(&sample_profile(), &benchmarks(), &RiskProfile::default());

        assert!((result.raw_valuation - 699_000.0).abs() < 1e-6);
        assert!((result.adjustment_factor - 0.75).abs() < 1e-12);
        assert!((result.base - 524_250.0).abs() < 1e-6);
        assert!((result.conservative - 419_400.0).abs() < 1e-6);
        assert!((result.optimistic - 629_100.0).abs() < 1e-6);
        let dilution = result.equity_dilution.expect("positive base");
        assert!((dilution - 95.374_344).abs() < 1e-5, "dilution={dilution}");
        assert_eq!(result.runway_status, RunwayStatus::Warning);
        assert!((result.post_money - 1_024_250.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_invalid_floor() {
        assert!(ValuationEngine::with_factor_floor(-0.1).is_err());
        assert!(ValuationEngine::with_factor_floor(f64::NAN).is_err());
        assert!(ValuationEngine::with_factor_floor(0.5).is_ok());
    }

    #[test]
    fn floor_raises_heavily_discounted_factor() {
        let mut profile = sample_profile();
        profile.runway_months = 1.0;
        profile.mrr_growth = 0.0;
        let risk = RiskProfile::with_team(crate::TeamQuality::Solo);

        let default = ValuationEngine::default().compute(&profile, &benchmarks(), &risk);
        assert!((default.adjustment_factor - 0.45).abs() < 1e-12);

        let floored = ValuationEngine::with_factor_floor(0.6)
            .expect("valid floor")
            .compute(&profile, &benchmarks(), &risk);
        assert_eq!(floored.adjustment_factor, 0.6);
        assert_eq!(floored.base, floored.raw_valuation * 0.6);
        assert_eq!(floored.adjustments, default.adjustments);
    }
}
