//! # Domain Models
//!
//! Value objects consumed and produced by the valuation engine.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`OperatingProfile`] | Self-reported company metrics |
//! | [`ComparableBenchmark`] | One peer company's market multiples |
//! | [`BenchmarkSet`] | Validated non-empty benchmark collection |
//! | [`RiskProfile`] | Qualitative risk selectors |
//! | [`ValuationResult`] | Three-scenario valuation with breakdown |
//! | [`AdjustmentEntry`] | One triggered risk adjustment |
//!
//! ## Validation
//!
//! Invariants the engine relies on are enforced at construction time:
//!
//! ```rust
//! use seedval_core::{BenchmarkSet, ValidationError};
//!
//! let empty = BenchmarkSet::new(Vec::new());
//! assert!(matches!(empty, Err(ValidationError::EmptyBenchmarkSet)));
//! ```
//!
//! Categorical inputs are closed enums, so every ledger rule matches
//! exhaustively over them.

mod benchmark;
mod profile;
mod risk;
mod valuation;

pub use benchmark::{BenchmarkSet, ComparableBenchmark};
pub use profile::{BusinessModel, FundingStage, OperatingProfile};
pub use risk::{Competition, MarketRisk, ProductMaturity, RiskProfile, TeamQuality};
pub use valuation::{
    AdjustmentEntry, AdjustmentKind, MethodologyLine, RunwayBand, RunwayStatus, ValuationResult,
    CRITICAL_RUNWAY_MONTHS, DILUTION_TARGET_MAX_PERCENT, HEALTHY_RUNWAY_MONTHS,
};

#[cfg(test)]
pub(crate) use profile::sample_profile;
