//! Behavior-driven tests for the valuation engine
//!
//! These tests describe what a founder sees when pricing a round: scenario
//! ranges, the adjustment ledger and round health, checked against hand
//! computed figures.

use seedval_tests::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

// =============================================================================
// Valuation: worked example
// =============================================================================

#[test]
fn founder_with_pre_seed_saas_receives_three_ordered_scenarios() {
    // Given: A Pre-Seed SaaS with 10k MRR, 20% growth and 9 months of runway
    let profile = reference_profile();
    let benchmarks = reference_benchmarks();

    // When: The valuation is computed with the default (duo) team
    let result = compute_valuation(&profile, &benchmarks, &RiskProfile::default());

    // Then: The blended raw valuation matches the four weighted methods
    assert_close(result.raw_valuation, 721_000.0);
    assert_close(result.adjustment_factor, 0.75);

    // And: The scenarios are the base scaled by 0.8 and 1.2
    assert_close(result.base, 540_750.0);
    assert_eq!(result.conservative, result.base * 0.8);
    assert_eq!(result.optimistic, result.base * 1.2);
    assert!(result.conservative < result.base && result.base < result.optimistic);

    // And: Round health reflects the capital sought
    assert_close(result.post_money, 1_040_750.0);
    let dilution = result.equity_dilution.expect("positive base");
    assert!((dilution - 48.042_277).abs() < 1e-4);
    assert!(result.dilution_exceeds_target());
    assert_eq!(result.runway_status, RunwayStatus::Warning);
}

#[test]
fn methodology_breakdown_always_lists_four_methods_weighted_to_one() {
    // Given: Any profile, including one with no traction at all
    let mut idle = reference_profile();
    idle.mrr = 0.0;
    idle.active_users = 0;
    idle.ltv = 0.0;

    for profile in [reference_profile(), idle] {
        // When: The valuation is computed
        let result = compute_valuation(&profile, &reference_benchmarks(), &RiskProfile::default());

        // Then: Four methods are reported in fixed order with weights summing to 1
        let methods: Vec<&str> = result
            .methodology_breakdown
            .iter()
            .map(|line| line.method.as_str())
            .collect();
        assert_eq!(methods.len(), 4);
        assert!((result.total_weight() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn identical_inputs_produce_identical_results() {
    // Given: The same inputs twice
    let profile = reference_profile();
    let benchmarks = reference_benchmarks();
    let risk = RiskProfile::with_team(TeamQuality::Solo);

    // When: The engine runs twice
    let first = compute_valuation(&profile, &benchmarks, &risk);
    let second = compute_valuation(&profile, &benchmarks, &risk);

    // Then: The results are bit-for-bit equal
    assert_eq!(first, second);
}

// =============================================================================
// Adjustment ledger
// =============================================================================

#[test]
fn exactly_one_stage_discount_is_applied_for_every_stage() {
    for stage in [FundingStage::PreSeed, FundingStage::Seed] {
        // Given: A profile at the stage
        let mut profile = reference_profile();
        profile.stage = stage;

        // When: The valuation is computed
        let result = compute_valuation(&profile, &reference_benchmarks(), &RiskProfile::default());

        // Then: The ledger carries one stage discount, listed first
        let discounts = result
            .adjustments
            .iter()
            .filter(|entry| entry.kind.is_stage_discount())
            .count();
        assert_eq!(discounts, 1);
        assert!(result.adjustments[0].kind.is_stage_discount());
    }
}

#[test]
fn runway_boundaries_drive_both_ledger_and_status() {
    let cases = [
        (0.0, Some(AdjustmentKind::HighCashRisk), RunwayStatus::Critical),
        (5.9, Some(AdjustmentKind::HighCashRisk), RunwayStatus::Critical),
        (6.0, Some(AdjustmentKind::ModerateCashRisk), RunwayStatus::Warning),
        (11.9, Some(AdjustmentKind::ModerateCashRisk), RunwayStatus::Warning),
        (12.0, None, RunwayStatus::Healthy),
        (24.0, None, RunwayStatus::Healthy),
    ];

    for (runway, expected_kind, expected_status) in cases {
        // Given: A profile with the given runway
        let mut profile = reference_profile();
        profile.runway_months = runway;

        // When: The valuation is computed
        let result = compute_valuation(&profile, &reference_benchmarks(), &RiskProfile::default());

        // Then: The cash-risk entry and runway status agree
        let runway_entry = result
            .adjustments
            .iter()
            .find(|entry| entry.kind.is_runway_risk())
            .map(|entry| entry.kind);
        assert_eq!(runway_entry, expected_kind, "runway {runway}");
        assert_eq!(result.runway_status, expected_status, "runway {runway}");
    }
}

#[test]
fn growth_premium_requires_strictly_more_than_fifteen_percent() {
    // Given: A profile growing exactly 15% month over month
    let mut profile = reference_profile();
    profile.mrr_growth = 15.0;

    // When: The valuation is computed
    let result = compute_valuation(&profile, &reference_benchmarks(), &RiskProfile::default());

    // Then: No growth premium is granted
    assert!(!result
        .adjustments
        .iter()
        .any(|entry| entry.kind == AdjustmentKind::HighGrowth));
}

#[test]
fn team_selection_moves_the_base_valuation() {
    let profile = reference_profile();
    let benchmarks = reference_benchmarks();

    // When: The same company is priced with each team composition
    let solo = compute_valuation(&profile, &benchmarks, &RiskProfile::with_team(TeamQuality::Solo));
    let duo = compute_valuation(&profile, &benchmarks, &RiskProfile::with_team(TeamQuality::Duo));
    let experienced = compute_valuation(
        &profile,
        &benchmarks,
        &RiskProfile::with_team(TeamQuality::ExperiencedTeam),
    );

    // Then: Solo founders are discounted and experienced teams rewarded
    assert_close(solo.adjustment_factor, 0.65);
    assert_close(experienced.adjustment_factor, 0.90);
    assert!(solo.base < duo.base && duo.base < experienced.base);
}

#[test]
fn factor_floor_limits_stacked_discounts() {
    // Given: A Seed solo founder with critical runway and flat growth
    let mut profile = reference_profile();
    profile.stage = FundingStage::Seed;
    profile.runway_months = 3.0;
    profile.mrr_growth = 0.0;
    let risk = RiskProfile::with_team(TeamQuality::Solo);

    // When: The engine applies a 0.7 floor
    let engine = ValuationEngine::with_factor_floor(0.7).expect("valid floor");
    let floored = engine.compute(&profile, &reference_benchmarks(), &risk);
    let unfloored = compute_valuation(&profile, &reference_benchmarks(), &risk);

    // Then: The applied factor is raised to the floor but the ledger is intact
    assert_close(unfloored.adjustment_factor, 0.6);
    assert_close(floored.adjustment_factor, 0.7);
    assert_eq!(floored.adjustments, unfloored.adjustments);
}

#[test]
fn negative_factor_floor_is_rejected() {
    let error = ValuationEngine::with_factor_floor(-0.1).expect_err("negative floor");
    assert!(matches!(error, ValidationError::InvalidFactorFloor { .. }));
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn zero_cac_never_divides_by_zero() {
    // Given: A company with no acquisition cost recorded
    let mut profile = reference_profile();
    profile.cac = 0.0;

    // When: The valuation is computed
    let result = compute_valuation(&profile, &reference_benchmarks(), &RiskProfile::default());

    // Then: Unit economics use an LTV/CAC of 1 and every figure stays finite
    assert_close(result.raw_valuation, 481_000.0);
    assert!(result.base.is_finite() && result.optimistic.is_finite());
}

#[test]
fn unit_economics_multiplier_is_capped() {
    // Given: An LTV/CAC of 100
    let mut profile = reference_profile();
    profile.ltv = 50_000.0;

    // When: The valuation is computed
    let result = compute_valuation(&profile, &reference_benchmarks(), &RiskProfile::default());

    // Then: The unit-economics estimate is annual revenue times 15
    let unit_economics = result.methodology_breakdown[3].value;
    assert_close(unit_economics, 120_000.0 * 15.0);
}

#[test]
fn last_revenue_above_run_rate_is_used_for_revenue_methods() {
    let mut profile = reference_profile();
    profile.last_revenue = 300_000.0;

    let result = compute_valuation(&profile, &reference_benchmarks(), &RiskProfile::default());

    assert_close(result.methodology_breakdown[1].value, 300_000.0 * 10.5);
}

#[test]
fn empty_benchmark_collection_is_rejected_before_the_engine() {
    // Given: No comparables
    // When: A benchmark set is built from them
    let error = BenchmarkSet::new(Vec::new()).expect_err("empty set");

    // Then: Construction fails instead of producing NaN valuations
    assert_eq!(error, ValidationError::EmptyBenchmarkSet);
}

#[test]
fn zero_traction_company_has_no_dilution_figure() {
    // Given: A pre-revenue company with no users or LTV
    let mut profile = reference_profile();
    profile.mrr = 0.0;
    profile.active_users = 0;
    profile.ltv = 0.0;

    // When: The valuation is computed
    let result = compute_valuation(&profile, &reference_benchmarks(), &RiskProfile::default());

    // Then: Base is zero and dilution is undefined rather than a division by zero
    assert_eq!(result.base, 0.0);
    assert_eq!(result.equity_dilution, None);
    assert!(result.dilution_exceeds_target());
}

#[test]
fn result_serializes_with_camel_case_fields() {
    let result = compute_valuation(
        &reference_profile(),
        &MockBenchmarkProvider::benchmark_set(),
        &RiskProfile::default(),
    );

    let json = serde_json::to_value(&result).expect("serialize");
    assert!(json.get("methodologyBreakdown").is_some());
    assert!(json.get("equityDilution").is_some());
    assert_eq!(json["runwayStatus"], "Alerta");
}
