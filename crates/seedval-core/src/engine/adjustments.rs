use crate::{
    AdjustmentEntry, AdjustmentKind, OperatingProfile, RiskProfile, RunwayBand, TeamQuality,
};

/// Monthly MRR growth (percent) above which the growth premium fires.
pub const HIGH_GROWTH_THRESHOLD_PERCENT: f64 = 15.0;

/// Ordered list of risk adjustments triggered for one valuation.
///
/// Rules are checked in a fixed order (stage, runway, team, growth). Order only
/// affects display; the factor is an additive sum.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentLedger {
    entries: Vec<AdjustmentEntry>,
}

impl AdjustmentLedger {
    pub fn build(profile: &OperatingProfile, risk: &RiskProfile) -> Self {
        let mut kinds = Vec::with_capacity(4);

        kinds.push(AdjustmentKind::stage_discount(profile.stage));

        match RunwayBand::classify(profile.runway_months) {
            RunwayBand::Critical => kinds.push(AdjustmentKind::HighCashRisk),
            RunwayBand::Warning => kinds.push(AdjustmentKind::ModerateCashRisk),
            RunwayBand::Healthy => {}
        }

        match risk.team_quality {
            TeamQuality::Solo => kinds.push(AdjustmentKind::SoloFounder),
            TeamQuality::ExperiencedTeam => kinds.push(AdjustmentKind::ExperiencedTeam),
            TeamQuality::Duo => {}
        }

        if profile.mrr_growth > HIGH_GROWTH_THRESHOLD_PERCENT {
            kinds.push(AdjustmentKind::HighGrowth);
        }

        Self {
            entries: kinds.into_iter().map(AdjustmentEntry::from).collect(),
        }
    }

    pub fn entries(&self) -> &[AdjustmentEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<AdjustmentEntry> {
        self.entries
    }

    /// `1 + Σ impact`, unclamped.
    pub fn factor(&self) -> f64 {
        1.0 + self.entries.iter().map(|entry| entry.impact).sum::<f64>()
    }
}
