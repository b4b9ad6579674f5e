use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::FundingStage;

/// Months below which cash is considered critical.
pub const CRITICAL_RUNWAY_MONTHS: f64 = 6.0;
/// Months from which cash is considered healthy.
pub const HEALTHY_RUNWAY_MONTHS: f64 = 12.0;
/// Dilution (in percent) above which a raise is flagged as off-target.
pub const DILUTION_TARGET_MAX_PERCENT: f64 = 20.0;

/// Runway bucket shared by the ledger's cash-risk rule and the runway status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunwayBand {
    /// `< 6` months.
    Critical,
    /// `6 <= months < 12`.
    Warning,
    /// `>= 12` months.
    Healthy,
}

impl RunwayBand {
    pub fn classify(runway_months: f64) -> Self {
        if runway_months < CRITICAL_RUNWAY_MONTHS {
            Self::Critical
        } else if runway_months < HEALTHY_RUNWAY_MONTHS {
            Self::Warning
        } else {
            Self::Healthy
        }
    }

    pub const fn status(self) -> RunwayStatus {
        match self {
            Self::Critical => RunwayStatus::Critical,
            Self::Warning => RunwayStatus::Warning,
            Self::Healthy => RunwayStatus::Healthy,
        }
    }
}

/// Runway health label reported with every valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunwayStatus {
    #[serde(rename = "Saludable")]
    Healthy,
    #[serde(rename = "Alerta")]
    Warning,
    #[serde(rename = "Crítico")]
    Critical,
}

impl RunwayStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "Saludable",
            Self::Warning => "Alerta",
            Self::Critical => "Crítico",
        }
    }
}

impl Display for RunwayStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of ledger rules that can fire for a valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    PreSeedDiscount,
    SeedDiscount,
    HighCashRisk,
    ModerateCashRisk,
    SoloFounder,
    ExperiencedTeam,
    HighGrowth,
}

impl AdjustmentKind {
    pub const fn stage_discount(stage: FundingStage) -> Self {
        match stage {
            FundingStage::PreSeed => Self::PreSeedDiscount,
            FundingStage::Seed => Self::SeedDiscount,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::PreSeedDiscount => "Descuento Etapa Pre-Seed",
            Self::SeedDiscount => "Descuento Etapa Seed",
            Self::HighCashRisk => "Riesgo Alto de Caja (<6m)",
            Self::ModerateCashRisk => "Riesgo Moderado de Caja (6-12m)",
            Self::SoloFounder => "Riesgo Fundador Único",
            Self::ExperiencedTeam => "Premium Equipo Experimentado",
            Self::HighGrowth => "Premium Alto Crecimiento (>15% CMGR)",
        }
    }

    /// Signed fractional impact (`-0.30` is a 30% markdown).
    pub const fn impact(self) -> f64 {
        match self {
            Self::PreSeedDiscount => -0.30,
            Self::SeedDiscount => -0.15,
            Self::HighCashRisk => -0.15,
            Self::ModerateCashRisk => -0.05,
            Self::SoloFounder => -0.10,
            Self::ExperiencedTeam => 0.15,
            Self::HighGrowth => 0.10,
        }
    }

    pub const fn is_stage_discount(self) -> bool {
        matches!(self, Self::PreSeedDiscount | Self::SeedDiscount)
    }

    pub const fn is_runway_risk(self) -> bool {
        matches!(self, Self::HighCashRisk | Self::ModerateCashRisk)
    }
}

/// One triggered ledger line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentEntry {
    pub kind: AdjustmentKind,
    pub name: String,
    pub impact: f64,
}

impl From<AdjustmentKind> for AdjustmentEntry {
    fn from(kind: AdjustmentKind) -> Self {
        Self {
            kind,
            name: kind.name().to_owned(),
            impact: kind.impact(),
        }
    }
}

/// One valuation method's estimate and its blending weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodologyLine {
    pub method: String,
    pub value: f64,
    pub weight: f64,
}

/// Complete output of one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    pub conservative: f64,
    pub base: f64,
    pub optimistic: f64,
    pub methodology_breakdown: Vec<MethodologyLine>,
    pub adjustments: Vec<AdjustmentEntry>,
    /// `None` when the base valuation is not positive.
    pub equity_dilution: Option<f64>,
    pub runway_status: RunwayStatus,
    pub raw_valuation: f64,
    pub adjustment_factor: f64,
    pub post_money: f64,
}

impl ValuationResult {
    pub fn dilution_exceeds_target(&self) -> bool {
        self.equity_dilution
            .map(|dilution| dilution > DILUTION_TARGET_MAX_PERCENT)
            .unwrap_or(true)
    }

    pub fn total_weight(&self) -> f64 {
        self.methodology_breakdown.iter().map(|line| line.weight).sum()
    }
}
