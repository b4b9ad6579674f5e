use serde::{Deserialize, Serialize};

/// Founding-team composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamQuality {
    Solo,
    #[default]
    Duo,
    ExperiencedTeam,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketRisk {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductMaturity {
    Mvp,
    #[default]
    Beta,
    Pmf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Competition {
    Saturated,
    #[default]
    Moderate,
    BlueOcean,
}

/// Qualitative risk selections made alongside the operating data.
///
/// Only `team_quality` moves the valuation today. Market risk, product
/// maturity and competition are accepted and echoed back but carry no
/// adjustment until their impacts are agreed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    #[serde(default)]
    pub team_quality: TeamQuality,
    #[serde(default)]
    pub market_risk: MarketRisk,
    #[serde(default, alias = "productStage")]
    pub product_maturity: ProductMaturity,
    #[serde(default)]
    pub competition: Competition,
}

impl RiskProfile {
    pub fn with_team(team_quality: TeamQuality) -> Self {
        Self {
            team_quality,
            ..Self::default()
        }
    }
}
