use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{CoreError, ValidationError};

/// Business-model category of the company being valued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessModel {
    #[serde(rename = "SaaS")]
    Saas,
    Marketplace,
    #[serde(rename = "eCommerce")]
    Ecommerce,
    Fintech,
    Proptech,
    Other,
}

impl BusinessModel {
    pub const ALL: [Self; 6] = [
        Self::Saas,
        Self::Marketplace,
        Self::Ecommerce,
        Self::Fintech,
        Self::Proptech,
        Self::Other,
    ];

    /// Wire label, identical to the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Saas => "SaaS",
            Self::Marketplace => "Marketplace",
            Self::Ecommerce => "eCommerce",
            Self::Fintech => "Fintech",
            Self::Proptech => "Proptech",
            Self::Other => "Other",
        }
    }

    /// Spanish label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Other => "Otro",
            other => other.as_str(),
        }
    }
}

impl Display for BusinessModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessModel {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|model| model.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::InvalidBusinessModel {
                value: value.to_owned(),
            })
    }
}

/// Funding stage. Only the two earliest rounds are priced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundingStage {
    #[serde(rename = "Pre-Seed")]
    PreSeed,
    Seed,
}

impl FundingStage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreSeed => "Pre-Seed",
            Self::Seed => "Seed",
        }
    }
}

impl Display for FundingStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FundingStage {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "pre-seed" | "preseed" => Ok(Self::PreSeed),
            "seed" => Ok(Self::Seed),
            _ => Err(ValidationError::InvalidStage {
                value: value.to_owned(),
            }),
        }
    }
}

/// Self-reported operating metrics for one valuation.
///
/// Percentages are expressed on the 0-100 scale (`mrr_growth = 20.0` means 20%
/// month over month). Market sizes and `equity_offered` are informational and
/// never reach the engine's arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingProfile {
    pub industry: String,
    pub business_model: BusinessModel,
    #[serde(default)]
    pub country: String,
    pub stage: FundingStage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founding_date: Option<String>,

    pub mrr: f64,
    pub mrr_growth: f64,
    #[serde(deserialize_with = "deserialize_user_count")]
    pub active_users: u64,
    #[serde(default)]
    pub retention_rate: f64,
    pub cac: f64,
    pub ltv: f64,
    #[serde(default)]
    pub burn_rate: f64,
    pub runway_months: f64,
    #[serde(default)]
    pub last_revenue: f64,

    #[serde(default)]
    pub tam: f64,
    #[serde(default)]
    pub sam: f64,
    #[serde(default)]
    pub som: f64,

    #[serde(default)]
    pub raised_capital: f64,
    pub seeking_capital: f64,
    #[serde(default)]
    pub equity_offered: f64,
}

impl OperatingProfile {
    /// Parse a camelCase JSON profile and run [`validate`](Self::validate).
    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        let profile: Self = serde_json::from_str(raw)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Entry-form checks. The engine does not call this; callers that accept
    /// untrusted input should.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_non_negative("mrr", self.mrr)?;
        validate_finite("mrrGrowth", self.mrr_growth)?;
        validate_finite("retentionRate", self.retention_rate)?;
        validate_non_negative("cac", self.cac)?;
        validate_non_negative("ltv", self.ltv)?;
        validate_finite("burnRate", self.burn_rate)?;
        validate_non_negative("runwayMonths", self.runway_months)?;
        validate_non_negative("lastRevenue", self.last_revenue)?;
        validate_non_negative("tam", self.tam)?;
        validate_non_negative("sam", self.sam)?;
        validate_non_negative("som", self.som)?;
        validate_non_negative("raisedCapital", self.raised_capital)?;
        validate_non_negative("seekingCapital", self.seeking_capital)?;
        validate_non_negative("equityOffered", self.equity_offered)?;
        Ok(())
    }

    /// Annual revenue used by the revenue and unit-economics methods.
    ///
    /// A stale annualized figure never undercuts the current MRR run-rate.
    pub fn annual_revenue(&self) -> f64 {
        self.last_revenue.max(self.mrr * 12.0)
    }
}

/// Accepts `500` and `500.0`. Fractional or negative counts are rejected.
fn deserialize_user_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Number::deserialize(deserializer)?;
    if let Some(count) = value.as_u64() {
        return Ok(count);
    }

    match value.as_f64() {
        Some(count) if count >= 0.0 && count.fract() == 0.0 && count <= u64::MAX as f64 => {
            Ok(count as u64)
        }
        _ => Err(D::Error::custom(format!(
            "activeUsers must be a non-negative whole number, got {value}"
        ))),
    }
}

pub(crate) fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

pub(crate) fn validate_non_negative(
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn sample_profile() -> OperatingProfile {
    OperatingProfile {
        industry: String::from("Logistics"),
        business_model: BusinessModel::Saas,
        country: String::from("Chile"),
        stage: FundingStage::PreSeed,
        founding_date: None,
        mrr: 10_000.0,
        mrr_growth: 20.0,
        active_users: 500,
        retention_rate: 90.0,
        cac: 500.0,
        ltv: 3_000.0,
        burn_rate: 25_000.0,
        runway_months: 9.0,
        last_revenue: 0.0,
        tam: 0.0,
        sam: 0.0,
        som: 0.0,
        raised_capital: 0.0,
        seeking_capital: 500_000.0,
        equity_offered: 15.0,
    }
}
