use serde::{Deserialize, Serialize};

use super::AverageMultiples;
use crate::{MethodologyLine, OperatingProfile};

pub const MRR_MULTIPLE_WEIGHT: f64 = 0.30;
pub const REVENUE_MULTIPLE_WEIGHT: f64 = 0.30;
pub const USER_BASED_WEIGHT: f64 = 0.20;
pub const UNIT_ECONOMICS_WEIGHT: f64 = 0.20;

/// Upper bound on the LTV/CAC-derived revenue multiplier.
pub const UNIT_ECONOMICS_MULTIPLIER_CAP: f64 = 15.0;

/// The four methods, in breakdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    MrrMultiple,
    RevenueMultiple,
    UserBased,
    UnitEconomics,
}

impl Method {
    pub const ALL: [Self; 4] = [
        Self::MrrMultiple,
        Self::RevenueMultiple,
        Self::UserBased,
        Self::UnitEconomics,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::MrrMultiple => "Múltiplo EV / MRR",
            Self::RevenueMultiple => "EV / Ventas (Revenue)",
            Self::UserBased => "Valor por Usuario",
            Self::UnitEconomics => "Economía Unitaria (LTV/CAC)",
        }
    }

    pub const fn weight(self) -> f64 {
        match self {
            Self::MrrMultiple => MRR_MULTIPLE_WEIGHT,
            Self::RevenueMultiple => REVENUE_MULTIPLE_WEIGHT,
            Self::UserBased => USER_BASED_WEIGHT,
            Self::UnitEconomics => UNIT_ECONOMICS_WEIGHT,
        }
    }
}

/// Scenario-independent estimates, one per [`Method`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodologyEstimates {
    pub mrr_multiple: f64,
    pub revenue_multiple: f64,
    pub user_based: f64,
    pub unit_economics: f64,
}

impl MethodologyEstimates {
    pub fn compute(profile: &OperatingProfile, multiples: &AverageMultiples) -> Self {
        let annual_revenue = profile.annual_revenue();
        let unit_multiplier =
            (2.0 * efficiency_ratio(profile.ltv, profile.cac)).min(UNIT_ECONOMICS_MULTIPLIER_CAP);

        Self {
            mrr_multiple: profile.mrr * multiples.ev_mrr,
            revenue_multiple: annual_revenue * multiples.ev_revenue,
            user_based: profile.active_users as f64 * multiples.ev_user,
            unit_economics: annual_revenue * unit_multiplier,
        }
    }

    pub const fn value(&self, method: Method) -> f64 {
        match method {
            Method::MrrMultiple => self.mrr_multiple,
            Method::RevenueMultiple => self.revenue_multiple,
            Method::UserBased => self.user_based,
            Method::UnitEconomics => self.unit_economics,
        }
    }

    /// Raw valuation: fixed-weight blend of the four estimates.
    pub fn weighted(&self) -> f64 {
        Method::ALL
            .iter()
            .map(|method| self.value(*method) * method.weight())
            .sum()
    }

    pub fn breakdown(&self) -> Vec<MethodologyLine> {
        Method::ALL
            .iter()
            .map(|method| MethodologyLine {
                method: method.label().to_owned(),
                value: self.value(*method),
                weight: method.weight(),
            })
            .collect()
    }
}

/// LTV/CAC, defaulting to 1 when acquisition cost is zero.
pub fn efficiency_ratio(ltv: f64, cac: f64) -> f64 {
    if cac > 0.0 {
        ltv / cac
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_profile;

    fn multiples() -> AverageMultiples {
        AverageMultiples {
            ev_mrr: 12.0,
            ev_revenue: 10.0,
            ev_user: 150.0,
        }
    }

    #[test]
    fn computes_each_estimate() {
        let estimates = MethodologyEstimates::compute(&sample_profile(), &multiples());

        assert_eq!(estimates.mrr_multiple, 120_000.0);
        assert_eq!(estimates.revenue_multiple, 1_200_000.0);
        assert_eq!(estimates.user_based, 75_000.0);
        assert_eq!(estimates.unit_economics, 1_440_000.0);
    }

    #[test]
    fn zero_cac_resolves_efficiency_to_one() {
        assert_eq!(efficiency_ratio(3_000.0, 0.0), 1.0);

        let mut profile = sample_profile();
        profile.cac = 0.0;
        let estimates = MethodologyEstimates::compute(&profile, &multiples());
        assert_eq!(estimates.unit_economics, 120_000.0 * 2.0);
    }

    #[test]
    fn caps_unit_economics_multiplier() {
        let mut profile = sample_profile();
        profile.ltv = 100_000.0;
        profile.cac = 10.0;
        let estimates = MethodologyEstimates::compute(&profile, &multiples());
        assert_eq!(estimates.unit_economics, 120_000.0 * UNIT_ECONOMICS_MULTIPLIER_CAP);
    }

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = Method::ALL.iter().map(|method| method.weight()).sum();
        assert_eq!(total, 1.0);
    }

    #[test]
    fn breakdown_keeps_method_order() {
        let breakdown = MethodologyEstimates::compute(&sample_profile(), &multiples()).breakdown();
        let names: Vec<&str> = breakdown.iter().map(|line| line.method.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Múltiplo EV / MRR",
                "EV / Ventas (Revenue)",
                "Valor por Usuario",
                "Economía Unitaria (LTV/CAC)",
            ]
        );
    }

    #[test]
    fn weighted_blend_matches_hand_computation() {
        let raw = MethodologyEstimates::compute(&sample_profile(), &multiples()).weighted();
        assert!((raw - 699_000.0).abs() < 1e-6, "raw={raw}");
    }
}
