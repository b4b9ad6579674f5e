use serde::{Deserialize, Serialize};

use crate::BenchmarkSet;

/// Equal-weight mean of each multiple across the comparable set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageMultiples {
    pub ev_mrr: f64,
    pub ev_revenue: f64,
    pub ev_user: f64,
}

impl AverageMultiples {
    pub fn from_benchmarks(benchmarks: &BenchmarkSet) -> Self {
        let count = benchmarks.len() as f64;
        let (ev_mrr, ev_revenue, ev_user) = benchmarks.iter().fold(
            (0.0, 0.0, 0.0),
            |(mrr, revenue, user), benchmark| {
                (
                    mrr + benchmark.ev_mrr_multiple,
                    revenue + benchmark.ev_revenue_multiple,
                    user + benchmark.ev_user_multiple,
                )
            },
        );

        Self {
            ev_mrr: ev_mrr / count,
            ev_revenue: ev_revenue / count,
            ev_user: ev_user / count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComparableBenchmark;

    #[test]
    fn averages_every_multiple_with_equal_weight() {
        let set = BenchmarkSet::new(vec![
            ComparableBenchmark::new("A", "USA", "SaaS", 10.0, 8.0, 100.0, "").expect("valid"),
            ComparableBenchmark::new("B", "UK", "SaaS", 14.0, 12.0, 200.0, "").expect("valid"),
        ])
        .expect("non-empty");

        let averages = AverageMultiples::from_benchmarks(&set);
        assert_eq!(averages.ev_mrr, 12.0);
        assert_eq!(averages.ev_revenue, 10.0);
        assert_eq!(averages.ev_user, 150.0);
    }

    #[test]
    fn single_benchmark_is_its_own_average() {
        let set = BenchmarkSet::new(vec![ComparableBenchmark::new(
            "Solo", "BR", "Fintech", 9.5, 7.8, 90.0, "",
        )
        .expect("valid")])
        .expect("non-empty");

        let averages = AverageMultiples::from_benchmarks(&set);
        assert_eq!(averages.ev_mrr, 9.5);
        assert_eq!(averages.ev_revenue, 7.8);
        assert_eq!(averages.ev_user, 90.0);
    }
}
