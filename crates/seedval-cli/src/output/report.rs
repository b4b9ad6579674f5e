//! Human-readable report sections, formatted for es-ES readers.

use seedval_core::engine::AverageMultiples;
use seedval_core::format::{format_currency, format_impact, format_number};
use seedval_core::{ComparableBenchmark, OperatingProfile, SummaryOutcome, ValuationResult};

pub fn profile_header(profile: &OperatingProfile) -> Vec<String> {
    let mut lines = vec![format!(
        "Valoración: {} ({}) | {}",
        profile.industry,
        profile.business_model.label(),
        profile.stage
    )];
    if !profile.country.trim().is_empty() {
        lines.push(format!("País: {}", profile.country));
    }
    lines.push(format!(
        "MRR {} | Crecimiento {}% | Usuarios {}",
        format_currency(profile.mrr),
        format_number(profile.mrr_growth, 1),
        format_number(profile.active_users as f64, 0)
    ));
    lines.push(String::new());
    lines
}

pub fn valuation_lines(valuation: &ValuationResult) -> Vec<String> {
    let mut lines = vec![
        String::from("Escenarios"),
        format!("  Conservador : {}", format_currency(valuation.conservative)),
        format!("  Base        : {}", format_currency(valuation.base)),
        format!("  Optimista   : {}", format_currency(valuation.optimistic)),
        String::new(),
        String::from("Metodología"),
    ];

    for line in &valuation.methodology_breakdown {
        lines.push(format!(
            "  {:<28} {:>16} {:>5}",
            line.method,
            format_currency(line.value),
            format!("{}%", format_number(line.weight * 100.0, 0))
        ));
    }
    lines.push(format!(
        "  {:<28} {:>16}",
        "Valor ponderado",
        format_currency(valuation.raw_valuation)
    ));

    lines.push(String::new());
    lines.push(String::from("Ajustes"));
    if valuation.adjustments.is_empty() {
        lines.push(String::from("  (sin ajustes)"));
    }
    for entry in &valuation.adjustments {
        lines.push(format!("  {:<28} {:>6}", entry.name, format_impact(entry.impact)));
    }
    lines.push(format!(
        "  Factor aplicado: {}",
        format_number(valuation.adjustment_factor, 2)
    ));

    let dilution = valuation
        .equity_dilution
        .map(|value| format!("{}%", format_number(value, 1)))
        .unwrap_or_else(|| String::from("—"));

    lines.push(String::new());
    lines.push(String::from("Ronda"));
    lines.push(format!("  Post-money  : {}", format_currency(valuation.post_money)));
    lines.push(format!("  Dilución    : {dilution}"));
    lines.push(format!("  Runway      : {}", valuation.runway_status));
    lines.push(String::new());
    lines
}

pub fn benchmark_lines(
    benchmarks: &[ComparableBenchmark],
    multiples: &AverageMultiples,
) -> Vec<String> {
    let mut lines = vec![String::from("Comparables")];
    for benchmark in benchmarks {
        let origin = if benchmark.country.is_empty() {
            benchmark.name.clone()
        } else {
            format!("{} ({})", benchmark.name, benchmark.country)
        };
        lines.push(format!(
            "  {:<28} EV/MRR {:>6}x  EV/Rev {:>6}x  EV/Usuario {:>10}",
            origin,
            format_number(benchmark.ev_mrr_multiple, 1),
            format_number(benchmark.ev_revenue_multiple, 1),
            format_currency(benchmark.ev_user_multiple)
        ));
    }
    lines.push(format!(
        "  {:<28} EV/MRR {:>6}x  EV/Rev {:>6}x  EV/Usuario {:>10}",
        "Promedio",
        format_number(multiples.ev_mrr, 1),
        format_number(multiples.ev_revenue, 1),
        format_currency(multiples.ev_user)
    ));
    lines
}

pub fn summary_lines(summary: &SummaryOutcome) -> Vec<String> {
    let mut lines = vec![String::new(), String::from("Resumen ejecutivo")];
    lines.extend(summary.text.lines().map(|line| format!("  {line}")));
    lines
}

#[cfg(test)]
mod tests {
    use seedval_core::{compute_valuation, BenchmarkSet, MockBenchmarkProvider, RiskProfile};

    use super::*;

    fn profile() -> OperatingProfile {
        serde_json::from_str(
            r#"{"industry":"Logistics","businessModel":"SaaS","stage":"Pre-Seed","country":"Chile",
                "mrr":10000,"mrrGrowth":20,"activeUsers":500,"cac":500,"ltv":3000,
                "runwayMonths":9,"seekingCapital":500000}"#,
        )
        .expect("profile")
    }

    fn benchmarks() -> BenchmarkSet {
        MockBenchmarkProvider::benchmark_set()
    }

    #[test]
    fn valuation_section_uses_spanish_formatting() {
        let valuation = compute_valuation(&profile(), &benchmarks(), &RiskProfile::default());
        let lines = valuation_lines(&valuation);

        assert!(lines.iter().any(|line| line.contains("Base        : $ 524.250")));
        assert!(lines
            .iter()
            .any(|line| line.contains("Descuento Etapa Pre-Seed") && line.ends_with("-30%")));
        assert!(lines.iter().any(|line| line.contains("Runway      : Alerta")));
        assert!(lines.iter().any(|line| line.contains("Dilución    : 95,4%")));
    }

    #[test]
    fn methodology_rows_share_one_column_layout() {
        let valuation = compute_valuation(&profile(), &benchmarks(), &RiskProfile::default());
        let lines = valuation_lines(&valuation);

        let start = lines.iter().position(|line| line == "Metodología").expect("section") + 1;
        let widths: Vec<usize> = lines[start..start + 4]
            .iter()
            .map(|line| line.chars().count())
            .collect();
        assert_eq!(widths, vec![53; 4]);
        assert!(lines[start + 3].contains("Economía Unitaria (LTV/CAC)"));
    }

    #[test]
    fn benchmark_section_lists_every_comparable_and_average() {
        let set = benchmarks();
        let multiples = AverageMultiples::from_benchmarks(&set);
        let lines = benchmark_lines(set.as_slice(), &multiples);

        assert_eq!(lines.len(), set.len() + 2);
        assert!(lines.iter().any(|line| line.contains("NexaTech (Brasil)")));
        assert!(lines.last().is_some_and(|line| line.contains("Promedio")));
    }

    #[test]
    fn header_shows_localized_business_model() {
        let mut profile = profile();
        profile.business_model = seedval_core::BusinessModel::Other;
        let lines = profile_header(&profile);
        assert!(lines[0].contains("(Otro)"));
        assert!(lines[1].contains("Chile"));
    }
}
