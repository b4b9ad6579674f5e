use seedval_core::engine::AverageMultiples;
use seedval_core::format::format_number;
use seedval_core::{
    BenchmarkResolution, OperatingProfile, RiskProfile, ValuationEngine, ValuationResult,
};
use serde::Serialize;
use tracing::info;

use crate::cli::{Cli, ValuationArgs};
use crate::error::CliError;
use crate::output::report;

use super::{benchmark_resolution, inputs, CommandResult};

/// Everything one valuation needs, resolved from the command line.
pub(super) struct ValuationRun {
    pub profile: OperatingProfile,
    pub risk: RiskProfile,
    pub resolution: BenchmarkResolution,
    pub multiples: AverageMultiples,
    pub valuation: ValuationResult,
}

impl ValuationRun {
    pub async fn prepare(cli: &Cli, args: &ValuationArgs) -> Result<Self, CliError> {
        let engine = match args.factor_floor {
            Some(floor) => ValuationEngine::with_factor_floor(floor)?,
            None => ValuationEngine::default(),
        };

        let profile = inputs::load_profile(&args.profile)?;
        let risk = inputs::load_risk(args)?;
        let resolution = benchmark_resolution(cli, args.benchmarks.as_deref(), &profile).await?;

        let multiples = AverageMultiples::from_benchmarks(&resolution.benchmarks);
        let valuation = engine.compute(&profile, &resolution.benchmarks, &risk);
        info!(
            base = valuation.base,
            origin = %resolution.origin,
            runway_status = %valuation.runway_status,
            "valuation computed"
        );

        Ok(Self {
            profile,
            risk,
            resolution,
            multiples,
            valuation,
        })
    }

    /// Warnings raised by the run itself, on top of provider fallbacks.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = self.resolution.warnings.clone();
        if self.valuation.dilution_exceeds_target() {
            let dilution = self
                .valuation
                .equity_dilution
                .map(|value| format!("{}%", format_number(value, 1)))
                .unwrap_or_else(|| String::from("undefined"));
            warnings.push(format!(
                "equity dilution {dilution} exceeds the 20% target for this round"
            ));
        }
        warnings
    }

    pub fn table(&self) -> Vec<String> {
        let mut lines = report::profile_header(&self.profile);
        lines.extend(report::valuation_lines(&self.valuation));
        lines.extend(report::benchmark_lines(
            self.resolution.benchmarks.as_slice(),
            &self.multiples,
        ));
        lines
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ValuationResponseData<'a> {
    pub valuation: &'a ValuationResult,
    pub risk: &'a RiskProfile,
    pub average_multiples: &'a AverageMultiples,
    pub benchmarks: &'a [seedval_core::ComparableBenchmark],
}

impl<'a> From<&'a ValuationRun> for ValuationResponseData<'a> {
    fn from(run: &'a ValuationRun) -> Self {
        Self {
            valuation: &run.valuation,
            risk: &run.risk,
            average_multiples: &run.multiples,
            benchmarks: run.resolution.benchmarks.as_slice(),
        }
    }
}

pub async fn run(cli: &Cli, args: &ValuationArgs) -> Result<CommandResult, CliError> {
    let run = ValuationRun::prepare(cli, args).await?;
    let data = serde_json::to_value(ValuationResponseData::from(&run))?;

    Ok(CommandResult::ok(data, run.table())
        .with_warnings(run.warnings())
        .with_benchmark_origin(run.resolution.origin))
}
