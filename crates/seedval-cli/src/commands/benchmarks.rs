use seedval_core::engine::AverageMultiples;
use seedval_core::{BenchmarkOrigin, ComparableBenchmark};
use serde::Serialize;

use crate::cli::{BenchmarksArgs, Cli};
use crate::error::CliError;
use crate::output::report;

use super::{benchmark_resolution, inputs, CommandResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BenchmarksResponseData<'a> {
    origin: BenchmarkOrigin,
    average_multiples: AverageMultiples,
    benchmarks: &'a [ComparableBenchmark],
}

pub async fn run(cli: &Cli, args: &BenchmarksArgs) -> Result<CommandResult, CliError> {
    let profile = inputs::load_profile(&args.profile)?;
    let resolution = benchmark_resolution(cli, None, &profile).await?;
    let multiples = AverageMultiples::from_benchmarks(&resolution.benchmarks);

    let data = serde_json::to_value(BenchmarksResponseData {
        origin: resolution.origin,
        average_multiples: multiples,
        benchmarks: resolution.benchmarks.as_slice(),
    })?;
    let table = report::benchmark_lines(resolution.benchmarks.as_slice(), &multiples);

    Ok(CommandResult::ok(data, table)
        .with_warnings(resolution.warnings)
        .with_benchmark_origin(resolution.origin))
}
