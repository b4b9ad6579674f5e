mod benchmarks;
mod inputs;
mod report;
mod value;

use std::time::Instant;

use seedval_core::{
    resolve_benchmarks, BenchmarkOrigin, BenchmarkResolution, Envelope, GeminiBenchmarkProvider,
    GeminiClient, MockBenchmarkProvider, OperatingProfile, ProviderConfig,
};
use serde_json::Value;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::Metadata;

pub struct CommandResult {
    pub data: Value,
    pub table: Vec<String>,
    pub warnings: Vec<String>,
    pub benchmark_origin: Option<BenchmarkOrigin>,
}

impl CommandResult {
    pub fn ok(data: Value, table: Vec<String>) -> Self {
        Self {
            data,
            table,
            warnings: Vec::new(),
            benchmark_origin: None,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_benchmark_origin(mut self, origin: BenchmarkOrigin) -> Self {
        self.benchmark_origin = Some(origin);
        self
    }
}

/// Envelope for machine output plus the pre-rendered human report.
pub struct CommandOutput {
    pub envelope: Envelope<Value>,
    pub table: Vec<String>,
}

pub async fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    let started = Instant::now();

    let command_result = match &cli.command {
        Command::Value(args) => value::run(cli, args).await?,
        Command::Benchmarks(args) => benchmarks::run(cli, args).await?,
        Command::Report(args) => report::run(cli, args).await?,
    };

    let CommandResult {
        data,
        table,
        warnings,
        benchmark_origin,
    } = command_result;

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let mut metadata = Metadata::new(benchmark_origin, latency_ms);
    for warning in warnings {
        metadata.push_warning(warning);
    }

    let meta = metadata.into_envelope_meta()?;
    Ok(CommandOutput {
        envelope: Envelope::new(meta, data),
        table,
    })
}

fn gemini_client(cli: &Cli) -> GeminiClient {
    let config = ProviderConfig::from_env().with_timeout_ms(cli.timeout_ms);
    debug!(config = ?config, "gemini client configured");
    GeminiClient::from_config(config)
}

/// Benchmarks from a file when given, otherwise from the mock or Gemini provider.
async fn benchmark_resolution(
    cli: &Cli,
    benchmarks_path: Option<&std::path::Path>,
    profile: &OperatingProfile,
) -> Result<BenchmarkResolution, CliError> {
    if let Some(path) = benchmarks_path {
        let set = inputs::load_benchmarks(path)?;
        return Ok(BenchmarkResolution::new(set, BenchmarkOrigin::File));
    }

    if cli.mock {
        return Ok(resolve_benchmarks(&MockBenchmarkProvider, profile).await);
    }

    let provider = GeminiBenchmarkProvider::new(gemini_client(cli));
    Ok(resolve_benchmarks(&provider, profile).await)
}
