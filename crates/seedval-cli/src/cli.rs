//! CLI argument definitions for seedval.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `value` | Compute a three-scenario valuation |
//! | `benchmarks` | Resolve comparable-company multiples for a profile |
//! | `report` | Valuation plus executive summary |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//! | `--mock` | `false` | Never call the generative model |
//! | `--timeout-ms` | `30000` | Model request timeout in ms |
//! | `--log-level` | `warn` | Log level (overridden by `RUST_LOG`) |
//!
//! # Examples
//!
//! ```bash
//! seedval value --profile startup.json --team solo
//! seedval value --profile startup.json --benchmarks comps.json --format json --pretty
//! seedval report --profile startup.json --risk risk.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use seedval_core::{Competition, MarketRisk, ProductMaturity, TeamQuality};

/// Seedval - early-stage startup valuation
///
/// Prices a Pre-Seed or Seed company from its operating metrics, comparable
/// market multiples and a few qualitative risk selectors.
#[derive(Debug, Parser)]
#[command(
    name = "seedval",
    author,
    version,
    about = "Early-stage startup valuation CLI",
    long_about = "Seedval estimates the value of an early-stage company from self-reported \
metrics, comparable-company multiples and risk adjustments. Features include:\n\
\n\
  • Four-method blended valuation (EV/MRR, EV/Revenue, EV/User, LTV/CAC)\n\
  • Transparent risk-adjustment ledger\n\
  • Conservative / base / optimistic scenarios\n\
  • Comparable benchmarks from Gemini with offline fallback\n\
\n\
Use 'seedval <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Use the built-in mock benchmarks and skip every model call.
    #[arg(long, global = true, default_value_t = false)]
    pub mock: bool,

    /// Generative-model request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = seedval_core::config::DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Log level written to stderr (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Log line format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    Table,
    /// Single JSON envelope.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute conservative / base / optimistic valuations.
    ///
    /// # Examples
    ///
    ///   seedval value --profile startup.json
    ///   seedval value --profile startup.json --team experienced-team --format json
    Value(ValuationArgs),

    /// Resolve comparable-company benchmarks for a profile.
    Benchmarks(BenchmarksArgs),

    /// Valuation followed by a generated executive summary.
    Report(ValuationArgs),
}

#[derive(Debug, Args)]
pub struct BenchmarksArgs {
    /// Operating profile JSON file.
    #[arg(long)]
    pub profile: PathBuf,
}

#[derive(Debug, Args)]
pub struct ValuationArgs {
    /// Operating profile JSON file.
    #[arg(long)]
    pub profile: PathBuf,

    /// Comparable benchmarks JSON file (array). Skips the provider when set.
    #[arg(long)]
    pub benchmarks: Option<PathBuf>,

    /// Risk profile JSON file. Individual flags below override its fields.
    #[arg(long)]
    pub risk: Option<PathBuf>,

    /// Founding-team composition.
    #[arg(long, value_enum)]
    pub team: Option<TeamArg>,

    /// Market risk (accepted; no adjustment applied).
    #[arg(long, value_enum)]
    pub market_risk: Option<MarketRiskArg>,

    /// Product maturity (accepted; no adjustment applied).
    #[arg(long, value_enum)]
    pub product: Option<ProductArg>,

    /// Competition density (accepted; no adjustment applied).
    #[arg(long, value_enum)]
    pub competition: Option<CompetitionArg>,

    /// Minimum adjustment factor applied to the raw valuation.
    #[arg(long)]
    pub factor_floor: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TeamArg {
    Solo,
    Duo,
    ExperiencedTeam,
}

impl From<TeamArg> for TeamQuality {
    fn from(value: TeamArg) -> Self {
        match value {
            TeamArg::Solo => Self::Solo,
            TeamArg::Duo => Self::Duo,
            TeamArg::ExperiencedTeam => Self::ExperiencedTeam,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarketRiskArg {
    High,
    Medium,
    Low,
}

impl From<MarketRiskArg> for MarketRisk {
    fn from(value: MarketRiskArg) -> Self {
        match value {
            MarketRiskArg::High => Self::High,
            MarketRiskArg::Medium => Self::Medium,
            MarketRiskArg::Low => Self::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProductArg {
    Mvp,
    Beta,
    Pmf,
}

impl From<ProductArg> for ProductMaturity {
    fn from(value: ProductArg) -> Self {
        match value {
            ProductArg::Mvp => Self::Mvp,
            ProductArg::Beta => Self::Beta,
            ProductArg::Pmf => Self::Pmf,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompetitionArg {
    Saturated,
    Moderate,
    BlueOcean,
}

impl From<CompetitionArg> for Competition {
    fn from(value: CompetitionArg) -> Self {
        match value {
            CompetitionArg::Saturated => Self::Saturated,
            CompetitionArg::Moderate => Self::Moderate,
            CompetitionArg::BlueOcean => Self::BlueOcean,
        }
    }
}
