//! JSON input files.

use std::fs;
use std::path::Path;

use seedval_core::{BenchmarkSet, CoreError, OperatingProfile, RiskProfile};
use serde::de::DeserializeOwned;

use crate::cli::ValuationArgs;
use crate::error::CliError;

fn read_input(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    serde_json::from_str(&read_input(path)?).map_err(|source| CliError::InputFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate an operating profile.
pub fn load_profile(path: &Path) -> Result<OperatingProfile, CliError> {
    OperatingProfile::from_json_str(&read_input(path)?).map_err(|error| match error {
        CoreError::Validation(error) => CliError::Validation(error),
        CoreError::Serialization(source) => CliError::InputFormat {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Load a non-empty array of comparables. Every entry must be valid.
pub fn load_benchmarks(path: &Path) -> Result<BenchmarkSet, CliError> {
    read_json(path)
}

/// Risk selectors from `--risk`, overridden field by field by explicit flags.
pub fn load_risk(args: &ValuationArgs) -> Result<RiskProfile, CliError> {
    let mut risk = match &args.risk {
        Some(path) => read_json(path)?,
        None => RiskProfile::default(),
    };

    if let Some(team) = args.team {
        risk.team_quality = team.into();
    }
    if let Some(market_risk) = args.market_risk {
        risk.market_risk = market_risk.into();
    }
    if let Some(product) = args.product {
        risk.product_maturity = product.into();
    }
    if let Some(competition) = args.competition {
        risk.competition = competition.into();
    }

    Ok(risk)
}
