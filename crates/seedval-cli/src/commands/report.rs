use seedval_core::{resolve_summary, GeminiSummaryGenerator, SummaryOutcome};
use serde::Serialize;

use crate::cli::{Cli, ValuationArgs};
use crate::error::CliError;
use crate::output::report;

use super::value::{ValuationResponseData, ValuationRun};
use super::{gemini_client, CommandResult};

#[derive(Debug, Serialize)]
struct ReportResponseData<'a> {
    #[serde(flatten)]
    valuation: ValuationResponseData<'a>,
    summary: &'a SummaryOutcome,
}

pub async fn run(cli: &Cli, args: &ValuationArgs) -> Result<CommandResult, CliError> {
    let run = ValuationRun::prepare(cli, args).await?;

    let summary = if cli.mock {
        SummaryOutcome {
            text: String::from(seedval_core::summary::MISSING_KEY_MESSAGE),
            generated: false,
        }
    } else {
        let generator = GeminiSummaryGenerator::new(gemini_client(cli));
        resolve_summary(&generator, &run.profile, &run.valuation).await
    };

    let data = serde_json::to_value(ReportResponseData {
        valuation: ValuationResponseData::from(&run),
        summary: &summary,
    })?;

    let mut table = run.table();
    table.extend(report::summary_lines(&summary));

    let mut result = CommandResult::ok(data, table)
        .with_warnings(run.warnings())
        .with_benchmark_origin(run.resolution.origin);
    if !summary.generated {
        result = result.with_warning("executive summary unavailable; static text used");
    }
    Ok(result)
}
