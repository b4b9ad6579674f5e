mod cli;
mod commands;
mod error;
mod logging;
mod metadata;
mod output;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level, cli.log_format);

    let command_output = commands::run(&cli).await?;
    let envelope = &command_output.envelope;
    output::render(envelope, &command_output.table, cli.format, cli.pretty)?;

    enforce_strict(cli.strict, &envelope.meta.warnings)?;

    Ok(ExitCode::SUCCESS)
}

fn enforce_strict(strict: bool, warnings: &[String]) -> Result<(), CliError> {
    if strict && !warnings.is_empty() {
        return Err(CliError::StrictModeViolation {
            warning_count: warnings.len(),
        });
    }
    Ok(())
}
