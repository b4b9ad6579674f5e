pub mod report;

use seedval_core::Envelope;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    table: &[String],
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => {
            for line in table_lines(envelope, table)? {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn table_lines(envelope: &Envelope<Value>, table: &[String]) -> Result<Vec<String>, CliError> {
    let mut lines = Vec::with_capacity(table.len() + 8);
    lines.push(format!("request_id  : {}", envelope.meta.request_id));
    lines.push(format!("generated_at: {}", envelope.meta.generated_at));
    if let Some(origin) = envelope.meta.benchmark_origin {
        lines.push(format!("benchmarks  : {origin}"));
    }
    lines.push(format!("latency_ms  : {}", envelope.meta.latency_ms));

    if !envelope.meta.warnings.is_empty() {
        lines.push(String::from("warnings:"));
        for warning in &envelope.meta.warnings {
            lines.push(format!("  - {warning}"));
        }
    }

    lines.push(String::new());
    if table.is_empty() {
        let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
        lines.extend(pretty_data.lines().map(|line| format!("  {line}")));
    } else {
        lines.extend(table.iter().cloned());
    }

    Ok(lines)
}
