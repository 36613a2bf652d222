//! Report rendering and persistence.
//!
//! Supports `json` (default) and `human` outputs on stdout. The report file
//! is always written as pretty JSON regardless of the output mode.

use crate::models::ValidationReport;
use anyhow::Context;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::fs;
use std::path::Path;

pub const VALID_MESSAGE: &str = "Validation complete. Review JSON is valid.";

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &ValidationReport) -> JsonVal {
    json!({
        "valid": report.valid,
        "errors": report.errors,
    })
}

/// Pretty JSON with two-space indentation.
pub fn render_report(report: &ValidationReport) -> String {
    format!("{:#}", compose_report_json(report))
}

/// One-line closing summary.
pub fn summary_line(report: &ValidationReport) -> String {
    if report.valid {
        VALID_MESSAGE.to_string()
    } else {
        format!(
            "Validation complete. Found {} error(s).",
            report.error_count()
        )
    }
}

/// Write the report to `path`, creating parent directories as needed.
pub fn write_report(report: &ValidationReport, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    let mut body = render_report(report);
    body.push('\n');
    fs::write(path, body).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}

/// Print the report in the requested format.
pub fn print_report(report: &ValidationReport, output: &str) {
    match output {
        "json" => {
            if !report.valid {
                println!("{}", render_report(report));
            }
            println!("{}", summary_line(report));
        }
        _ => {
            let color = use_colors(output);
            for e in &report.errors {
                let kind = format!("⟦{}⟧", e.kind.as_str());
                let locator = if e.path.is_empty() { "<document>" } else { e.path.as_str() };
                if color {
                    println!(
                        "{} {} {} — {}",
                        "✖".red(),
                        kind.red().bold(),
                        locator.bold(),
                        e.message
                    );
                    println!("    {} {}", "↳".bright_black(), e.recommendation.bright_black());
                } else {
                    println!("✖ {} {} — {}", kind, locator, e.message);
                    println!("    ↳ {}", e.recommendation);
                }
            }
            let summary = summary_line(report);
            if color {
                if report.valid {
                    println!("{}", summary.green().bold());
                } else {
                    println!("{}", summary.bold());
                }
            } else {
                println!("{}", summary);
            }
        }
    }
}
