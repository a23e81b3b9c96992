//! Report formatting

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::check::CheckStatus;
use super::runner::HealthCheckReport;

fn status_label(status: CheckStatus) -> String {
    match status {
        CheckStatus::Pass => "PASS".green().to_string(),
        CheckStatus::Warn => "WARN".yellow().to_string(),
        CheckStatus::Fail => "FAIL".red().to_string(),
    }
}

/// Formats a report as a table followed by a summary line
pub fn format_report(report: &HealthCheckReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Check", "Status", "Duration", "Message"]);

    for (name, result) in &report.results {
        builder.push_record([
            name.to_string(),
            status_label(result.status),
            format!("{:.2?}", result.duration),
            result.message.clone(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    let overall = match report.exit_code() {
        0 => "HEALTHY".green().bold(),
        2 => "HEALTHY (with warnings)".yellow().bold(),
        _ => "UNHEALTHY".red().bold(),
    };

    format!(
        "{table}\n\n{} {} checks: {} passed, {} warned, {} failed\n",
        overall,
        report.total(),
        report.count(CheckStatus::Pass),
        report.count(CheckStatus::Warn),
        report.count(CheckStatus::Fail),
    )
}

/// Prints the report and the details of every check that has any
pub fn print_report(report: &HealthCheckReport) {
    println!("{}", format_report(report));

    for (name, result) in &report.results {
        if result.details.is_empty() {
            continue;
        }
        println!("{}", name.bold());
        for line in &result.details {
            println!("  {line}");
        }
    }
}
