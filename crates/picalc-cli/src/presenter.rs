//! CLI result presenter.

use std::fmt::Write as _;

use picalc_core::digits::DigitString;
use picalc_orchestration::interfaces::ResultPresenter;
use picalc_orchestration::report::TestReport;

use crate::output::{format_digits, format_duration, format_number};
use crate::ui;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    json: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, json: bool) -> Self {
        Self {
            verbose,
            quiet,
            json,
        }
    }
}

/// Render the self-test table, one row per formula.
#[must_use]
pub fn format_report(report: &TestReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:-<60}", "");
    for entry in &report.entries {
        let status = if entry.passed { "PASS" } else { "FAIL" };
        let detail = entry
            .mismatch_index
            .map(|index| format!("first mismatch at digit {index}"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  {:<12} {:>10} [{status}] {detail}",
            entry.name,
            format_duration(entry.elapsed),
        );
    }
    out.trim_end().to_string()
}

/// Serialize self-test reports as a JSON array.
pub fn format_reports_json(reports: &[TestReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

impl ResultPresenter for CLIResultPresenter {
    fn present_digits(&self, digits: &DigitString) {
        println!("{digits}");
    }

    fn present_all(&self, results: &[(String, DigitString)]) {
        for (name, digits) in results {
            if self.quiet {
                println!("{digits}");
            } else {
                println!("{name:<12} {}", format_digits(digits, self.verbose));
            }
        }
    }

    fn present_reports(&self, reports: &[TestReport]) {
        if self.json {
            match format_reports_json(reports) {
                Ok(json) => println!("{json}"),
                Err(e) => ui::print_error(&format!("cannot serialize report: {e}")),
            }
            return;
        }
        if self.quiet {
            return;
        }

        for report in reports {
            ui::print_header(&format!(
                "Formula self-test ({} digits)",
                format_number(report.precision)
            ));
            println!("{}", format_report(report));

            let failed = report.failures().count();
            if report.passed() {
                ui::print_success(&format!("{} formulas passed", report.entries.len()));
            } else {
                ui::print_failure(&format!(
                    "{failed} of {} formulas failed",
                    report.entries.len()
                ));
            }
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
