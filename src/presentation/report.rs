//! Run Reporter
//!
//! Turns a finished `RunResult` into the final summary on stdout: a text
//! tally (with the per-artifact ledger at `-v`) or a single JSON document.

use crossterm::style::{Color, Stylize};

use crate::domain::entities::{
    ReconciliationOutcome, RunResult, ServiceAction, Tally, ValidationOutcome,
};

mod colors {
    use crossterm::style::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const DIM: Color = Color::DarkGrey;
}

/// Output format for the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Human-readable summary
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReport {
    pub color: bool,
    pub verbose: u8,
}

impl TextReport {
    pub fn render(&self, result: &RunResult) -> String {
        let dry_run = result.mode.is_dry_run();
        let tally = result.reported_tally();
        let mut lines = Vec::new();

        if !dry_run && tally.changes() == 0 && result.is_success() {
            lines.push(format!(
                "{} Already up to date ({} entries checked)",
                self.paint("✓", colors::SUCCESS),
                tally.total()
            ));
            if self.verbose > 0 {
                self.push_ledger(&mut lines, result);
            }
            return lines.join("\n");
        }

        let headline = if !result.is_success() {
            format!(
                "{} Deploy failed: configuration rejected",
                self.paint("✗", colors::ERROR)
            )
        } else if dry_run {
            format!(
                "{} Dry run: no changes made",
                self.paint("○", colors::WARNING)
            )
        } else {
            format!("{} Deploy complete", self.paint("✓", colors::SUCCESS))
        };
        lines.push(headline);
        lines.push(String::new());

        let (created, updated) = if dry_run {
            ("Would create", "Would update")
        } else {
            ("Created", "Updated")
        };
        lines.extend(tally_rows(&tally, created, updated));
        lines.push(String::new());

        lines.push(format!("  Validation: {}", validation_text(result.validation)));
        lines.push(format!(
            "  Service:    {}",
            service_text(result.service_action, result.service_planned)
        ));

        if self.verbose > 0 {
            self.push_ledger(&mut lines, result);
        }
        lines.join("\n")
    }

    fn push_ledger(&self, lines: &mut Vec<String>, result: &RunResult) {
        lines.push(String::new());
        lines.push(format!("  Entries ({}):", result.entries.len()));
        for entry in &result.entries {
            let (label, color) = match entry.outcome {
                ReconciliationOutcome::Created => ("created", colors::SUCCESS),
                ReconciliationOutcome::Updated => ("updated", colors::WARNING),
                ReconciliationOutcome::Ignored => ("ignored", colors::DIM),
            };
            lines.push(format!(
                "    {} {} ({})",
                self.paint(&format!("{:<8}", label), color),
                entry.path.display(),
                entry.name
            ));
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

fn tally_rows(tally: &Tally, created: &str, updated: &str) -> Vec<String> {
    [
        (created, tally.created),
        (updated, tally.updated),
        ("Unchanged", tally.ignored),
    ]
    .into_iter()
    .map(|(label, count)| format!("  {:<13}{:>3}", label, count))
    .collect()
}

fn validation_text(outcome: ValidationOutcome) -> String {
    match outcome {
        ValidationOutcome::Skipped => "skipped".to_string(),
        ValidationOutcome::Valid => "passed".to_string(),
        ValidationOutcome::Invalid { code: Some(code) } => format!("failed (exit code {})", code),
        ValidationOutcome::Invalid { code: None } => "failed (terminated)".to_string(),
    }
}

fn service_text(action: ServiceAction, planned: bool) -> &'static str {
    match (action, planned) {
        (ServiceAction::Installed, false) => "installed and started",
        (ServiceAction::Installed, true) => "would install and start",
        (ServiceAction::Restarted, false) => "restarted",
        (ServiceAction::Restarted, true) => "would restart",
        (ServiceAction::Disabled, _) => "not managed",
        (ServiceAction::None, _) => "no action",
    }
}

/// The whole run result as pretty-printed JSON
pub fn render_json(result: &RunResult) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(result)?;
    if let Some(object) = value.as_object_mut() {
        object.insert("success".to_string(), result.is_success().into());
        object.insert(
            "reported".to_string(),
            serde_json::to_value(result.reported_tally())?,
        );
    }
    serde_json::to_string_pretty(&value)
}
