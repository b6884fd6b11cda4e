//! Report rendering: coloured status lines for a terminal, or one JSON object

use colored::Colorize;
use serde::Serialize;

use crate::command::{Action, CommandReport, NO_ACTION_MESSAGE};
use crate::registry::TableDescriptor;

/// Severity of a status line, which decides its colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
    Notice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub level: Level,
    pub text: String,
}

impl StatusLine {
    pub fn styled(&self) -> String {
        match self.level {
            Level::Success => self.text.bright_green().to_string(),
            Level::Warning => self.text.yellow().to_string(),
            Level::Error => self.text.bright_red().to_string(),
            Level::Notice => self.text.red().to_string(),
        }
    }
}

/// Status lines for a report, in action order
pub fn status_lines(report: &CommandReport) -> Vec<StatusLine> {
    if report.is_noop() {
        return vec![StatusLine {
            level: Level::Notice,
            text: NO_ACTION_MESSAGE.to_string(),
        }];
    }

    report
        .actions
        .iter()
        .map(|action| StatusLine {
            level: match action {
                Action::Deleted { .. } => Level::Warning,
                Action::NoMatchingRows { .. } => Level::Error,
                Action::SequenceReset { .. } => Level::Success,
                Action::NoSequence { .. } => Level::Notice,
            },
            text: action.message(&report.table.db_table),
        })
        .collect()
}

// ============================================================================
// JSON Response Types
// ============================================================================

#[derive(Serialize)]
pub struct JsonResponse<'a> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<&'a TableDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<&'a [Action]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<'a> JsonResponse<'a> {
    pub fn from_report(report: &'a CommandReport) -> Self {
        Self {
            success: true,
            table: Some(&report.table),
            actions: Some(report.actions.as_slice()),
            message: report.is_noop().then(|| NO_ACTION_MESSAGE.to_string()),
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            table: None,
            actions: None,
            message: Some(message),
        }
    }
}

/// Print a report to stdout
pub fn print_report(report: &CommandReport, json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&JsonResponse::from_report(report))?);
    } else {
        for line in status_lines(report) {
            println!("{}", line.styled());
        }
    }
    Ok(())
}
