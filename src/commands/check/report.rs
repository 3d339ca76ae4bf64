//! Report rendering and audit event for `buildgate check`.

use super::steps::{StepResult, StepStatus};
use buildgate::error::{GateError, Result};
use buildgate::events::{Event, EventAction, append_event};
use serde::Serialize;
use serde_json::json;
use std::path::Path;

/// Outcome of a full preflight run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub snapshot: String,
    pub project: String,
    pub passed: bool,
    pub steps: Vec<StepResult>,
}

impl CheckReport {
    pub fn new(snapshot: &Path, project: &str, steps: Vec<StepResult>) -> Self {
        let passed = !steps.iter().any(StepResult::is_failure);
        Self {
            snapshot: snapshot.display().to_string(),
            project: project.to_string(),
            passed,
            steps,
        }
    }

    /// The step that failed, if any.
    pub fn failure(&self) -> Option<&StepResult> {
        self.steps.iter().find(|step| step.is_failure())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GateError::UserError(format!("failed to serialize report: {}", e)))
    }

    /// Render the report as plain text.
    pub fn to_text(&self) -> String {
        let mut out = format!("Checked snapshot: {}\n", self.snapshot);
        let project = if self.project.is_empty() {
            "(none)"
        } else {
            self.project.as_str()
        };
        out.push_str(&format!("  Project: {}\n\n", project));

        for step in &self.steps {
            let status = match step.status {
                StepStatus::Pass => "PASS",
                StepStatus::Fail => "FAIL",
                StepStatus::Skip => "SKIP",
            };
            out.push_str(&format!("  {}: {}\n", step.name, status));
            if let Some(message) = &step.message {
                out.push_str(&format!("    {}\n", message));
            }
        }

        out.push('\n');
        if self.passed {
            out.push_str("All checks passed.\n");
        } else {
            out.push_str("Preflight failed. The build must not be submitted.\n");
        }
        out
    }

    /// Append a `check` event describing this report to the events log.
    pub fn record_event(&self, events_log: &Path) -> Result<()> {
        let failure = self.failure();
        let mut event = Event::new(EventAction::Check).with_details(json!({
            "snapshot": self.snapshot,
            "passed": self.passed,
            "failed_step": failure.map(|step| step.name),
            "rule": failure.and_then(|step| step.rule),
            "message": failure.and_then(|step| step.message.clone()),
        }));
        if !self.project.is_empty() {
            event = event.with_project(&self.project);
        }
        append_event(events_log, &event)
    }
}
