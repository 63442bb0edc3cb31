use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Processing,
    Complete,
    Warning,
    Error,
}

/// One pipeline stage record, streamed back to the caller as `agent_logs`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AgentLogEntry {
    pub agent: String,
    pub message: String,
    pub status: LogStatus,
}

/// Ordered record of pipeline progress.
///
/// Entries are appended in stage order as each stage starts and the last
/// entry is updated in place when the stage finishes, so the log never
/// reports a stage as `processing` after the pipeline has moved on or
/// failed.
#[derive(Debug, Default, Clone)]
pub struct ExecutionLog {
    entries: Vec<AgentLogEntry>,
}

impl ExecutionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a stage: append a `processing` entry.
    pub fn begin(&mut self, agent: &str, message: impl Into<String>) {
        self.entries.push(AgentLogEntry {
            agent: agent.to_string(),
            message: message.into(),
            status: LogStatus::Processing,
        });
    }

    /// Close the current stage successfully.
    pub fn complete(&mut self) {
        if let Some(entry) = self.entries.last_mut() {
            entry.status = LogStatus::Complete;
        }
    }

    /// Close the current stage with a warning, appending a note to its
    /// message.
    pub fn warn(&mut self, note: &str) {
        if let Some(entry) = self.entries.last_mut() {
            entry.status = LogStatus::Warning;
            entry.message.push_str(note);
        }
    }

    /// Finalize the current stage as failed.
    pub fn fail(&mut self) {
        if let Some(entry) = self.entries.last_mut() {
            entry.status = LogStatus::Error;
        }
    }

    /// Append an already-finished entry (system notes, final summary).
    pub fn push(&mut self, agent: &str, message: impl Into<String>, status: LogStatus) {
        self.entries.push(AgentLogEntry {
            agent: agent.to_string(),
            message: message.into(),
            status,
        });
    }

    pub fn entries(&self) -> &[AgentLogEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<AgentLogEntry> {
        self.entries
    }
}
