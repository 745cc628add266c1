use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    Me,
    Contact(String),
    Unknown,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::Me => write!(f, "Me"),
            Sender::Contact(handle) => write!(f, "{}", handle),
            Sender::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub rowid: i64,
    pub sent_at: DateTime<Utc>,
    pub sender: Sender,
    pub text: String,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let local: DateTime<Local> = self.sent_at.with_timezone(&Local);
        write!(
            f,
            "[{}] {}: {}",
            local.format("%Y-%m-%d %H:%M:%S"),
            self.sender,
            self.text
        )
    }
}

/// Classification of a single probe call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success { excerpt: String },
    ErrorFlagged { text: String },
    Fault { description: String },
}

impl ProbeOutcome {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            ProbeOutcome::Success { .. } => ExitStatus::Success,
            ProbeOutcome::ErrorFlagged { .. } | ProbeOutcome::Fault { .. } => ExitStatus::Failure,
        }
    }

    /// Lines written to the report sink for this outcome.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            ProbeOutcome::Success { excerpt } => vec![
                "SUCCESS: Successfully accessed messages database.".to_string(),
                format!("Sample output: {}...", excerpt),
            ],
            ProbeOutcome::ErrorFlagged { text } => vec![format!("FAILED: {}", text)],
            ProbeOutcome::Fault { description } => {
                vec![format!("FAILED: Exception occurred: {}", description)]
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}
