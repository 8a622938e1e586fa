//! Action module - audit trail entries attached to a request

use std::fmt;

/// Who carried out an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Executor {
    /// The AI agent
    AiAgent,
    /// A human reviewer
    Human,
}

impl Executor {
    /// Get the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Executor::AiAgent => "AI Agent",
            Executor::Human => "Human",
        }
    }
}

impl fmt::Display for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion state of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionStatus {
    /// Done
    Completed,
    /// Waiting on something else
    Pending,
}

impl ActionStatus {
    /// Get the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Completed => "Completed",
            ActionStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in a request's audit trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    /// What happened (e.g. "ERP Price Update Triggered")
    pub name: String,

    /// Who did it
    pub executor: Executor,

    /// Completion state
    pub status: ActionStatus,

    /// When it was recorded (seconds since Unix epoch)
    pub timestamp: u64,
}

impl ActionRecord {
    /// Create a new action record
    pub fn new(
        name: impl Into<String>,
        executor: Executor,
        status: ActionStatus,
        timestamp: u64,
    ) -> Self {
        Self {
            name: name.into(),
            executor,
            status,
            timestamp,
        }
    }

    /// Shorthand for a completed AI agent action
    pub fn agent_completed(name: impl Into<String>, timestamp: u64) -> Self {
        Self::new(name, Executor::AiAgent, ActionStatus::Completed, timestamp)
    }
}
