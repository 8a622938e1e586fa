//! Decision history over settled requests

use aries_domain::{
    ActionStatus, DecisionOwner, Executor, PriceChangeRequest, RequestId, RequestStatus,
};
use std::fmt;

/// Which entries of the decision log to keep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecisionFilter {
    /// Everything
    #[default]
    All,
    /// Decisions the agent owns and actions it executed
    Ai,
    /// Decisions a reviewer owns and actions a reviewer executed
    Human,
    /// Rejection decisions only
    Rejected,
}

impl DecisionFilter {
    /// Every filter, in menu order
    pub const ALL: [DecisionFilter; 4] = [
        DecisionFilter::All,
        DecisionFilter::Ai,
        DecisionFilter::Human,
        DecisionFilter::Rejected,
    ];

    /// Short key (`all`, `ai`, `human`, `rejected`)
    pub fn key(&self) -> &'static str {
        match self {
            DecisionFilter::All => "all",
            DecisionFilter::Ai => "ai",
            DecisionFilter::Human => "human",
            DecisionFilter::Rejected => "rejected",
        }
    }

    /// Parse a key
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|f| f.key() == s)
    }

    fn keeps(&self, entry: &DecisionLogEntry) -> bool {
        match self {
            DecisionFilter::All => true,
            DecisionFilter::Ai => entry.by_agent(),
            DecisionFilter::Human => entry.by_human(),
            DecisionFilter::Rejected => matches!(
                entry.kind,
                LogEntryKind::Decision {
                    outcome: DecisionOutcome::Rejected,
                    ..
                }
            ),
        }
    }
}

/// Final effect of a settled request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionOutcome {
    /// New price pushed to the ERP
    Synced,
    /// Change refused
    Rejected,
}

impl DecisionOutcome {
    fn of(status: RequestStatus) -> Self {
        if status == RequestStatus::AutoRejected {
            DecisionOutcome::Rejected
        } else {
            DecisionOutcome::Synced
        }
    }

    /// Get the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionOutcome::Synced => "Synced to ERP",
            DecisionOutcome::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for DecisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a log entry records
#[derive(Debug, Clone, PartialEq)]
pub enum LogEntryKind {
    /// The request's final decision
    Decision {
        /// Synced or rejected
        outcome: DecisionOutcome,
        /// Who made the call
        owner: DecisionOwner,
        /// Reason, when rejected
        rejection_reason: Option<String>,
    },
    /// A completed audit action
    Action {
        /// Action name
        name: String,
        /// Who carried it out
        executor: Executor,
    },
}

/// One line of the decision log
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionLogEntry {
    /// Request the entry belongs to
    pub request_id: RequestId,
    /// Vendor name
    pub vendor: String,
    /// Status the request settled in
    pub status: RequestStatus,
    /// Decision or action
    pub kind: LogEntryKind,
    /// Seconds since Unix epoch
    pub timestamp: u64,
}

impl DecisionLogEntry {
    /// Decided or executed by the agent
    pub fn by_agent(&self) -> bool {
        match &self.kind {
            LogEntryKind::Decision { owner, .. } => *owner == DecisionOwner::AiAgent,
            LogEntryKind::Action { executor, .. } => *executor == Executor::AiAgent,
        }
    }

    /// Decided or executed by a reviewer
    pub fn by_human(&self) -> bool {
        match &self.kind {
            LogEntryKind::Decision { owner, .. } => *owner == DecisionOwner::Human,
            LogEntryKind::Action { executor, .. } => *executor == Executor::Human,
        }
    }

    /// Label for the entry (outcome or action name)
    pub fn label(&self) -> &str {
        match &self.kind {
            LogEntryKind::Decision { outcome, .. } => outcome.as_str(),
            LogEntryKind::Action { name, .. } => name.as_str(),
        }
    }
}

/// Decision log over settled requests, newest first
///
/// Each settled request contributes one decision entry, stamped with its
/// receipt time, and one entry per completed action. Requests still pending
/// or in human review are left out. Entries with equal timestamps keep
/// request order, decision before actions.
pub fn decision_log<'a>(
    requests: impl IntoIterator<Item = &'a PriceChangeRequest>,
    filter: DecisionFilter,
) -> Vec<DecisionLogEntry> {
    let mut log = Vec::new();

    for request in requests.into_iter().filter(|r| r.status.is_settled()) {
        log.push(DecisionLogEntry {
            request_id: request.id.clone(),
            vendor: request.vendor.name.clone(),
            status: request.status,
            kind: LogEntryKind::Decision {
                outcome: DecisionOutcome::of(request.status),
                owner: request.decision_owner,
                rejection_reason: request.rejection_reason.clone(),
            },
            timestamp: request.received_at,
        });

        for action in request
            .actions
            .iter()
            .filter(|a| a.status == ActionStatus::Completed)
        {
            log.push(DecisionLogEntry {
                request_id: request.id.clone(),
                vendor: request.vendor.name.clone(),
                status: request.status,
                kind: LogEntryKind::Action {
                    name: action.name.clone(),
                    executor: action.executor,
                },
                timestamp: action.timestamp,
            });
        }
    }

    log.retain(|entry| filter.keeps(entry));
    log.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    log
}
