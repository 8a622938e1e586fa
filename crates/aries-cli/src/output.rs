//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use aries_domain::{PriceChangeRequest, RequestStatus};
use aries_triage::{
    current_timestamp, missing_information_request, DecisionLogEntry, DecisionOutcome, LogEntryKind,
    ReviewReason, TriageMetrics,
};
use colored::*;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a list of requests.
    pub fn format_requests(&self, requests: &[PriceChangeRequest]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = requests.iter().map(request_json).collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => Ok(self.requests_table(requests)),
            OutputFormat::Quiet => Ok(ids(requests)),
        }
    }

    /// Format the human review queue.
    pub fn format_queue(&self, queue: &[PriceChangeRequest], margin_threshold: f64) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = queue
                    .iter()
                    .map(|r| {
                        let reason = ReviewReason::of(r);
                        let mut value = request_json(r);
                        value["review_reason"] = json!({
                            "key": reason.key(),
                            "title": reason.title(),
                            "description": reason.description(margin_threshold),
                        });
                        value
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => Ok(self.queue_table(queue)),
            OutputFormat::Quiet => Ok(ids(queue)),
        }
    }

    /// Format one request in detail.
    pub fn format_request(&self, request: &PriceChangeRequest) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut value = request_json(request);
                if let Some(notice) = missing_information_request(request) {
                    value["missing_information_request"] = json!({
                        "subject": notice.subject,
                        "body": notice.body,
                    });
                }
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => Ok(self.request_detail(request)),
            OutputFormat::Quiet => Ok(request.id.to_string()),
        }
    }

    /// Format dashboard KPIs.
    pub fn format_metrics(&self, metrics: &TriageMetrics) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let reasons: serde_json::Map<String, serde_json::Value> = metrics
                    .review_reasons
                    .iter()
                    .map(|(reason, count)| (reason.key().to_string(), json!(count)))
                    .collect();
                let value = json!({
                    "total": metrics.total,
                    "processed": metrics.processed,
                    "pending": metrics.pending,
                    "human_review": metrics.human_review,
                    "auto_approved": metrics.auto_approved,
                    "rejected": metrics.rejected,
                    "ai_decisions": metrics.ai_decisions,
                    "human_decisions": metrics.human_decisions,
                    "avg_margin_impact": metrics.avg_margin_impact,
                    "automation_rate": metrics.automation_rate(),
                    "review_reasons": reasons,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => Ok(self.metrics_table(metrics)),
            OutputFormat::Quiet => Ok(format!(
                "{} {} {} {}",
                metrics.total, metrics.processed, metrics.pending, metrics.human_review
            )),
        }
    }

    /// Format the decision log.
    pub fn format_decision_log(&self, log: &[DecisionLogEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = log.iter().map(log_entry_json).collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => Ok(self.decision_log_table(log)),
            OutputFormat::Quiet => {
                let lines: Vec<String> = log
                    .iter()
                    .map(|e| format!("{} {}", e.request_id, e.label()))
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }

    fn requests_table(&self, requests: &[PriceChangeRequest]) -> String {
        if requests.is_empty() {
            return self.colorize("No requests found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record([
            "ID", "Vendor", "Category", "Price", "Margin", "Conf", "Status", "Owner", "SLA",
        ]);

        for r in requests {
            builder.push_record([
                r.id.to_string(),
                r.vendor.name.clone(),
                r.vendor.category.to_string(),
                format!("{:+.1}%", r.price_change_pct),
                format!("{:+.2}%", r.margin_impact_pct),
                format!("{:.0}%", r.confidence_pct),
                self.status(r.status),
                r.decision_owner.to_string(),
                format!("{}h", r.sla_hours),
            ]);
        }

        self.render(builder)
    }

    fn queue_table(&self, queue: &[PriceChangeRequest]) -> String {
        if queue.is_empty() {
            return self.colorize("Review queue is empty.", "green");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Vendor", "Reason", "Triggers", "Price", "SLA", "Reviewer"]);

        for r in queue {
            builder.push_record([
                r.id.to_string(),
                r.vendor.name.clone(),
                ReviewReason::of(r).to_string(),
                r.triggers.to_string(),
                format!("{:+.1}%", r.price_change_pct),
                self.sla(r.sla_hours),
                r.assigned_reviewer.clone().unwrap_or_default(),
            ]);
        }

        self.render(builder)
    }

    fn decision_log_table(&self, log: &[DecisionLogEntry]) -> String {
        if log.is_empty() {
            return self.colorize("No decisions recorded.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["When", "Request", "Vendor", "Entry", "By", "Status"]);

        for entry in log {
            let (label, by) = match &entry.kind {
                LogEntryKind::Decision { outcome, owner, .. } => {
                    let color = match outcome {
                        DecisionOutcome::Synced => "green",
                        DecisionOutcome::Rejected => "red",
                    };
                    (self.colorize(outcome.as_str(), color), owner.to_string())
                }
                LogEntryKind::Action { name, executor } => (name.clone(), executor.to_string()),
            };
            builder.push_record([
                age(entry.timestamp),
                entry.request_id.to_string(),
                entry.vendor.clone(),
                label,
                by,
                self.status(entry.status),
            ]);
        }

        self.render(builder)
    }

    fn request_detail(&self, r: &PriceChangeRequest) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);

        let mut rows: Vec<(&str, String)> = vec![
            ("ID", r.id.to_string()),
            ("Vendor", r.vendor.name.clone()),
            ("Category", r.vendor.category.to_string()),
            ("Trust score", format!("{}/100", r.vendor.trust_score)),
            ("Price change", format!("{:+.1}%", r.price_change_pct)),
            ("Margin impact", format!("{:+.2}%", r.margin_impact_pct)),
            ("Confidence", format!("{:.0}%", r.confidence_pct)),
            ("Status", self.status(r.status)),
            ("Decision owner", r.decision_owner.to_string()),
            ("Triggers", r.triggers.to_string()),
            ("Received", age(r.received_at)),
            ("SLA", self.sla(r.sla_hours)),
        ];
        if let Some(reviewer) = &r.assigned_reviewer {
            rows.push(("Assigned reviewer", reviewer.clone()));
        }
        if let Some(reviewer) = &r.reviewed_by {
            rows.push(("Reviewed by", reviewer.clone()));
        }
        if let Some(reason) = &r.rejection_reason {
            rows.push(("Rejection reason", reason.clone()));
        }
        if let Some(comment) = &r.human_comment {
            rows.push(("Comment", comment.clone()));
        }
        if !r.missing_items.is_empty() {
            let items: Vec<&str> = r.missing_items.iter().map(|i| i.label()).collect();
            rows.push(("Missing items", items.join(", ")));
        }
        rows.push(("Rationale", r.rationale.clone()));

        for (field, value) in rows {
            builder.push_record([field.to_string(), value]);
        }

        let mut out = self.render(builder);
        if !r.actions.is_empty() {
            let mut actions = Builder::default();
            actions.push_record(["Action", "Executor", "Status"]);
            for action in &r.actions {
                actions.push_record([
                    action.name.clone(),
                    action.executor.to_string(),
                    action.status.to_string(),
                ]);
            }
            out.push('\n');
            out.push_str(&self.render(actions));
        }
        if let Some(notice) = missing_information_request(r) {
            out.push_str("\n\n");
            out.push_str(&self.colorize(&format!("Subject: {}", notice.subject), "cyan"));
            out.push_str("\n\n");
            out.push_str(&notice.body);
        }
        out
    }

    fn metrics_table(&self, m: &TriageMetrics) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Metric", "Value"]);
        builder.push_record(["Total requests".to_string(), m.total.to_string()]);
        builder.push_record(["Processed".to_string(), m.processed.to_string()]);
        builder.push_record(["Pending".to_string(), m.pending.to_string()]);
        builder.push_record(["Human review".to_string(), m.human_review.to_string()]);
        builder.push_record(["Auto-approved".to_string(), m.auto_approved.to_string()]);
        builder.push_record(["Rejected".to_string(), m.rejected.to_string()]);
        builder.push_record(["AI decisions".to_string(), m.ai_decisions.to_string()]);
        builder.push_record(["Human decisions".to_string(), m.human_decisions.to_string()]);
        builder.push_record(["Avg margin impact".to_string(), format!("{:+.2}%", m.avg_margin_impact)]);
        builder.push_record(["Automation rate".to_string(), format!("{:.1}%", m.automation_rate())]);
        for (reason, count) in &m.review_reasons {
            builder.push_record([format!("  {}", reason), count.to_string()]);
        }
        self.render(builder)
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn status(&self, status: RequestStatus) -> String {
        let color = match status {
            RequestStatus::AutoApproved | RequestStatus::Processed => "green",
            RequestStatus::AutoRejected => "red",
            RequestStatus::HumanReview => "yellow",
            RequestStatus::Pending => "blue",
        };
        self.colorize(status.as_str(), color)
    }

    fn sla(&self, hours: u32) -> String {
        let text = format!("{}h", hours);
        if hours <= 4 {
            self.colorize(&text, "red")
        } else {
            text
        }
    }

    /// Format a recorded reviewer decision.
    pub fn decision_recorded(&self, request: &PriceChangeRequest) -> String {
        let reviewer = request.reviewed_by.as_deref().unwrap_or("reviewer");
        self.success(&format!(
            "{} is now {} (decided by {})",
            request.id, request.status, reviewer
        ))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// JSON representation of a request.
pub fn request_json(r: &PriceChangeRequest) -> serde_json::Value {
    let triggers: Vec<&str> = r.triggers.iter().map(|t| t.as_str()).collect();
    let missing: Vec<&str> = r.missing_items.iter().map(|i| i.label()).collect();
    let actions: Vec<serde_json::Value> = r
        .actions
        .iter()
        .map(|a| {
            json!({
                "name": a.name,
                "executor": a.executor.as_str(),
                "status": a.status.as_str(),
                "timestamp": a.timestamp,
            })
        })
        .collect();

    json!({
        "id": r.id.to_string(),
        "vendor": r.vendor.name,
        "vendor_category": r.vendor.category.as_str(),
        "vendor_trust_score": r.vendor.trust_score,
        "price_change_pct": r.price_change_pct,
        "margin_impact_pct": r.margin_impact_pct,
        "confidence_pct": r.confidence_pct,
        "status": r.status.as_str(),
        "decision_owner": r.decision_owner.as_str(),
        "triggers": triggers,
        "rationale": r.rationale,
        "rejection_reason": r.rejection_reason,
        "sla_hours": r.sla_hours,
        "received_at": r.received_at,
        "assigned_reviewer": r.assigned_reviewer,
        "reviewed_by": r.reviewed_by,
        "human_comment": r.human_comment,
        "missing_items": missing,
        "actions": actions,
        "version": r.version,
    })
}

/// JSON representation of a decision log entry.
fn log_entry_json(entry: &DecisionLogEntry) -> serde_json::Value {
    let mut value = json!({
        "request_id": entry.request_id.to_string(),
        "vendor": entry.vendor,
        "status": entry.status.as_str(),
        "timestamp": entry.timestamp,
    });
    match &entry.kind {
        LogEntryKind::Decision {
            outcome,
            owner,
            rejection_reason,
        } => {
            value["type"] = json!("decision");
            value["outcome"] = json!(outcome.as_str());
            value["decision_owner"] = json!(owner.as_str());
            value["rejection_reason"] = json!(rejection_reason);
        }
        LogEntryKind::Action { name, executor } => {
            value["type"] = json!("action");
            value["name"] = json!(name);
            value["executor"] = json!(executor.as_str());
        }
    }
    value
}

fn ids(requests: &[PriceChangeRequest]) -> String {
    let ids: Vec<String> = requests.iter().map(|r| r.id.to_string()).collect();
    ids.join("\n")
}

/// Human-friendly age of a timestamp, e.g. `2d 5h ago`.
fn age(received_at: u64) -> String {
    let elapsed = current_timestamp().saturating_sub(received_at);
    let days = elapsed / 86_400;
    let hours = (elapsed % 86_400) / 3_600;
    match (days, hours) {
        (0, 0) => "just now".to_string(),
        (0, h) => format!("{}h ago", h),
        (d, h) => format!("{}d {}h ago", d, h),
    }
}
