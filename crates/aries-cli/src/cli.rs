//! CLI command definitions and argument parsing.

use aries_domain::{RequestStatus, VendorCategory};
use aries_triage::{DecisionFilter, ReviewReason, TriageConfig};
use clap::{Args, Parser, Subcommand};

/// ARIES CLI - Triage vendor price change requests.
#[derive(Debug, Parser)]
#[command(name = "aries")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ARIES_CONFIG")]
    pub config: Option<String>,

    /// Replace the configured thresholds with a preset
    #[arg(short, long, value_enum, global = true)]
    pub preset: Option<PresetArg>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// Threshold presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PresetArg {
    /// Standard thresholds
    Default,
    /// Tighter thresholds, strategic vendors escalate
    Strict,
    /// Looser thresholds
    Lenient,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate and triage a synthetic batch of requests
    Generate(GenerateArgs),

    /// Classify a single request
    Classify(ClassifyArgs),

    /// Show the human review queue, most urgent first
    Queue(QueueArgs),

    /// Show dashboard KPIs
    Kpis(KpisArgs),

    /// Show one request in detail
    Show(ShowArgs),

    /// Show the decision history of settled requests, newest first
    History(HistoryArgs),

    /// Enter the interactive review desk
    Repl(ReplArgs),
}

/// Settings for the synthetic batch a command works on.
#[derive(Debug, Clone, Default, Args)]
pub struct DatasetArgs {
    /// Number of requests to generate
    #[arg(short = 'n', long)]
    pub count: Option<u32>,

    /// RNG seed (same seed, same batch)
    #[arg(short, long, env = "ARIES_SEED")]
    pub seed: Option<u64>,

    /// Use the randomized demo policy instead of the standard one
    #[arg(long)]
    pub randomized: bool,
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Only show requests with this status
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Only show requests whose id or vendor contains this text
    #[arg(short, long)]
    pub text: Option<String>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Vendor name
    #[arg(long)]
    pub vendor: String,

    /// Vendor category
    #[arg(long, value_enum, default_value = "non-strategic")]
    pub category: CategoryArg,

    /// Vendor trust score (0-100)
    #[arg(long)]
    pub trust: f64,

    /// Price change in percent (negative for a reduction)
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,

    /// Margin impact in percent (negative for erosion)
    #[arg(long, allow_negative_numbers = true)]
    pub margin: f64,

    /// Agent confidence (0-100)
    #[arg(long)]
    pub confidence: f64,

    /// Hours left before the SLA is breached
    #[arg(long, default_value = "24")]
    pub sla: u32,

    /// Request id assigned upstream
    #[arg(long)]
    pub id: Option<String>,
}

/// Arguments for the queue command.
#[derive(Debug, Parser)]
pub struct QueueArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Only show requests waiting for this reason
    #[arg(short, long, value_enum)]
    pub reason: Option<ReasonArg>,
}

/// Arguments for the kpis command.
#[derive(Debug, Parser)]
pub struct KpisArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Request id (e.g. PCR-2024-0007)
    pub id: String,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// Arguments for the history command.
#[derive(Debug, Parser)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Which entries to show
    #[arg(long, value_enum, default_value = "all")]
    pub filter: HistoryFilterArg,

    /// Maximum number of entries
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the repl command.
#[derive(Debug, Parser)]
pub struct ReplArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// Vendor category argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CategoryArg {
    /// Strategic vendor
    Strategic,
    /// Approved, non-strategic vendor
    NonStrategic,
    /// Sender not in the vendor directory
    Unknown,
}

/// Status argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StatusArg {
    /// Applied
    Processed,
    /// Held
    Pending,
    /// Auto-approved by the agent
    AutoApproved,
    /// Rejected
    AutoRejected,
    /// Waiting on a reviewer
    HumanReview,
}

/// Review reason argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReasonArg {
    /// Unknown sender
    Unknown,
    /// Margin threshold breach
    Margin,
    /// Missing information
    Missing,
    /// Manual review required
    Other,
}

/// Decision history filter argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum HistoryFilterArg {
    /// Every decision and completed action
    All,
    /// Agent decisions and actions
    Ai,
    /// Reviewer decisions and actions
    Human,
    /// Rejections only
    Rejected,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl PresetArg {
    /// Thresholds for this preset.
    pub fn config(self) -> TriageConfig {
        match self {
            PresetArg::Default => TriageConfig::default(),
            PresetArg::Strict => TriageConfig::strict(),
            PresetArg::Lenient => TriageConfig::lenient(),
        }
    }
}

impl From<CategoryArg> for VendorCategory {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Strategic => VendorCategory::Strategic,
            CategoryArg::NonStrategic => VendorCategory::NonStrategic,
            CategoryArg::Unknown => VendorCategory::Unknown,
        }
    }
}

impl From<StatusArg> for RequestStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Processed => RequestStatus::Processed,
            StatusArg::Pending => RequestStatus::Pending,
            StatusArg::AutoApproved => RequestStatus::AutoApproved,
            StatusArg::AutoRejected => RequestStatus::AutoRejected,
            StatusArg::HumanReview => RequestStatus::HumanReview,
        }
    }
}

impl From<ReasonArg> for ReviewReason {
    fn from(reason: ReasonArg) -> Self {
        match reason {
            ReasonArg::Unknown => ReviewReason::UnknownSender,
            ReasonArg::Margin => ReviewReason::MarginBreach,
            ReasonArg::Missing => ReviewReason::MissingInformation,
            ReasonArg::Other => ReviewReason::Other,
        }
    }
}

impl From<HistoryFilterArg> for DecisionFilter {
    fn from(filter: HistoryFilterArg) -> Self {
        match filter {
            HistoryFilterArg::All => DecisionFilter::All,
            HistoryFilterArg::Ai => DecisionFilter::Ai,
            HistoryFilterArg::Human => DecisionFilter::Human,
            HistoryFilterArg::Rejected => DecisionFilter::Rejected,
        }
    }
}
