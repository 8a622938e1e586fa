//! Interactive review desk (Read-Eval-Print Loop).

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use aries_domain::traits::RequestQuery;
use aries_domain::{HumanDecision, RequestId, RequestStatus};
use aries_triage::{DecisionFilter, RejectionReason, ReviewReason, TriageConfig};
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::path::PathBuf;

/// Number of rows `list` and `history` show.
const LIST_LIMIT: usize = 20;

/// Run the interactive review desk over a seeded session.
pub fn run_repl(mut session: Session, config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info(&format!(
            "ARIES review desk - {} requests (seed {}). Type 'help' for commands, 'exit' to quit",
            session.desk.store().len(),
            session.seed
        ))
    );
    println!();

    // Initialize readline editor
    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Config(format!("Invalid history size: {}", e)))?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)
        .map_err(|e| CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e))))?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        let pending = session.desk.review_queue(None).map(|q| q.len()).unwrap_or(0);
        let prompt = format!("aries ({} to review)> ", pending);

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, &mut session, &config.triage, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// A rejection reason as typed: a catalog number or free text.
#[derive(Debug, Clone, PartialEq)]
pub enum ReasonInput {
    /// 1-based index into the catalog shown by `reasons`
    Catalog(usize),
    /// Free text
    Text(String),
}

/// REPL command type.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Leave the desk
    Exit,
    /// Show help
    Help,
    /// List requests, optionally by status and text
    List {
        /// Status filter
        status: Option<RequestStatus>,
        /// Id or vendor substring
        text: Option<String>,
    },
    /// Show the review queue
    Queue(Option<ReviewReason>),
    /// Show one request
    Show(RequestId),
    /// Record a reviewer decision
    Decide {
        /// Target request
        id: RequestId,
        /// Approve, reject or renegotiate
        decision: HumanDecision,
        /// Reviewer comment
        comment: Option<String>,
        /// Rejection reason (reject only)
        reason: Option<ReasonInput>,
    },
    /// Decision history, newest first
    History(DecisionFilter),
    /// List the standard rejection reasons
    Reasons,
    /// Show KPIs
    Kpis,
}

/// Parse a REPL command line.
pub fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "list" | "ls" => Ok(parse_list_command(&parts[1..])),
        "queue" => parse_queue_command(&parts[1..]),
        "show" => Ok(ReplCommand::Show(parse_id(&parts[1..], "show <id>")?)),
        "approve" | "renegotiate" => parse_decision_command(parts[0], &parts[1..]),
        "reject" => parse_reject_command(&parts[1..]),
        "history" => parse_history_command(&parts[1..]),
        "reasons" => Ok(ReplCommand::Reasons),
        "kpis" | "stats" => Ok(ReplCommand::Kpis),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

/// Execute a parsed REPL command against the session's desk.
fn execute_repl_command(
    cmd: ReplCommand,
    session: &mut Session,
    triage: &TriageConfig,
    formatter: &Formatter,
) -> Result<()> {
    let desk = &mut session.desk;

    match cmd {
        ReplCommand::List { status, text } => {
            let requests = desk.search(&RequestQuery {
                status,
                text,
                limit: Some(LIST_LIMIT),
            })?;
            println!("{}", formatter.format_requests(&requests)?);
        }
        ReplCommand::Queue(reason) => {
            let queue = desk.review_queue(reason)?;
            println!("{}", formatter.format_queue(&queue, triage.margin_erosion_threshold)?);
        }
        ReplCommand::Show(id) => {
            println!("{}", formatter.format_request(&desk.get(&id)?)?);
        }
        ReplCommand::Decide {
            id,
            decision,
            comment,
            reason,
        } => {
            let reason = reason.map(|r| resolve_reason(r, triage)).transpose()?;
            let request = desk.decide(&id, decision, comment.as_deref(), reason.as_deref())?;
            println!("{}", formatter.decision_recorded(&request));
        }
        ReplCommand::History(filter) => {
            let mut log = desk.decision_log(filter)?;
            log.truncate(LIST_LIMIT);
            println!("{}", formatter.format_decision_log(&log)?);
        }
        ReplCommand::Reasons => {
            for (n, reason) in catalog(triage).iter().enumerate() {
                println!("  {}. {}", n + 1, reason);
            }
        }
        ReplCommand::Kpis => {
            println!("{}", formatter.format_metrics(&desk.metrics()?)?);
        }
        ReplCommand::Exit | ReplCommand::Help => {}
    }

    Ok(())
}

/// The rejection catalog, citing the configured price ceiling.
fn catalog(triage: &TriageConfig) -> Vec<RejectionReason> {
    RejectionReason::CATALOG
        .iter()
        .map(|reason| match reason {
            RejectionReason::PriceIncreaseExceedsThreshold { .. } => {
                RejectionReason::PriceIncreaseExceedsThreshold {
                    threshold: triage.auto_reject_above_increase,
                }
            }
            other => *other,
        })
        .collect()
}

fn resolve_reason(input: ReasonInput, triage: &TriageConfig) -> Result<String> {
    match input {
        ReasonInput::Text(text) => Ok(text),
        ReasonInput::Catalog(n) => catalog(triage)
            .get(n.wrapping_sub(1))
            .map(ToString::to_string)
            .ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "No rejection reason #{}. Type 'reasons' for the list.",
                    n
                ))
            }),
    }
}

// Simple command parsers for REPL (minimal argument parsing)

fn parse_list_command(args: &[&str]) -> ReplCommand {
    // `list [status] [text...]`; multi-word statuses use a dash (human-review)
    let status = args.first().and_then(|s| RequestStatus::parse(s));
    let rest = if status.is_some() { &args[1..] } else { args };
    let text = (!rest.is_empty()).then(|| rest.join(" "));

    ReplCommand::List { status, text }
}

fn parse_queue_command(args: &[&str]) -> Result<ReplCommand> {
    match args.first() {
        None => Ok(ReplCommand::Queue(None)),
        Some(key) => ReviewReason::parse(key)
            .map(|reason| ReplCommand::Queue(Some(reason)))
            .ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "Unknown review reason '{}'. Use unknown, margin, missing or other.",
                    key
                ))
            }),
    }
}

fn parse_history_command(args: &[&str]) -> Result<ReplCommand> {
    match args.first() {
        None => Ok(ReplCommand::History(DecisionFilter::All)),
        Some(key) => DecisionFilter::parse(key)
            .map(ReplCommand::History)
            .ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "Unknown history filter '{}'. Use all, ai, human or rejected.",
                    key
                ))
            }),
    }
}

fn parse_id(args: &[&str], usage: &str) -> Result<RequestId> {
    let raw = args
        .first()
        .ok_or_else(|| CliError::InvalidInput(format!("Usage: {}", usage)))?;
    RequestId::parse(raw).map_err(CliError::InvalidInput)
}

fn parse_decision_command(verb: &str, args: &[&str]) -> Result<ReplCommand> {
    let usage = format!("{} <id> [comment]", verb);
    let id = parse_id(args, &usage)?;
    let decision = HumanDecision::parse(verb)
        .ok_or_else(|| CliError::InvalidInput(format!("Usage: {}", usage)))?;
    let comment = (args.len() > 1).then(|| args[1..].join(" "));

    Ok(ReplCommand::Decide {
        id,
        decision,
        comment,
        reason: None,
    })
}

fn parse_reject_command(args: &[&str]) -> Result<ReplCommand> {
    const USAGE: &str = "reject <id> <reason number | reason text>";
    let id = parse_id(args, USAGE)?;

    if args.len() < 2 {
        return Err(CliError::InvalidInput(format!(
            "A rejection needs a reason. Usage: {}",
            USAGE
        )));
    }

    let rest = &args[1..];
    let reason = match (rest.len(), rest[0].parse::<usize>()) {
        (1, Ok(n)) => ReasonInput::Catalog(n),
        _ => ReasonInput::Text(rest.join(" ")),
    };

    Ok(ReplCommand::Decide {
        id,
        decision: HumanDecision::Reject,
        comment: None,
        reason: Some(reason),
    })
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  list [status] [text]           - List requests (e.g. list human-review acme)");
    println!("  queue [reason]                 - Review queue, most urgent SLA first");
    println!("    reason: unknown|margin|missing|other");
    println!("  show <id>                      - Show a request in detail");
    println!("  approve <id> [comment]         - Approve a request in human review");
    println!("  reject <id> <n | reason>       - Reject with catalog reason n or free text");
    println!("  renegotiate <id> [comment]     - Send a request back to pending");
    println!("  history [filter]               - Decision history, newest first");
    println!("    filter: all|ai|human|rejected");
    println!("  reasons                        - List the standard rejection reasons");
    println!("  kpis                           - Show dashboard KPIs");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit the desk");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DatasetArgs;
    use crate::config::OutputFormat;
    use crate::session::open_session_at;

    fn id(n: u32) -> RequestId {
        RequestId::sequential("PCR-2024", n)
    }

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_repl_command("exit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("?").unwrap(), ReplCommand::Help);
        assert_eq!(parse_repl_command("kpis").unwrap(), ReplCommand::Kpis);
        assert_eq!(
            parse_repl_command("show PCR-2024-0003").unwrap(),
            ReplCommand::Show(id(3))
        );
        assert!(parse_repl_command("show").is_err());
        assert!(parse_repl_command("launch").is_err());
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_repl_command("list human-review apex").unwrap(),
            ReplCommand::List {
                status: Some(RequestStatus::HumanReview),
                text: Some("apex".to_string()),
            }
        );
        assert_eq!(
            parse_repl_command("list Premier Components").unwrap(),
            ReplCommand::List {
                status: None,
                text: Some("Premier Components".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_queue() {
        assert_eq!(
            parse_repl_command("queue margin").unwrap(),
            ReplCommand::Queue(Some(ReviewReason::MarginBreach))
        );
        assert!(parse_repl_command("queue vip").is_err());
    }

    #[test]
    fn test_parse_history() {
        assert_eq!(
            parse_repl_command("history").unwrap(),
            ReplCommand::History(DecisionFilter::All)
        );
        assert_eq!(
            parse_repl_command("history rejected").unwrap(),
            ReplCommand::History(DecisionFilter::Rejected)
        );
        assert!(parse_repl_command("history pending").is_err());
    }

    #[test]
    fn test_parse_decisions() {
        assert_eq!(
            parse_repl_command("approve PCR-2024-0001 verified by phone").unwrap(),
            ReplCommand::Decide {
                id: id(1),
                decision: HumanDecision::Approve,
                comment: Some("verified by phone".to_string()),
                reason: None,
            }
        );
        assert_eq!(
            parse_repl_command("reject PCR-2024-0001 3").unwrap(),
            ReplCommand::Decide {
                id: id(1),
                decision: HumanDecision::Reject,
                comment: None,
                reason: Some(ReasonInput::Catalog(3)),
            }
        );
        assert_eq!(
            parse_repl_command("reject PCR-2024-0001 quote expired").unwrap(),
            ReplCommand::Decide {
                id: id(1),
                decision: HumanDecision::Reject,
                comment: None,
                reason: Some(ReasonInput::Text("quote expired".to_string())),
            }
        );
        assert!(parse_repl_command("reject PCR-2024-0001").is_err());
    }

    #[test]
    fn test_resolve_reason_uses_configured_ceiling() {
        let triage = TriageConfig::strict();
        assert_eq!(
            resolve_reason(ReasonInput::Catalog(1), &triage).unwrap(),
            "Price increase exceeds acceptable threshold of 12%"
        );
        assert!(resolve_reason(ReasonInput::Catalog(0), &triage).is_err());
        assert!(resolve_reason(ReasonInput::Catalog(9), &triage).is_err());
    }

    #[test]
    fn test_decision_through_session() {
        let config = Config::default();
        let dataset = DatasetArgs {
            count: Some(40),
            seed: Some(17),
            randomized: false,
        };
        let mut session = open_session_at(&config, &dataset, 1_700_000_000).unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let target = session.desk.review_queue(None).unwrap()[0].id.clone();
        let cmd = parse_repl_command(&format!("reject {} 2", target)).unwrap();
        execute_repl_command(cmd, &mut session, &config.triage, &formatter).unwrap();

        let request = session.desk.get(&target).unwrap();
        assert_eq!(request.status, RequestStatus::AutoRejected);
        assert_eq!(
            request.rejection_reason.as_deref(),
            Some("Insufficient justification provided for the requested change")
        );

        // A second decision is refused and leaves the request alone
        let cmd = parse_repl_command(&format!("approve {}", target)).unwrap();
        assert!(execute_repl_command(cmd, &mut session, &config.triage, &formatter).is_err());
        assert_eq!(session.desk.get(&target).unwrap(), request);

        let human = session.desk.decision_log(DecisionFilter::Human).unwrap();
        assert_eq!(human.len(), 2);
        assert!(human.iter().all(|e| e.request_id == target));
        let cmd = parse_repl_command("history human").unwrap();
        execute_repl_command(cmd, &mut session, &config.triage, &formatter).unwrap();
    }
}
