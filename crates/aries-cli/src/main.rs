//! ARIES CLI - Command-line triage desk for vendor price change requests.

use aries_cli::commands;
use aries_cli::repl;
use aries_cli::{open_session, Cli, Command, Config, DatasetArgs, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> aries_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config from --config, or the default path (created on first run)
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            let cfg = Config::default();
            cfg.save().ok();
            cfg
        }),
    };

    if let Some(preset) = cli.preset {
        config.apply_preset(preset.config());
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None => {
            let session = open_session(&config, &DatasetArgs::default())?;
            repl::run_repl(session, &config, &formatter)?;
        }
        Some(Command::Repl(args)) => {
            let session = open_session(&config, &args.dataset)?;
            repl::run_repl(session, &config, &formatter)?;
        }
        Some(Command::Generate(args)) => {
            commands::execute_generate(args, &config, &formatter)?;
        }
        Some(Command::Classify(args)) => {
            commands::execute_classify(args, &config, &formatter)?;
        }
        Some(Command::Queue(args)) => {
            commands::execute_queue(args, &config, &formatter)?;
        }
        Some(Command::Kpis(args)) => {
            commands::execute_kpis(args, &config, &formatter)?;
        }
        Some(Command::Show(args)) => {
            commands::execute_show(args, &config, &formatter)?;
        }
        Some(Command::History(args)) => {
            commands::execute_history(args, &config, &formatter)?;
        }
    }

    Ok(())
}
