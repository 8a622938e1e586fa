//! Queue command implementation.

use crate::cli::QueueArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::open_session;

/// Execute the queue command.
pub fn execute_queue(args: QueueArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let session = open_session(config, &args.dataset)?;
    let queue = session.desk.review_queue(args.reason.map(Into::into))?;

    println!(
        "{}",
        formatter.format_queue(&queue, config.triage.margin_erosion_threshold)?
    );
    Ok(())
}
