//! History command implementation.

use crate::cli::HistoryArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::open_session;

/// Execute the history command.
pub fn execute_history(args: HistoryArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let session = open_session(config, &args.dataset)?;
    let mut log = session.desk.decision_log(args.filter.into())?;
    if let Some(limit) = args.limit {
        log.truncate(limit);
    }

    println!("{}", formatter.format_decision_log(&log)?);
    Ok(())
}
