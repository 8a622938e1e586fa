//! KPIs command implementation.

use crate::cli::KpisArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::open_session;

/// Execute the kpis command.
pub fn execute_kpis(args: KpisArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let session = open_session(config, &args.dataset)?;
    let metrics = session.desk.metrics()?;

    println!("{}", formatter.format_metrics(&metrics)?);
    Ok(())
}
