//! Show command implementation.

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::open_session;
use aries_domain::RequestId;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let id = RequestId::parse(&args.id).map_err(CliError::InvalidInput)?;
    let session = open_session(config, &args.dataset)?;
    let request = session.desk.get(&id)?;

    println!("{}", formatter.format_request(&request)?);
    Ok(())
}
