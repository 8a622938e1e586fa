//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use crate::session::open_session;
use aries_domain::traits::RequestQuery;

/// Execute the generate command.
pub fn execute_generate(args: GenerateArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let session = open_session(config, &args.dataset)?;

    let query = RequestQuery {
        status: args.status.map(Into::into),
        text: args.text,
        limit: args.limit,
    };
    let requests = session.desk.search(&query)?;

    println!("{}", formatter.format_requests(&requests)?);
    if formatter.format() == OutputFormat::Table {
        println!(
            "{}",
            formatter.info(&format!(
                "Showing {} of {} requests (seed {})",
                requests.len(),
                session.desk.store().len(),
                session.seed
            ))
        );
    }

    Ok(())
}
