//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use aries_domain::{Intake, RequestAttributes, RequestId, Vendor};
use aries_triage::{current_timestamp, Classifier};

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let now = current_timestamp();
    let intake = build_intake(args, now)?;

    let classifier = Classifier::new(config.triage.clone());
    let request = classifier.classify_intake(intake, now)?;

    println!("{}", formatter.format_request(&request)?);
    Ok(())
}

/// Turn command line arguments into an intake record.
fn build_intake(args: ClassifyArgs, now: u64) -> Result<Intake> {
    let id = args
        .id
        .as_deref()
        .map(RequestId::parse)
        .transpose()
        .map_err(CliError::InvalidInput)?;

    let attributes = RequestAttributes {
        vendor: Vendor::new(args.vendor, args.category.into(), args.trust),
        price_change_pct: args.price,
        margin_impact_pct: args.margin,
        confidence_pct: args.confidence,
    };

    let mut intake = Intake::new(attributes, now, args.sla);
    intake.id = id;
    Ok(intake)
}
