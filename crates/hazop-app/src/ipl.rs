//! The `ipl` use case: judge whether each claimed protection layer can be credited.

use anyhow::Context;
use hazop_domain::{Ipl, validate_ipl_collection};
use hazop_types::SCHEMA_IPL_REPORT_V1;
use tracing::info;

use crate::report::{IplReportV1, envelope};

/// Validate a JSON array of protection layers.
pub fn run_ipl_validation(ipls_json: &str) -> anyhow::Result<IplReportV1> {
    let ipls: Vec<Ipl> = serde_json::from_str(ipls_json).context("parse protection layers")?;
    let validation = validate_ipl_collection(&ipls);

    info!(
        ipls = ipls.len(),
        creditable = validation.creditable_count,
        common_cause = validation.common_cause_warnings.len(),
        "ipl validation complete"
    );

    Ok(envelope(SCHEMA_IPL_REPORT_V1, validation))
}
