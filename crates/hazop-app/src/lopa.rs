//! The `lopa` use case: size the risk-reduction gap for one scenario.

use anyhow::Context;
use hazop_domain::{
    IplCollectionValidation, LopaInput, perform_lopa_calculation, validate_ipl_collection,
};
use hazop_types::SCHEMA_LOPA_REPORT_V1;
use tracing::{info, warn};

use crate::report::{LopaReportV1, envelope};

/// Output from the lopa use case.
#[derive(Clone, Debug)]
pub struct LopaOutput {
    /// The generated report.
    pub report: LopaReportV1,
    /// Credibility verdicts for the layers the calculation credited.
    pub ipl_validation: IplCollectionValidation,
}

/// Run the lopa use case: parse the scenario, calculate, and check the claimed layers.
///
/// The calculation credits every layer it is given; `ipl_validation` tells the caller which of
/// those credits would not survive review.
pub fn run_lopa(case_json: &str) -> anyhow::Result<LopaOutput> {
    let input: LopaInput = serde_json::from_str(case_json).context("parse lopa case")?;
    let result = perform_lopa_calculation(&input).context("calculate lopa")?;

    let ipl_validation = validate_ipl_collection(&input.ipls);
    if !ipl_validation.all_creditable() {
        warn!(
            ipls = input.ipls.len(),
            creditable = ipl_validation.creditable_count,
            "lopa credits protection layers that fail validation"
        );
    }

    info!(
        gap_status = result.gap_status.as_str(),
        required_sil = ?result.required_sil,
        total_rrf = result.total_rrf,
        "lopa use case complete"
    );

    Ok(LopaOutput {
        report: envelope(SCHEMA_LOPA_REPORT_V1, result),
        ipl_validation,
    })
}
