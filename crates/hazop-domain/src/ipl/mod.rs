//! Independent protection layer credibility.
//!
//! Per-layer validation is a two-stage pipeline: structure first, then every other check. A
//! structurally broken layer never reaches the numeric checks.

use crate::lopa::calculate_rrf;
use crate::model::Ipl;
use hazop_types::Finding;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

mod checks;
mod collection;

pub use collection::{IplCollectionValidation, validate_ipl_collection};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStage {
    /// Required fields are missing or malformed; no other check ran.
    StructureRejected,
    FullyChecked,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IplValidation {
    pub ipl_id: String,
    pub ipl_name: String,
    pub stage: ValidationStage,
    /// No hard errors. Warnings never block crediting.
    pub creditable: bool,
    /// `1 / pfd` when creditable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrf: Option<f64>,
    pub errors: Vec<Finding>,
    /// Warning and informational findings.
    pub warnings: Vec<Finding>,
}

pub fn validate_ipl(ipl: &Ipl) -> IplValidation {
    let mut findings = Vec::new();
    checks::run_structure(ipl, &mut findings);

    let stage = if findings.iter().any(Finding::is_error) {
        ValidationStage::StructureRejected
    } else {
        checks::run_all(ipl, &mut findings);
        ValidationStage::FullyChecked
    };

    let (errors, warnings): (Vec<Finding>, Vec<Finding>) =
        findings.into_iter().partition(Finding::is_error);
    let creditable = errors.is_empty();
    let rrf = if creditable {
        calculate_rrf(ipl.pfd).ok()
    } else {
        None
    };

    debug!(
        ipl = %ipl.id,
        ipl_type = ipl.ipl_type.as_str(),
        creditable,
        errors = errors.len(),
        warnings = warnings.len(),
        "validated IPL"
    );

    IplValidation {
        ipl_id: ipl.id.clone(),
        ipl_name: ipl.name.clone(),
        stage,
        creditable,
        rrf,
        errors,
        warnings,
    }
}

#[cfg(test)]
mod tests;
