use super::{
    ClauseCheckResult, ComplianceOptions, ComplianceStatus, ComplianceValidation,
    validate_compliance,
};
use crate::fingerprint::fingerprint_for_gap;
use crate::model::AnalysisEntry;
use hazop_regulatory::RegulatoryStandard;
use hazop_types::RelevanceArea;
use hazop_types::explain::remediation_for;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Declaration order is sort order: critical gaps come first.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum GapSeverity {
    Critical,
    Major,
    Minor,
}

impl GapSeverity {
    /// Critical when both the standard and the clause are mandatory, major when one is.
    pub fn classify(standard_mandatory: bool, clause_mandatory: bool) -> Self {
        match (standard_mandatory, clause_mandatory) {
            (true, true) => GapSeverity::Critical,
            (true, false) | (false, true) => GapSeverity::Major,
            (false, false) => GapSeverity::Minor,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComplianceGap {
    pub severity: GapSeverity,
    pub standard_id: String,
    pub clause_id: String,
    pub clause_reference: String,
    pub clause_title: String,
    /// Areas that evaluated non-compliant.
    pub relevance: Vec<RelevanceArea>,
    pub description: String,
    pub remediation: Vec<String>,
    pub fingerprint: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComplianceReport {
    #[serde(flatten)]
    pub validation: ComplianceValidation,
    /// Every non-compliant clause, critical before major before minor.
    pub critical_gaps: Vec<ComplianceGap>,
}

pub fn generate_compliance_report(
    entries: &[AnalysisEntry],
    standards: &[&RegulatoryStandard],
    options: &ComplianceOptions,
) -> ComplianceReport {
    let validation = validate_compliance(entries, standards, options);

    let mut critical_gaps: Vec<ComplianceGap> = validation
        .check_results
        .iter()
        .filter(|r| r.status == ComplianceStatus::NonCompliant)
        .map(gap_for)
        .collect();
    critical_gaps.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| a.standard_id.cmp(&b.standard_id))
            .then_with(|| a.clause_id.cmp(&b.clause_id))
    });

    debug!(
        gaps = critical_gaps.len(),
        critical = critical_gaps
            .iter()
            .filter(|g| g.severity == GapSeverity::Critical)
            .count(),
        "compliance gaps classified"
    );

    ComplianceReport {
        validation,
        critical_gaps,
    }
}

fn gap_for(result: &ClauseCheckResult) -> ComplianceGap {
    let relevance: Vec<RelevanceArea> = result
        .area_results
        .iter()
        .filter(|o| o.status == ComplianceStatus::NonCompliant)
        .map(|o| o.area)
        .collect();
    let remediation = relevance
        .iter()
        .map(|&area| remediation_for(area).to_string())
        .collect();

    ComplianceGap {
        severity: GapSeverity::classify(result.standard_mandatory, result.clause_mandatory),
        standard_id: result.standard_id.clone(),
        clause_id: result.clause_id.clone(),
        clause_reference: result.reference.clone(),
        clause_title: result.title.clone(),
        description: format!(
            "{} {} ({}): {}",
            result.standard_id,
            result.reference,
            result.title,
            result.gaps.join("; ")
        ),
        fingerprint: fingerprint_for_gap(&result.standard_id, &result.clause_id, &relevance),
        relevance,
        remediation,
    }
}
