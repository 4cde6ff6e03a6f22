//! Scores analysis entries against regulatory clauses.
//!
//! Evaluation runs once per relevance area over an aggregate [`AnalysisContext`]; clause, standard
//! and overall statuses are then rolled up worst-first.

use crate::model::AnalysisEntry;
use hazop_regulatory::{RegulatoryClause, RegulatoryStandard};
use hazop_types::RelevanceArea;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::info;

mod context;
mod evaluators;
pub mod keywords;
mod report;

pub use context::AnalysisContext;
pub use evaluators::AreaOutcome;
pub use report::{ComplianceGap, ComplianceReport, GapSeverity, generate_compliance_report};


const STANDARD_COMPLIANT: f64 = 90.0;
const STANDARD_PARTIAL: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    Partial,
    NonCompliant,
    NotApplicable,
    NotAssessed,
}

impl ComplianceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Partial => "partial",
            ComplianceStatus::NonCompliant => "non_compliant",
            ComplianceStatus::NotApplicable => "not_applicable",
            ComplianceStatus::NotAssessed => "not_assessed",
        }
    }

    /// Compliant, partial or non-compliant: a verdict was actually reached.
    pub fn is_assessed(self) -> bool {
        matches!(
            self,
            ComplianceStatus::Compliant
                | ComplianceStatus::Partial
                | ComplianceStatus::NonCompliant
        )
    }

    fn badness(self) -> u8 {
        match self {
            ComplianceStatus::NonCompliant => 2,
            ComplianceStatus::Partial => 1,
            _ => 0,
        }
    }

    /// Worst assessed status, if any status was assessed.
    pub fn worst(statuses: impl IntoIterator<Item = ComplianceStatus>) -> Option<Self> {
        statuses
            .into_iter()
            .filter(|s| s.is_assessed())
            .max_by_key(|s| s.badness())
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComplianceOptions {
    /// Supplied by the caller; never inferred from the entries.
    pub has_lopa: bool,
    /// Below this many entries nothing is assessed.
    pub min_entries: usize,
}

impl Default for ComplianceOptions {
    fn default() -> Self {
        Self {
            has_lopa: false,
            min_entries: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClauseCheckResult {
    pub standard_id: String,
    pub clause_id: String,
    pub reference: String,
    pub title: String,
    pub standard_mandatory: bool,
    pub clause_mandatory: bool,
    pub status: ComplianceStatus,
    pub area_results: Vec<AreaOutcome>,
    pub evidence: Vec<String>,
    pub gaps: Vec<String>,
    /// Entries whose keywords hit the clause, plus high-risk entries for LOPA/SIL clauses.
    pub relevant_entry_ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StandardSummary {
    pub standard_id: String,
    pub short_name: String,
    pub mandatory: bool,
    pub total_clauses: usize,
    pub compliant: usize,
    pub partial: usize,
    pub non_compliant: usize,
    pub not_applicable: usize,
    pub not_assessed: usize,
    pub compliance_percentage: f64,
    pub status: ComplianceStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComplianceValidation {
    pub overall_status: ComplianceStatus,
    /// Rounded mean over standards with an assessed status.
    pub overall_percentage: u32,
    pub entry_count: usize,
    pub context: AnalysisContext,
    pub standard_summaries: Vec<StandardSummary>,
    pub check_results: Vec<ClauseCheckResult>,
}

pub fn validate_compliance(
    entries: &[AnalysisEntry],
    standards: &[&RegulatoryStandard],
    options: &ComplianceOptions,
) -> ComplianceValidation {
    let context = AnalysisContext::from_entries(entries);
    if entries.is_empty() || entries.len() < options.min_entries {
        info!(
            entries = entries.len(),
            min_entries = options.min_entries,
            "too few entries for a compliance assessment"
        );
        return ComplianceValidation {
            overall_status: ComplianceStatus::NotAssessed,
            overall_percentage: 0,
            entry_count: entries.len(),
            context,
            standard_summaries: Vec::new(),
            check_results: Vec::new(),
        };
    }

    let indexed = context::index_entries(entries);
    let mut outcomes: BTreeMap<RelevanceArea, AreaOutcome> = BTreeMap::new();
    let mut outcome_for = |area: RelevanceArea| {
        outcomes
            .entry(area)
            .or_insert_with(|| evaluators::evaluate(area, &context, options.has_lopa))
            .clone()
    };

    let mut standard_summaries = Vec::with_capacity(standards.len());
    let mut check_results = Vec::new();
    for standard in standards {
        let results: Vec<ClauseCheckResult> = standard
            .relevant_clauses
            .iter()
            .map(|clause| {
                let area_results = clause
                    .hazops_relevance
                    .iter()
                    .map(|&area| outcome_for(area))
                    .collect();
                check_clause(standard, clause, area_results, &indexed)
            })
            .collect();
        standard_summaries.push(summarize(standard, &results));
        check_results.extend(results);
    }

    let assessed: Vec<&StandardSummary> = standard_summaries
        .iter()
        .filter(|s| s.status.is_assessed())
        .collect();
    let overall_status = ComplianceStatus::worst(assessed.iter().map(|s| s.status))
        .unwrap_or(ComplianceStatus::NotAssessed);
    let overall_percentage = if assessed.is_empty() {
        0
    } else {
        let sum: f64 = assessed.iter().map(|s| s.compliance_percentage).sum();
        (sum / assessed.len() as f64).round() as u32
    };

    info!(
        entries = entries.len(),
        standards = standards.len(),
        clauses = check_results.len(),
        overall_status = overall_status.as_str(),
        overall_percentage,
        "compliance evaluated"
    );

    ComplianceValidation {
        overall_status,
        overall_percentage,
        entry_count: entries.len(),
        context,
        standard_summaries,
        check_results,
    }
}

fn check_clause(
    standard: &RegulatoryStandard,
    clause: &RegulatoryClause,
    area_results: Vec<AreaOutcome>,
    indexed: &[context::EntryKeywords<'_>],
) -> ClauseCheckResult {
    let status = clause_status(&area_results);

    let high_risk_driven = clause
        .hazops_relevance
        .iter()
        .any(|a| a.is_high_risk_driven());
    let relevant_entry_ids = indexed
        .iter()
        .filter(|e| {
            keywords::matches_any(&e.keywords, clause.keywords)
                || (high_risk_driven && e.entry.is_high_risk())
        })
        .map(|e| e.entry.id.clone())
        .collect();

    let evidence = area_results
        .iter()
        .map(|o| format!("{}: {}", o.area, o.evidence))
        .collect();
    let gaps = area_results
        .iter()
        .filter(|o| {
            matches!(
                o.status,
                ComplianceStatus::NonCompliant | ComplianceStatus::Partial
            )
        })
        .map(|o| format!("{} is {}: {}", o.area, o.status, o.evidence))
        .collect();

    ClauseCheckResult {
        standard_id: standard.id.to_string(),
        clause_id: clause.id.to_string(),
        reference: clause.reference.to_string(),
        title: clause.title.to_string(),
        standard_mandatory: standard.mandatory,
        clause_mandatory: clause.mandatory,
        status,
        area_results,
        evidence,
        gaps,
        relevant_entry_ids,
    }
}

/// Worst assessed area status; otherwise not assessed if any area was, else not applicable.
fn clause_status(outcomes: &[AreaOutcome]) -> ComplianceStatus {
    if let Some(worst) = ComplianceStatus::worst(outcomes.iter().map(|o| o.status)) {
        return worst;
    }
    if outcomes
        .iter()
        .any(|o| o.status == ComplianceStatus::NotAssessed)
    {
        ComplianceStatus::NotAssessed
    } else {
        ComplianceStatus::NotApplicable
    }
}

fn summarize(standard: &RegulatoryStandard, results: &[ClauseCheckResult]) -> StandardSummary {
    let count = |status: ComplianceStatus| results.iter().filter(|r| r.status == status).count();
    let total_clauses = results.len();
    let compliant = count(ComplianceStatus::Compliant);
    let partial = count(ComplianceStatus::Partial);
    let non_compliant = count(ComplianceStatus::NonCompliant);
    let not_applicable = count(ComplianceStatus::NotApplicable);
    let not_assessed = count(ComplianceStatus::NotAssessed);

    let denominator = total_clauses - not_applicable - not_assessed;
    let compliance_percentage = if denominator == 0 {
        0.0
    } else {
        compliant as f64 * 100.0 / denominator as f64
    };

    let status = if non_compliant > 0 {
        ComplianceStatus::NonCompliant
    } else if denominator == 0 {
        if not_applicable == total_clauses {
            ComplianceStatus::NotApplicable
        } else {
            ComplianceStatus::NotAssessed
        }
    } else if compliance_percentage >= STANDARD_COMPLIANT {
        ComplianceStatus::Compliant
    } else if compliance_percentage >= STANDARD_PARTIAL {
        ComplianceStatus::Partial
    } else {
        ComplianceStatus::NonCompliant
    };

    StandardSummary {
        standard_id: standard.id.to_string(),
        short_name: standard.short_name.to_string(),
        mandatory: standard.mandatory,
        total_clauses,
        compliant,
        partial,
        non_compliant,
        not_applicable,
        not_assessed,
        compliance_percentage,
        status,
    }
}
