//! One evaluator per relevance area, all reading the same aggregate context.
//!
//! Coverage constants are fixed policy.

use super::ComplianceStatus;
use super::context::AnalysisContext;
use hazop_types::RelevanceArea;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const HAZARD_IDENTIFICATION_COMPLIANT: f64 = 70.0;
const RISK_ASSESSMENT_COMPLIANT: f64 = 90.0;
const SAFEGUARDS_COMPLIANT: f64 = 80.0;
const SAFEGUARDS_PARTIAL: f64 = 50.0;
const DOCUMENTATION_COMPLIANT: f64 = 80.0;
const DOCUMENTATION_PARTIAL: f64 = 50.0;
const METHODOLOGY_MIN_GUIDE_WORDS: usize = 3;
const METHODOLOGY_MIN_NODES: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AreaOutcome {
    pub area: RelevanceArea,
    pub status: ComplianceStatus,
    pub evidence: String,
}

pub fn evaluate(area: RelevanceArea, ctx: &AnalysisContext, has_lopa: bool) -> AreaOutcome {
    let (status, evidence) = match area {
        RelevanceArea::HazardIdentification => hazard_identification(ctx),
        RelevanceArea::RiskAssessment | RelevanceArea::RiskRanking => risk_assessment(ctx),
        RelevanceArea::Safeguards => safeguards(ctx),
        RelevanceArea::Recommendations => recommendations(ctx),
        RelevanceArea::Lopa | RelevanceArea::SilDetermination => lopa(ctx, has_lopa),
        RelevanceArea::Methodology => methodology(ctx),
        RelevanceArea::Documentation => documentation(ctx),
        RelevanceArea::ManagementOfChange => management_of_change(ctx),
        RelevanceArea::TeamComposition => (
            ComplianceStatus::NotAssessed,
            "team composition is not recorded in analysis entries".to_string(),
        ),
        RelevanceArea::FollowUp => follow_up(ctx),
    };
    AreaOutcome {
        area,
        status,
        evidence,
    }
}

fn hazard_identification(ctx: &AnalysisContext) -> (ComplianceStatus, String) {
    let n = ctx.entries_with_causes_and_consequences;
    let pct = ctx.percent(n);
    let status = if pct >= HAZARD_IDENTIFICATION_COMPLIANT {
        ComplianceStatus::Compliant
    } else if n > 0 {
        ComplianceStatus::Partial
    } else {
        ComplianceStatus::NonCompliant
    };
    let evidence = format!(
        "{n}/{} entries ({pct:.1}%) document both causes and consequences",
        ctx.total_entries
    );
    (status, evidence)
}

fn risk_assessment(ctx: &AnalysisContext) -> (ComplianceStatus, String) {
    let n = ctx.entries_with_risk_ranking;
    let pct = ctx.percent(n);
    let status = if pct >= RISK_ASSESSMENT_COMPLIANT {
        ComplianceStatus::Compliant
    } else if n > 0 {
        ComplianceStatus::Partial
    } else {
        ComplianceStatus::NonCompliant
    };
    let evidence = format!(
        "{n}/{} entries ({pct:.1}%) carry a risk ranking",
        ctx.total_entries
    );
    (status, evidence)
}

fn safeguards(ctx: &AnalysisContext) -> (ComplianceStatus, String) {
    let n = ctx.entries_with_safeguards;
    let pct = ctx.percent(n);
    let status = banded(pct, SAFEGUARDS_COMPLIANT, SAFEGUARDS_PARTIAL);
    let evidence = format!(
        "{n}/{} entries ({pct:.1}%) identify safeguards",
        ctx.total_entries
    );
    (status, evidence)
}

fn recommendations(ctx: &AnalysisContext) -> (ComplianceStatus, String) {
    let high = ctx.high_risk_entries;
    let covered = ctx.high_risk_with_recommendations;
    if high == 0 {
        return (
            ComplianceStatus::Compliant,
            "no high-risk scenarios require recommendations".to_string(),
        );
    }
    let status = if covered == high {
        ComplianceStatus::Compliant
    } else if covered > 0 {
        ComplianceStatus::Partial
    } else {
        ComplianceStatus::NonCompliant
    };
    let evidence = format!("{covered}/{high} high-risk scenarios have recommendations");
    (status, evidence)
}

fn lopa(ctx: &AnalysisContext, has_lopa: bool) -> (ComplianceStatus, String) {
    let high = ctx.high_risk_entries;
    if high == 0 {
        return (
            ComplianceStatus::NotApplicable,
            "no high-risk scenarios require LOPA or SIL determination".to_string(),
        );
    }
    if has_lopa {
        (
            ComplianceStatus::Compliant,
            format!("LOPA performed for an analysis with {high} high-risk scenarios"),
        )
    } else {
        (
            ComplianceStatus::NonCompliant,
            format!("{high} high-risk scenarios but no LOPA has been performed"),
        )
    }
}

fn methodology(ctx: &AnalysisContext) -> (ComplianceStatus, String) {
    let guide_words_ok = ctx.distinct_guide_words >= METHODOLOGY_MIN_GUIDE_WORDS;
    let nodes_ok = ctx.distinct_nodes >= METHODOLOGY_MIN_NODES;
    let status = match (guide_words_ok, nodes_ok) {
        (true, true) => ComplianceStatus::Compliant,
        (true, false) | (false, true) => ComplianceStatus::Partial,
        (false, false) => ComplianceStatus::NonCompliant,
    };
    let evidence = format!(
        "{} distinct guide words across {} nodes",
        ctx.distinct_guide_words, ctx.distinct_nodes
    );
    (status, evidence)
}

fn documentation(ctx: &AnalysisContext) -> (ComplianceStatus, String) {
    let pct = ctx.documentation_completeness;
    let status = banded(pct, DOCUMENTATION_COMPLIANT, DOCUMENTATION_PARTIAL);
    (status, format!("worksheet fields {pct:.1}% complete"))
}

fn management_of_change(ctx: &AnalysisContext) -> (ComplianceStatus, String) {
    if ctx.has_moc_reference {
        (
            ComplianceStatus::Compliant,
            "recommendations reference management of change".to_string(),
        )
    } else {
        (
            ComplianceStatus::NotAssessed,
            "no management of change reference found".to_string(),
        )
    }
}

fn follow_up(ctx: &AnalysisContext) -> (ComplianceStatus, String) {
    if ctx.entries_with_recommendations == 0 {
        (
            ComplianceStatus::NotApplicable,
            "no recommendations to follow up".to_string(),
        )
    } else {
        (
            ComplianceStatus::NotAssessed,
            format!(
                "{} entries carry recommendations; close-out status is tracked outside the analysis",
                ctx.entries_with_recommendations
            ),
        )
    }
}

fn banded(pct: f64, compliant: f64, partial: f64) -> ComplianceStatus {
    if pct >= compliant {
        ComplianceStatus::Compliant
    } else if pct >= partial {
        ComplianceStatus::Partial
    } else {
        ComplianceStatus::NonCompliant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(total: usize) -> AnalysisContext {
        AnalysisContext {
            total_entries: total,
            ..AnalysisContext::default()
        }
    }

    fn status(area: RelevanceArea, ctx: &AnalysisContext) -> ComplianceStatus {
        evaluate(area, ctx, false).status
    }

    #[test]
    fn hazard_identification_thresholds() {
        let mut c = ctx(10);
        c.entries_with_causes_and_consequences = 7;
        assert_eq!(status(RelevanceArea::HazardIdentification, &c), ComplianceStatus::Compliant);
        c.entries_with_causes_and_consequences = 1;
        assert_eq!(status(RelevanceArea::HazardIdentification, &c), ComplianceStatus::Partial);
        c.entries_with_causes_and_consequences = 0;
        assert_eq!(
            status(RelevanceArea::HazardIdentification, &c),
            ComplianceStatus::NonCompliant
        );
    }

    #[test]
    fn risk_ranking_shares_risk_assessment_thresholds() {
        let mut c = ctx(10);
        c.entries_with_risk_ranking = 9;
        assert_eq!(status(RelevanceArea::RiskAssessment, &c), ComplianceStatus::Compliant);
        c.entries_with_risk_ranking = 8;
        assert_eq!(status(RelevanceArea::RiskRanking, &c), ComplianceStatus::Partial);
        c.entries_with_risk_ranking = 0;
        assert_eq!(status(RelevanceArea::RiskAssessment, &c), ComplianceStatus::NonCompliant);
    }

    #[test]
    fn safeguards_bands() {
        let mut c = ctx(10);
        c.entries_with_safeguards = 8;
        assert_eq!(status(RelevanceArea::Safeguards, &c), ComplianceStatus::Compliant);
        c.entries_with_safeguards = 5;
        assert_eq!(status(RelevanceArea::Safeguards, &c), ComplianceStatus::Partial);
        c.entries_with_safeguards = 4;
        assert_eq!(status(RelevanceArea::Safeguards, &c), ComplianceStatus::NonCompliant);
    }

    #[test]
    fn recommendations_are_vacuously_compliant_without_high_risk() {
        assert_eq!(status(RelevanceArea::Recommendations, &ctx(3)), ComplianceStatus::Compliant);

        let mut c = ctx(3);
        c.high_risk_entries = 2;
        c.high_risk_with_recommendations = 1;
        assert_eq!(status(RelevanceArea::Recommendations, &c), ComplianceStatus::Partial);
        c.high_risk_with_recommendations = 0;
        assert_eq!(status(RelevanceArea::Recommendations, &c), ComplianceStatus::NonCompliant);
    }

    #[test]
    fn lopa_depends_on_caller_flag() {
        assert_eq!(status(RelevanceArea::Lopa, &ctx(3)), ComplianceStatus::NotApplicable);

        let mut c = ctx(3);
        c.high_risk_entries = 1;
        assert_eq!(status(RelevanceArea::SilDetermination, &c), ComplianceStatus::NonCompliant);
        assert_eq!(
            evaluate(RelevanceArea::Lopa, &c, true).status,
            ComplianceStatus::Compliant
        );
    }

    #[test]
    fn methodology_needs_guide_words_and_nodes() {
        let mut c = ctx(6);
        c.distinct_guide_words = 3;
        c.distinct_nodes = 2;
        assert_eq!(status(RelevanceArea::Methodology, &c), ComplianceStatus::Compliant);
        c.distinct_nodes = 1;
        assert_eq!(status(RelevanceArea::Methodology, &c), ComplianceStatus::Partial);
        c.distinct_guide_words = 2;
        assert_eq!(status(RelevanceArea::Methodology, &c), ComplianceStatus::NonCompliant);
    }

    #[test]
    fn documentation_bands() {
        let mut c = ctx(1);
        c.documentation_completeness = 80.0;
        assert_eq!(status(RelevanceArea::Documentation, &c), ComplianceStatus::Compliant);
        c.documentation_completeness = 50.0;
        assert_eq!(status(RelevanceArea::Documentation, &c), ComplianceStatus::Partial);
        c.documentation_completeness = 25.0;
        assert_eq!(status(RelevanceArea::Documentation, &c), ComplianceStatus::NonCompliant);
    }

    #[test]
    fn absence_of_evidence_is_not_assessed() {
        assert_eq!(
            status(RelevanceArea::ManagementOfChange, &ctx(2)),
            ComplianceStatus::NotAssessed
        );
        assert_eq!(
            status(RelevanceArea::TeamComposition, &ctx(2)),
            ComplianceStatus::NotAssessed
        );

        let mut c = ctx(2);
        c.has_moc_reference = true;
        assert_eq!(status(RelevanceArea::ManagementOfChange, &c), ComplianceStatus::Compliant);
    }

    #[test]
    fn follow_up_depends_on_recommendations() {
        assert_eq!(status(RelevanceArea::FollowUp, &ctx(2)), ComplianceStatus::NotApplicable);
        let mut c = ctx(2);
        c.entries_with_recommendations = 1;
        assert_eq!(status(RelevanceArea::FollowUp, &c), ComplianceStatus::NotAssessed);
    }
}
