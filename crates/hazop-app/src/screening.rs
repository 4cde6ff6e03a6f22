//! The `screening` use case: re-band ranked entries and flag the ones that need LOPA.

use anyhow::Context;
use hazop_domain::{
    LopaTrigger, LopaTriggerConfig, RiskLevel, RiskRanking, check_lopa_trigger,
};
use hazop_settings::{Overrides, ResolvedConfig};
use hazop_types::SCHEMA_SCREENING_REPORT_V1;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{load_config, parse_entries_json};
use crate::report::{ScreeningReportV1, envelope};

/// Input for the screening use case.
#[derive(Clone, Debug)]
pub struct ScreeningInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// JSON array of analysis entries.
    pub entries_json: &'a str,
    /// Caller overrides.
    pub overrides: Overrides,
}

/// Output from the screening use case.
#[derive(Clone, Debug)]
pub struct ScreeningOutput {
    pub report: ScreeningReportV1,
    pub resolved_config: ResolvedConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScreenedEntry {
    pub entry_id: String,
    pub node_id: String,
    pub risk_score: u32,
    /// Level under the configured bands, which may differ from the stored one.
    pub risk_level: RiskLevel,
    pub trigger: LopaTrigger,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScreeningReport {
    pub profile: String,
    pub trigger_config: LopaTriggerConfig,
    /// Ranked entries, in input order.
    pub screened: Vec<ScreenedEntry>,
    /// Entries that carry no risk ranking and could not be screened.
    pub unranked_entry_ids: Vec<String>,
    pub lopa_required: usize,
    pub lopa_recommended: usize,
}

/// Run the screening use case.
///
/// Stored scores are re-banded with the configured ranking thresholds before the trigger is
/// applied, so a stricter profile can escalate entries that were ranked under looser bands.
pub fn run_screening(input: ScreeningInput<'_>) -> anyhow::Result<ScreeningOutput> {
    let resolved = load_config(input.config_text, input.overrides)?;
    let entries = parse_entries_json(input.entries_json)?;

    let mut screened = Vec::new();
    let mut unranked_entry_ids = Vec::new();
    for entry in &entries {
        let Some(stored) = entry.risk_ranking else {
            unranked_entry_ids.push(entry.id.clone());
            continue;
        };
        let ranking = RiskRanking::new(
            stored.severity,
            stored.likelihood,
            stored.detectability,
            &resolved.ranking_thresholds,
        )
        .with_context(|| format!("re-rank entry {}", entry.id))?;

        screened.push(ScreenedEntry {
            entry_id: entry.id.clone(),
            node_id: entry.node_id.clone(),
            risk_score: ranking.risk_score,
            risk_level: ranking.risk_level,
            trigger: check_lopa_trigger(&ranking, &resolved.lopa_trigger),
        });
    }

    let lopa_required = screened.iter().filter(|s| s.trigger.required).count();
    let lopa_recommended = screened.iter().filter(|s| s.trigger.recommended).count();

    info!(
        profile = %resolved.profile,
        entries = entries.len(),
        unranked = unranked_entry_ids.len(),
        lopa_required,
        lopa_recommended,
        "screening use case complete"
    );

    let report = ScreeningReport {
        profile: resolved.profile.clone(),
        trigger_config: resolved.lopa_trigger,
        screened,
        unranked_entry_ids,
        lopa_required,
        lopa_recommended,
    };

    Ok(ScreeningOutput {
        report: envelope(SCHEMA_SCREENING_REPORT_V1, report),
        resolved_config: resolved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: &str = r#"[
        {"id": "e-1", "node_id": "n-1", "guide_word": "more", "parameter": "flow",
         "deviation": "high flow",
         "risk_ranking": {"severity": 3, "likelihood": 3, "detectability": 3,
                          "risk_score": 27, "risk_level": "medium"}},
        {"id": "e-2", "node_id": "n-1", "guide_word": "no", "parameter": "flow",
         "deviation": "no flow"},
        {"id": "e-3", "node_id": "n-2", "guide_word": "more", "parameter": "pressure",
         "deviation": "high pressure",
         "risk_ranking": {"severity": 5, "likelihood": 2, "detectability": 2,
                          "risk_score": 20, "risk_level": "low"}}
    ]"#;

    fn screen(config_text: &str) -> ScreeningReport {
        run_screening(ScreeningInput {
            config_text,
            entries_json: ENTRIES,
            overrides: Overrides::default(),
        })
        .expect("run_screening")
        .report
        .data
    }

    #[test]
    fn default_profile_flags_only_severe_entries() {
        let report = screen("");
        assert_eq!(report.unranked_entry_ids, ["e-2"]);
        assert_eq!(report.screened.len(), 2);
        assert_eq!(report.lopa_required, 1);
        assert_eq!(report.lopa_recommended, 1);

        let severe = &report.screened[1];
        assert_eq!(severe.entry_id, "e-3");
        assert!(severe.trigger.required);
    }

    #[test]
    fn conservative_profile_rebands_and_recommends_more() {
        let report = screen(r#"profile = "conservative""#);
        let first = &report.screened[0];
        assert_eq!(first.risk_score, 27);
        assert!(first.risk_level >= RiskLevel::Medium);
        assert!(first.trigger.recommended);
        assert_eq!(report.lopa_recommended, 2);
    }

    #[test]
    fn corrupt_ranking_factors_are_rejected() {
        let err = run_screening(ScreeningInput {
            config_text: "",
            entries_json: r#"[{"id": "bad", "node_id": "n", "guide_word": "more",
                "parameter": "p", "deviation": "d",
                "risk_ranking": {"severity": 9, "likelihood": 1, "detectability": 1,
                                 "risk_score": 9, "risk_level": "low"}}]"#,
            overrides: Overrides::default(),
        })
        .expect_err("out of range factor");
        assert!(format!("{err:#}").contains("re-rank entry bad"));
    }
}
