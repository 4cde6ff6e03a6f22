//! The `compliance` use case: score analysis entries against the selected standards.

use hazop_domain::{ComplianceStatus, generate_compliance_report};
use hazop_settings::{Overrides, ResolvedConfig};
use hazop_types::SCHEMA_COMPLIANCE_REPORT_V1;
use tracing::info;

use crate::config::{load_config, parse_entries_json};
use crate::report::{ComplianceReportV1, envelope};

/// Input for the compliance use case.
#[derive(Clone, Debug)]
pub struct ComplianceInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// JSON array of analysis entries.
    pub entries_json: &'a str,
    /// Caller overrides.
    pub overrides: Overrides,
}

/// Output from the compliance use case.
#[derive(Clone, Debug)]
pub struct ComplianceOutput {
    /// The generated report.
    pub report: ComplianceReportV1,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the compliance use case: resolve config, parse entries, validate, classify gaps.
pub fn run_compliance(input: ComplianceInput<'_>) -> anyhow::Result<ComplianceOutput> {
    let resolved = load_config(input.config_text, input.overrides)?;
    let entries = parse_entries_json(input.entries_json)?;

    let report =
        generate_compliance_report(&entries, &resolved.standards, &resolved.compliance);

    info!(
        profile = %resolved.profile,
        entries = entries.len(),
        standards = resolved.standards.len(),
        overall_status = report.validation.overall_status.as_str(),
        overall_percentage = report.validation.overall_percentage,
        gaps = report.critical_gaps.len(),
        "compliance use case complete"
    );

    Ok(ComplianceOutput {
        report: envelope(SCHEMA_COMPLIANCE_REPORT_V1, report),
        resolved_config: resolved,
    })
}

/// Map overall status to exit code: 0 = anything short of non-compliant, 2 = non-compliant.
pub fn compliance_exit_code(status: ComplianceStatus) -> i32 {
    match status {
        ComplianceStatus::NonCompliant => 2,
        ComplianceStatus::Compliant
        | ComplianceStatus::Partial
        | ComplianceStatus::NotApplicable
        | ComplianceStatus::NotAssessed => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(config_text: &'a str, entries_json: &'a str) -> ComplianceInput<'a> {
        ComplianceInput {
            config_text,
            entries_json,
            overrides: Overrides::default(),
        }
    }

    #[test]
    fn empty_study_is_not_assessed() {
        let output = run_compliance(input("", "[]")).expect("run_compliance");
        assert_eq!(output.report.schema, SCHEMA_COMPLIANCE_REPORT_V1);
        assert_eq!(
            output.report.data.validation.overall_status,
            ComplianceStatus::NotAssessed
        );
        assert!(output.report.data.critical_gaps.is_empty());
        assert_eq!(output.resolved_config.profile, "default");
    }

    #[test]
    fn configured_standards_limit_the_assessment() {
        let output = run_compliance(input(
            "[compliance]\nstandards = [\"osha-psm\"]",
            r#"[{"id": "e-1", "node_id": "n-1", "guide_word": "more", "parameter": "pressure",
                 "deviation": "high pressure", "causes": ["control valve fails open"],
                 "consequences": ["vessel overpressure"], "safeguards": ["relief valve"]}]"#,
        ))
        .expect("run_compliance");

        let summaries = &output.report.data.validation.standard_summaries;
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].standard_id, "osha-psm");
    }

    #[test]
    fn bad_config_fails_before_entries_are_read() {
        let err = run_compliance(input("profile = [", "not json")).expect_err("bad config");
        assert!(format!("{err:#}").starts_with("parse config"));
    }

    #[test]
    fn exit_codes() {
        assert_eq!(compliance_exit_code(ComplianceStatus::Compliant), 0);
        assert_eq!(compliance_exit_code(ComplianceStatus::Partial), 0);
        assert_eq!(compliance_exit_code(ComplianceStatus::NotAssessed), 0);
        assert_eq!(compliance_exit_code(ComplianceStatus::NonCompliant), 2);
    }
}
