use crate::{model::HazopConfigV1, presets};
use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};
use hazop_domain::compliance::ComplianceOptions;
use hazop_domain::lopa::LopaTriggerConfig;
use hazop_domain::thresholds::{RiskLevel, RiskScale, ThresholdConfig};
use hazop_regulatory::RegulatoryStandard;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub has_lopa: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub profile: String,
    pub ranking_thresholds: ThresholdConfig,
    pub matrix_thresholds: ThresholdConfig,
    pub lopa_trigger: LopaTriggerConfig,
    pub compliance: ComplianceOptions,
    /// Selected standards, in catalog order.
    pub standards: Vec<&'static RegulatoryStandard>,
}

pub fn resolve_config(cfg: HazopConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "default".to_string());

    let mut resolved = presets::preset(&profile);

    // thresholds
    let t = &cfg.thresholds;
    if t.low_medium.is_some() || t.medium_high.is_some() {
        resolved.ranking_thresholds = override_bands(
            &resolved.ranking_thresholds,
            t.low_medium,
            t.medium_high,
        )
        .context("invalid [thresholds] low_medium/medium_high")?;
    }
    if t.matrix_low_medium.is_some() || t.matrix_medium_high.is_some() {
        resolved.matrix_thresholds = override_bands(
            &resolved.matrix_thresholds,
            t.matrix_low_medium,
            t.matrix_medium_high,
        )
        .context("invalid [thresholds] matrix_low_medium/matrix_medium_high")?;
    }

    // lopa trigger
    if let Some(level) = cfg.lopa_trigger.risk_level.as_deref() {
        resolved.lopa_trigger.risk_level =
            parse_risk_level(level).context("invalid [lopa_trigger] risk_level")?;
    }
    if let Some(score) = cfg.lopa_trigger.risk_score {
        let max = RiskScale::Ranking.max();
        if !(1..=max).contains(&i64::from(score)) {
            anyhow::bail!("invalid [lopa_trigger] risk_score: {score} is outside [1, {max}]");
        }
        resolved.lopa_trigger.risk_score = Some(score);
    }

    // compliance
    if let Some(min_entries) = cfg.compliance.min_entries {
        resolved.compliance.min_entries = min_entries as usize;
    }
    if let Some(has_lopa) = overrides.has_lopa.or(cfg.compliance.has_lopa) {
        resolved.compliance.has_lopa = has_lopa;
    }
    if !cfg.compliance.standards.is_empty() {
        resolved.standards = select_standards(&cfg.compliance.standards)?;
    }

    Ok(resolved)
}

fn override_bands(
    base: &ThresholdConfig,
    low_medium: Option<i64>,
    medium_high: Option<i64>,
) -> anyhow::Result<ThresholdConfig> {
    let low_medium = low_medium.unwrap_or(base.low.max);
    let medium_high = medium_high.unwrap_or(base.medium.max);
    Ok(ThresholdConfig::create(base.scale, low_medium, medium_high)?)
}

fn select_standards(patterns: &[String]) -> anyhow::Result<Vec<&'static RegulatoryStandard>> {
    let globs = build_globset(patterns)?;
    let selected: Vec<&'static RegulatoryStandard> = hazop_regulatory::registry()
        .standards()
        .iter()
        .filter(|s| globs.is_match(s.id))
        .collect();
    if selected.is_empty() {
        anyhow::bail!(
            "[compliance] standards {patterns:?} match no standard in the catalog"
        );
    }
    Ok(selected)
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .with_context(|| format!("invalid [compliance] standards glob: {pattern}"))?;
        builder.add(glob);
    }
    builder
        .build()
        .context("failed to build [compliance] standards globset")
}

fn parse_risk_level(v: &str) -> anyhow::Result<RiskLevel> {
    match v {
        "low" => Ok(RiskLevel::Low),
        "medium" => Ok(RiskLevel::Medium),
        "high" => Ok(RiskLevel::High),
        other => anyhow::bail!("unknown risk level: {other} (expected low|medium|high)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;
    use hazop_domain::thresholds::{ThresholdPreset, ThresholdRange};

    fn resolve(toml: &str) -> anyhow::Result<ResolvedConfig> {
        resolve_config(parse_config_toml(toml)?, Overrides::default())
    }

    #[test]
    fn empty_config_resolves_to_default_profile() {
        let resolved = resolve("").expect("resolve");
        assert_eq!(resolved.profile, "default");
        assert_eq!(
            resolved.ranking_thresholds,
            ThresholdConfig::preset(RiskScale::Ranking, ThresholdPreset::Default)
        );
        assert_eq!(resolved.lopa_trigger, LopaTriggerConfig::default());
        assert_eq!(resolved.compliance, ComplianceOptions::default());
        assert_eq!(
            resolved.standards.len(),
            hazop_regulatory::registry().standards().len()
        );
    }

    #[test]
    fn unknown_profile_falls_back_to_default_bands() {
        let resolved = resolve(r#"profile = "paranoid""#).expect("resolve");
        assert_eq!(resolved.profile, "default");
        assert_eq!(resolved.ranking_thresholds.low.max, 20);
    }

    #[test]
    fn profile_override_reports_the_applied_preset() {
        let cfg = parse_config_toml(r#"profile = "relaxed""#).expect("parse");
        let overrides = Overrides {
            profile: Some("bogus".to_string()),
            ..Overrides::default()
        };
        let resolved = resolve_config(cfg, overrides).expect("resolve");
        assert_eq!(resolved.profile, "default");
        assert_eq!(resolved.lopa_trigger.risk_level, RiskLevel::High);
    }

    #[test]
    fn conservative_profile_lowers_bands_and_trigger() {
        let resolved = resolve(r#"profile = "conservative""#).expect("resolve");
        assert_eq!(resolved.ranking_thresholds.low.max, 10);
        assert_eq!(resolved.matrix_thresholds.medium.max, 8);
        assert_eq!(resolved.lopa_trigger.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn threshold_overrides_fill_missing_boundary_from_profile() {
        let resolved = resolve(
            r#"
profile = "relaxed"

[thresholds]
medium_high = 90
"#,
        )
        .expect("resolve");
        assert_eq!(resolved.ranking_thresholds.low, ThresholdRange::new(1, 30));
        assert_eq!(resolved.ranking_thresholds.medium, ThresholdRange::new(31, 90));
        assert_eq!(resolved.ranking_thresholds.high, ThresholdRange::new(91, 125));
    }

    #[test]
    fn inverted_threshold_overrides_are_rejected_with_context() {
        let err = resolve(
            r#"
[thresholds]
matrix_low_medium = 10
matrix_medium_high = 5
"#,
        )
        .expect_err("inverted");
        let msg = format!("{err:#}");
        assert!(msg.contains("matrix_low_medium"), "{msg}");
        assert!(msg.contains("must be less than"), "{msg}");
    }

    #[test]
    fn lopa_trigger_section_is_parsed() {
        let resolved = resolve(
            r#"
[lopa_trigger]
risk_level = "medium"
risk_score = 40
"#,
        )
        .expect("resolve");
        assert_eq!(resolved.lopa_trigger.risk_level, RiskLevel::Medium);
        assert_eq!(resolved.lopa_trigger.risk_score, Some(40));

        assert!(resolve("[lopa_trigger]\nrisk_level = \"severe\"").is_err());
        assert!(resolve("[lopa_trigger]\nrisk_score = 200").is_err());
    }

    #[test]
    fn standards_are_selected_by_glob() {
        let resolved = resolve(
            r#"
[compliance]
standards = ["iec-*", "osha-psm"]
min_entries = 3
has_lopa = true
"#,
        )
        .expect("resolve");
        let ids: Vec<&str> = resolved.standards.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["osha-psm", "iec-61511", "iec-61508", "iec-61882"]);
        assert_eq!(resolved.compliance.min_entries, 3);
        assert!(resolved.compliance.has_lopa);
    }

    #[test]
    fn standards_globs_must_be_valid_and_match() {
        assert!(resolve("[compliance]\nstandards = [\"[\"]").is_err());
        assert!(resolve("[compliance]\nstandards = [\"nfpa-*\"]").is_err());
    }

    #[test]
    fn overrides_take_precedence_over_file() {
        let cfg = parse_config_toml(
            r#"
profile = "relaxed"

[compliance]
has_lopa = true
"#,
        )
        .expect("parse");
        let resolved = resolve_config(
            cfg,
            Overrides {
                profile: Some("conservative".to_string()),
                has_lopa: Some(false),
            },
        )
        .expect("resolve");
        assert_eq!(resolved.profile, "conservative");
        assert!(!resolved.compliance.has_lopa);
    }
}
