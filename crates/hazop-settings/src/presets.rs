use hazop_domain::compliance::ComplianceOptions;
use hazop_domain::lopa::LopaTriggerConfig;
use hazop_domain::thresholds::{RiskLevel, RiskScale, ThresholdConfig, ThresholdPreset};

use crate::resolve::ResolvedConfig;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything site-specific should go into `hazop.toml`.
pub fn preset(profile: &str) -> ResolvedConfig {
    match profile {
        "conservative" => conservative_profile(),
        "relaxed" => relaxed_profile(),
        // default
        _ => default_profile(),
    }
}

fn default_profile() -> ResolvedConfig {
    profile_from(ThresholdPreset::Default, RiskLevel::High)
}

fn conservative_profile() -> ResolvedConfig {
    // Lower bands and an earlier LOPA trigger.
    profile_from(ThresholdPreset::Conservative, RiskLevel::Medium)
}

fn relaxed_profile() -> ResolvedConfig {
    profile_from(ThresholdPreset::Relaxed, RiskLevel::High)
}

fn profile_from(preset: ThresholdPreset, trigger_level: RiskLevel) -> ResolvedConfig {
    ResolvedConfig {
        profile: preset.as_str().to_string(),
        ranking_thresholds: ThresholdConfig::preset(RiskScale::Ranking, preset),
        matrix_thresholds: ThresholdConfig::preset(RiskScale::Matrix, preset),
        lopa_trigger: LopaTriggerConfig {
            risk_level: trigger_level,
            risk_score: None,
        },
        compliance: ComplianceOptions::default(),
        standards: hazop_regulatory::registry().standards().iter().collect(),
    }
}
