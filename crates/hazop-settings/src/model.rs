use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `hazop.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional and falls back to the profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HazopConfigV1 {
    /// Optional schema string for tooling (`hazop.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Threshold profile: `default`, `conservative` or `relaxed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(default)]
    pub thresholds: ThresholdsSection,

    #[serde(default)]
    pub lopa_trigger: LopaTriggerSection,

    #[serde(default)]
    pub compliance: ComplianceSection,
}

/// Boundary overrides: the last score of the lower band.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ThresholdsSection {
    /// Low/medium boundary on the 125-point ranking scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_medium: Option<i64>,

    /// Medium/high boundary on the 125-point ranking scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium_high: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix_low_medium: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix_medium_high: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LopaTriggerSection {
    /// `low`, `medium` or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComplianceSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_entries: Option<u32>,

    /// Glob patterns over standard ids (`iec-*`). Empty selects every standard.
    #[serde(default)]
    pub standards: Vec<String>,

    /// Whether a LOPA has been performed for the study.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_lopa: Option<bool>,
}
