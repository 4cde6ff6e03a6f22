use crate::error::RankingError;
use crate::thresholds::{RiskLevel, RiskScale, ThresholdConfig};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a HazOps worksheet, as supplied by the analysis store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisEntry {
    pub id: String,
    pub node_id: String,
    pub guide_word: String,
    pub parameter: String,
    pub deviation: String,

    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default)]
    pub consequences: Vec<String>,
    #[serde(default)]
    pub safeguards: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_ranking: Option<RiskRanking>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AnalysisEntry {
    pub fn is_high_risk(&self) -> bool {
        self.risk_ranking
            .as_ref()
            .is_some_and(|r| r.risk_level == RiskLevel::High)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RiskRanking {
    pub severity: u8,
    pub likelihood: u8,
    pub detectability: u8,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
}

impl RiskRanking {
    pub const FACTOR_MIN: u8 = 1;
    pub const FACTOR_MAX: u8 = 5;

    /// Score `severity x likelihood x detectability` and band it with a 125-scale configuration.
    pub fn new(
        severity: u8,
        likelihood: u8,
        detectability: u8,
        config: &ThresholdConfig,
    ) -> Result<Self, RankingError> {
        if config.scale != RiskScale::Ranking {
            return Err(RankingError::ScaleMismatch {
                expected: RiskScale::Ranking.as_str(),
                actual: config.scale.as_str(),
            });
        }

        let errors: Vec<String> = [
            ("severity", severity),
            ("likelihood", likelihood),
            ("detectability", detectability),
        ]
        .into_iter()
        .filter(|(_, v)| !(Self::FACTOR_MIN..=Self::FACTOR_MAX).contains(v))
        .map(|(name, v)| {
            format!(
                "{name} {v} is outside [{}, {}]",
                Self::FACTOR_MIN,
                Self::FACTOR_MAX
            )
        })
        .collect();
        if !errors.is_empty() {
            return Err(RankingError::FactorsOutOfRange { errors });
        }

        let risk_score = u32::from(severity) * u32::from(likelihood) * u32::from(detectability);
        let risk_level = config.determine_level(i64::from(risk_score))?;
        Ok(Self {
            severity,
            likelihood,
            detectability,
            risk_score,
            risk_level,
        })
    }
}

/// Band a `severity x likelihood` product on the 25-point matrix scale.
pub fn matrix_level(
    severity: u8,
    likelihood: u8,
    config: &ThresholdConfig,
) -> Result<RiskLevel, RankingError> {
    if config.scale != RiskScale::Matrix {
        return Err(RankingError::ScaleMismatch {
            expected: RiskScale::Matrix.as_str(),
            actual: config.scale.as_str(),
        });
    }
    let range = RiskRanking::FACTOR_MIN..=RiskRanking::FACTOR_MAX;
    let mut errors = Vec::new();
    for (name, v) in [("severity", severity), ("likelihood", likelihood)] {
        if !range.contains(&v) {
            errors.push(format!("{name} {v} is outside [1, 5]"));
        }
    }
    if !errors.is_empty() {
        return Err(RankingError::FactorsOutOfRange { errors });
    }
    Ok(config.determine_level(i64::from(severity) * i64::from(likelihood))?)
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum IplType {
    Bpcs,
    Sif,
    ReliefValve,
    RuptureDisk,
    HumanIntervention,
    CheckValve,
    FlameArrester,
    Dike,
}

impl IplType {
    pub const ALL: [IplType; 8] = [
        IplType::Bpcs,
        IplType::Sif,
        IplType::ReliefValve,
        IplType::RuptureDisk,
        IplType::HumanIntervention,
        IplType::CheckValve,
        IplType::FlameArrester,
        IplType::Dike,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IplType::Bpcs => "bpcs",
            IplType::Sif => "sif",
            IplType::ReliefValve => "relief_valve",
            IplType::RuptureDisk => "rupture_disk",
            IplType::HumanIntervention => "human_intervention",
            IplType::CheckValve => "check_valve",
            IplType::FlameArrester => "flame_arrester",
            IplType::Dike => "dike",
        }
    }

    /// Generic PFD credited to this kind of layer when no site data exists.
    pub fn typical_pfd(self) -> f64 {
        match self {
            IplType::Bpcs | IplType::HumanIntervention | IplType::CheckValve => 0.1,
            IplType::Sif
            | IplType::ReliefValve
            | IplType::RuptureDisk
            | IplType::FlameArrester
            | IplType::Dike => 0.01,
        }
    }

    /// Inclusive `(min, max)` PFD range normally creditable for this kind of layer.
    pub fn creditable_band(self) -> (f64, f64) {
        match self {
            IplType::Bpcs | IplType::HumanIntervention => (0.1, 1.0),
            IplType::Sif | IplType::ReliefValve => (1e-5, 0.1),
            IplType::RuptureDisk | IplType::FlameArrester | IplType::Dike => (1e-3, 0.1),
            IplType::CheckValve => (0.01, 1.0),
        }
    }
}

impl fmt::Display for IplType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An independent protection layer claimed against a scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Ipl {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ipl_type: IplType,
    #[serde(default)]
    pub description: String,
    pub pfd: f64,
    pub independent_of_initiator: bool,
    pub independent_of_other_ipls: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sil: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_intervention: Option<HumanInterventionRequirements>,
}

/// Explicit conditions under which operator response may be credited.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HumanInterventionRequirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time_minutes: Option<f64>,
    #[serde(default)]
    pub independent_alarm: bool,
    #[serde(default)]
    pub written_procedure: bool,
    #[serde(default)]
    pub operator_trained: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::ThresholdPreset;

    fn ranking_cfg() -> ThresholdConfig {
        ThresholdConfig::preset(RiskScale::Ranking, ThresholdPreset::Default)
    }

    #[test]
    fn ranking_scores_and_bands() {
        let r = RiskRanking::new(4, 4, 4, &ranking_cfg()).expect("valid");
        assert_eq!(r.risk_score, 64);
        assert_eq!(r.risk_level, RiskLevel::High);

        let r = RiskRanking::new(1, 2, 3, &ranking_cfg()).expect("valid");
        assert_eq!(r.risk_score, 6);
        assert_eq!(r.risk_level, RiskLevel::Low);
    }

    #[test]
    fn ranking_collects_every_factor_violation() {
        let err = RiskRanking::new(0, 6, 3, &ranking_cfg()).expect_err("invalid");
        let RankingError::FactorsOutOfRange { errors } = err else {
            panic!("unexpected error variant");
        };
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("severity 0"));
        assert!(errors[1].starts_with("likelihood 6"));
    }

    #[test]
    fn ranking_rejects_matrix_configuration() {
        let matrix = ThresholdConfig::preset(RiskScale::Matrix, ThresholdPreset::Default);
        let err = RiskRanking::new(3, 3, 3, &matrix).expect_err("wrong scale");
        assert!(matches!(err, RankingError::ScaleMismatch { .. }));
    }

    #[test]
    fn matrix_level_bands_two_factor_products() {
        let matrix = ThresholdConfig::preset(RiskScale::Matrix, ThresholdPreset::Default);
        assert_eq!(matrix_level(2, 2, &matrix), Ok(RiskLevel::Low));
        assert_eq!(matrix_level(3, 3, &matrix), Ok(RiskLevel::Medium));
        assert_eq!(matrix_level(5, 3, &matrix), Ok(RiskLevel::High));
        assert!(matrix_level(2, 2, &ranking_cfg()).is_err());
    }

    #[test]
    fn ipl_type_bands_contain_their_typical_pfd() {
        for ty in IplType::ALL {
            let (lo, hi) = ty.creditable_band();
            let typical = ty.typical_pfd();
            assert!(lo <= typical && typical <= hi, "{ty}");
        }
    }

    #[test]
    fn ipl_deserializes_type_field() {
        let ipl: Ipl = serde_json::from_str(
            r#"{"id":"ipl-1","name":"High pressure trip","type":"sif","pfd":0.01,
                "independent_of_initiator":true,"independent_of_other_ipls":true,"sil":2}"#,
        )
        .expect("parse");
        assert_eq!(ipl.ipl_type, IplType::Sif);
        assert_eq!(ipl.sil, Some(2));
        assert!(ipl.human_intervention.is_none());
    }
}
