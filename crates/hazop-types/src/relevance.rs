use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HazOps concern a regulatory clause is relevant to.
///
/// The serialized form is the stable snake_case tag used by the catalog and in reports.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceArea {
    HazardIdentification,
    RiskAssessment,
    SilDetermination,
    Lopa,
    Safeguards,
    Documentation,
    Methodology,
    ManagementOfChange,
    FollowUp,
    TeamComposition,
    RiskRanking,
    Recommendations,
}

impl RelevanceArea {
    pub const ALL: [RelevanceArea; 12] = [
        RelevanceArea::HazardIdentification,
        RelevanceArea::RiskAssessment,
        RelevanceArea::SilDetermination,
        RelevanceArea::Lopa,
        RelevanceArea::Safeguards,
        RelevanceArea::Documentation,
        RelevanceArea::Methodology,
        RelevanceArea::ManagementOfChange,
        RelevanceArea::FollowUp,
        RelevanceArea::TeamComposition,
        RelevanceArea::RiskRanking,
        RelevanceArea::Recommendations,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RelevanceArea::HazardIdentification => "hazard_identification",
            RelevanceArea::RiskAssessment => "risk_assessment",
            RelevanceArea::SilDetermination => "sil_determination",
            RelevanceArea::Lopa => "lopa",
            RelevanceArea::Safeguards => "safeguards",
            RelevanceArea::Documentation => "documentation",
            RelevanceArea::Methodology => "methodology",
            RelevanceArea::ManagementOfChange => "management_of_change",
            RelevanceArea::FollowUp => "follow_up",
            RelevanceArea::TeamComposition => "team_composition",
            RelevanceArea::RiskRanking => "risk_ranking",
            RelevanceArea::Recommendations => "recommendations",
        }
    }

    /// LOPA and SIL clauses are always relevant to high-risk scenarios.
    pub fn is_high_risk_driven(self) -> bool {
        matches!(self, RelevanceArea::Lopa | RelevanceArea::SilDetermination)
    }
}

impl fmt::Display for RelevanceArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelevanceArea {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelevanceArea::ALL
            .into_iter()
            .find(|area| area.as_str() == s)
            .ok_or_else(|| format!("unknown relevance area: {s}"))
    }
}
