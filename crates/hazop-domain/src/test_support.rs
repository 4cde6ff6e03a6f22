use crate::model::{AnalysisEntry, HumanInterventionRequirements, Ipl, IplType, RiskRanking};
use crate::thresholds::{RiskScale, ThresholdConfig, ThresholdPreset};

pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs() * 1e-9;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

pub fn ipl(id: &str, ipl_type: IplType, pfd: f64) -> Ipl {
    Ipl {
        id: id.to_string(),
        name: format!("{id} layer"),
        ipl_type,
        description: String::new(),
        pfd,
        independent_of_initiator: true,
        independent_of_other_ipls: true,
        sil: None,
        human_intervention: None,
    }
}

pub fn sif(id: &str, pfd: f64, sil: u8) -> Ipl {
    Ipl {
        sil: Some(sil),
        ..ipl(id, IplType::Sif, pfd)
    }
}

pub fn operator(id: &str, pfd: f64, requirements: Option<HumanInterventionRequirements>) -> Ipl {
    Ipl {
        human_intervention: requirements,
        ..ipl(id, IplType::HumanIntervention, pfd)
    }
}

pub fn full_requirements() -> HumanInterventionRequirements {
    HumanInterventionRequirements {
        response_time_minutes: Some(30.0),
        independent_alarm: true,
        written_procedure: true,
        operator_trained: true,
    }
}

pub fn ranking(severity: u8, likelihood: u8, detectability: u8) -> RiskRanking {
    let cfg = ThresholdConfig::preset(RiskScale::Ranking, ThresholdPreset::Default);
    RiskRanking::new(severity, likelihood, detectability, &cfg).expect("valid test ranking")
}

/// A fully documented, ranked, medium-risk entry.
pub fn entry(id: &str, node_id: &str, guide_word: &str) -> AnalysisEntry {
    AnalysisEntry {
        id: id.to_string(),
        node_id: node_id.to_string(),
        guide_word: guide_word.to_string(),
        parameter: "Pressure".to_string(),
        deviation: format!("{guide_word} pressure in separator"),
        causes: vec!["Blocked outlet valve".to_string()],
        consequences: vec!["Vessel overpressure and rupture".to_string()],
        safeguards: vec!["Pressure relief valve PSV-101".to_string()],
        recommendations: vec!["Verify relief valve sizing".to_string()],
        risk_ranking: Some(ranking(3, 3, 3)),
        notes: None,
    }
}

pub fn high_risk(mut entry: AnalysisEntry) -> AnalysisEntry {
    entry.risk_ranking = Some(ranking(5, 4, 4));
    entry
}

/// Only the identifying fields; nothing documented or ranked.
pub fn bare_entry(id: &str, node_id: &str, guide_word: &str) -> AnalysisEntry {
    AnalysisEntry {
        id: id.to_string(),
        node_id: node_id.to_string(),
        guide_word: guide_word.to_string(),
        ..AnalysisEntry::default()
    }
}
