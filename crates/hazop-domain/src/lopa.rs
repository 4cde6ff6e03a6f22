//! Layers of protection analysis: risk reduction, gap analysis and SIL sizing.

use crate::error::LopaError;
use crate::model::{Ipl, RiskRanking};
use crate::thresholds::RiskLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const MIN_PFD: f64 = 1e-5;
pub const MAX_PFD: f64 = 1.0;
pub const MIN_IEF: f64 = 1e-8;
pub const MAX_IEF: f64 = 100.0;

/// Severity at or above which LOPA is mandatory.
pub const MANDATORY_SEVERITY: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GapStatus {
    Adequate,
    Marginal,
    Inadequate,
}

impl GapStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GapStatus::Adequate => "adequate",
            GapStatus::Marginal => "marginal",
            GapStatus::Inadequate => "inadequate",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LopaInput {
    /// Initiating event frequency, per year.
    pub initiating_event_frequency: f64,
    #[serde(default)]
    pub ipls: Vec<Ipl>,
    /// Tolerable frequency of the consequence, per year.
    pub target_frequency: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IplContribution {
    pub id: String,
    pub name: String,
    pub pfd: f64,
    pub rrf: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LopaResult {
    pub initiating_event_frequency: f64,
    pub target_frequency: f64,
    pub total_rrf: f64,
    pub mitigated_event_likelihood: f64,
    pub required_rrf: f64,
    pub gap_ratio: f64,
    pub gap_status: GapStatus,
    pub required_sil: Option<u8>,
    /// In input order.
    pub ipl_breakdown: Vec<IplContribution>,
    pub recommendation: String,
}

pub fn calculate_rrf(pfd: f64) -> Result<f64, LopaError> {
    if !pfd_in_range(pfd) {
        return Err(LopaError::PfdOutOfRange { pfd });
    }
    Ok(1.0 / pfd)
}

/// `1 / product(pfd)`. An empty list credits nothing and yields 1.
pub fn combined_rrf(pfds: &[f64]) -> Result<f64, LopaError> {
    let mut product = 1.0;
    for &pfd in pfds {
        if !pfd_in_range(pfd) {
            return Err(LopaError::PfdOutOfRange { pfd });
        }
        product *= pfd;
    }
    Ok(1.0 / product)
}

pub fn mitigated_event_likelihood(initiating_event_frequency: f64, rrf: f64) -> f64 {
    initiating_event_frequency / rrf
}

pub fn required_rrf(initiating_event_frequency: f64, target_frequency: f64) -> f64 {
    initiating_event_frequency / target_frequency
}

pub fn gap_ratio(actual_rrf: f64, required_rrf: f64) -> f64 {
    actual_rrf / required_rrf
}

pub fn gap_status(ratio: f64) -> GapStatus {
    if ratio >= 1.0 {
        GapStatus::Adequate
    } else if ratio >= 0.5 {
        GapStatus::Marginal
    } else {
        GapStatus::Inadequate
    }
}

/// SIL needed to close the gap, or `None` when existing layers already suffice.
pub fn required_sil(ratio: f64) -> Option<u8> {
    if ratio >= 1.0 {
        return None;
    }
    let additional = 1.0 / ratio;
    let sil = if additional <= 10.0 {
        1
    } else if additional <= 100.0 {
        2
    } else if additional <= 1000.0 {
        3
    } else {
        4
    };
    Some(sil)
}

/// Inclusive PFD band a SIF must achieve for a given SIL.
pub fn sil_pfd_band(sil: u8) -> Option<(f64, f64)> {
    match sil {
        1 => Some((1e-2, 1e-1)),
        2 => Some((1e-3, 1e-2)),
        3 => Some((1e-4, 1e-3)),
        4 => Some((1e-5, 1e-4)),
        _ => None,
    }
}

pub fn recommendation(status: GapStatus, required_sil: Option<u8>, ratio: f64) -> String {
    match (status, required_sil) {
        (GapStatus::Adequate, _) => {
            "Existing protection layers are adequate; maintain them through testing and \
inspection."
                .to_string()
        }
        (GapStatus::Marginal, Some(sil)) => format!(
            "Protection is marginal; review IPL credits or add a SIL {sil} safety instrumented \
function to close the gap."
        ),
        (GapStatus::Marginal, None) => {
            "Protection is marginal; review IPL credits and assumptions.".to_string()
        }
        (GapStatus::Inadequate, sil) => {
            let additional = 1.0 / ratio;
            match sil {
                Some(sil) => format!(
                    "Additional risk reduction required: a further RRF of {additional:.1} \
(SIL {sil}) is needed to meet the target frequency."
                ),
                None => format!(
                    "Additional risk reduction required: a further RRF of {additional:.1} is \
needed to meet the target frequency."
                ),
            }
        }
    }
}

/// Validate the whole input, then compute the full result.
///
/// Every violated domain is reported in one `LopaError::InvalidInput`.
pub fn perform_lopa_calculation(input: &LopaInput) -> Result<LopaResult, LopaError> {
    let violations = input_violations(input);
    if !violations.is_empty() {
        return Err(LopaError::InvalidInput { violations });
    }

    let ipl_breakdown = input
        .ipls
        .iter()
        .map(|ipl| {
            Ok(IplContribution {
                id: ipl.id.clone(),
                name: ipl.name.clone(),
                pfd: ipl.pfd,
                rrf: calculate_rrf(ipl.pfd)?,
            })
        })
        .collect::<Result<Vec<_>, LopaError>>()?;

    let pfds: Vec<f64> = input.ipls.iter().map(|ipl| ipl.pfd).collect();
    let total_rrf = combined_rrf(&pfds)?;
    let ief = input.initiating_event_frequency;
    let required = required_rrf(ief, input.target_frequency);
    let ratio = gap_ratio(total_rrf, required);
    let status = gap_status(ratio);
    let sil = required_sil(ratio);

    debug!(
        ipls = input.ipls.len(),
        gap_ratio = ratio,
        gap_status = status.as_str(),
        required_sil = ?sil,
        "lopa calculation complete"
    );

    Ok(LopaResult {
        initiating_event_frequency: ief,
        target_frequency: input.target_frequency,
        total_rrf,
        mitigated_event_likelihood: mitigated_event_likelihood(ief, total_rrf),
        required_rrf: required,
        gap_ratio: ratio,
        gap_status: status,
        required_sil: sil,
        ipl_breakdown,
        recommendation: recommendation(status, sil, ratio),
    })
}

fn input_violations(input: &LopaInput) -> Vec<String> {
    let mut violations = Vec::new();
    let ief = input.initiating_event_frequency;
    let target = input.target_frequency;

    let ief_ok = ief.is_finite() && (MIN_IEF..=MAX_IEF).contains(&ief);
    if !ief_ok {
        violations.push(format!(
            "initiating event frequency {ief} is outside [{MIN_IEF:e}, {MAX_IEF}]"
        ));
    }
    let target_ok = target.is_finite() && target > 0.0 && target <= 1.0;
    if !target_ok {
        violations.push(format!("target frequency {target} is outside (0, 1]"));
    }
    if ief_ok && target_ok && target >= ief {
        violations.push(format!(
            "target frequency {target} must be below the initiating event frequency {ief}"
        ));
    }
    for ipl in &input.ipls {
        if !pfd_in_range(ipl.pfd) {
            violations.push(format!(
                "IPL '{}' PFD {} is outside [{MIN_PFD:e}, {MAX_PFD}]",
                ipl.id, ipl.pfd
            ));
        }
    }
    violations
}

fn pfd_in_range(pfd: f64) -> bool {
    pfd.is_finite() && (MIN_PFD..=MAX_PFD).contains(&pfd)
}

/// When a scenario is escalated to LOPA.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LopaTriggerConfig {
    pub risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<u32>,
}

impl Default for LopaTriggerConfig {
    fn default() -> Self {
        Self {
            risk_level: RiskLevel::High,
            risk_score: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LopaTrigger {
    pub required: bool,
    pub recommended: bool,
    pub reasons: Vec<String>,
}

pub fn check_lopa_trigger(ranking: &RiskRanking, config: &LopaTriggerConfig) -> LopaTrigger {
    let mut trigger = LopaTrigger::default();

    if ranking.severity >= MANDATORY_SEVERITY {
        trigger.required = true;
        trigger.recommended = true;
        trigger.reasons.push(format!(
            "severity {} is at or above {MANDATORY_SEVERITY}: LOPA is required",
            ranking.severity
        ));
    }
    if ranking.risk_level >= config.risk_level {
        trigger.recommended = true;
        trigger.reasons.push(format!(
            "risk level {} meets the {} trigger level",
            ranking.risk_level, config.risk_level
        ));
    }
    if let Some(threshold) = config.risk_score
        && ranking.risk_score >= threshold
    {
        trigger.recommended = true;
        trigger.reasons.push(format!(
            "risk score {} meets the trigger score {threshold}",
            ranking.risk_score
        ));
    }
    trigger
}
