//! Pure risk and compliance evaluation (no IO).
//!
//! Input: analysis records and protection layers constructed elsewhere.
//! Output: LOPA results, IPL credibility verdicts and compliance reports.
//!
//! Every function here is synchronous and referentially transparent over its inputs.

#![forbid(unsafe_code)]

pub mod compliance;
pub mod error;
pub mod ipl;
pub mod lopa;
pub mod model;
pub mod thresholds;

mod fingerprint;

pub use compliance::{
    ComplianceOptions, ComplianceReport, ComplianceStatus, ComplianceValidation,
    generate_compliance_report, validate_compliance,
};
pub use error::{LopaError, RankingError, ThresholdError};
pub use ipl::{IplCollectionValidation, IplValidation, validate_ipl, validate_ipl_collection};
pub use lopa::{
    GapStatus, LopaInput, LopaResult, LopaTrigger, LopaTriggerConfig, check_lopa_trigger,
    perform_lopa_calculation,
};
pub use model::{AnalysisEntry, HumanInterventionRequirements, Ipl, IplType, RiskRanking};
pub use thresholds::{RiskLevel, RiskScale, ThresholdConfig, ThresholdPreset};

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
