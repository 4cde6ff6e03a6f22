//! Hard validation failures on out-of-domain inputs.
//!
//! Validators collect every violation before returning, so a caller sees the whole problem set
//! in one round trip.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdError {
    #[error("invalid threshold boundaries: {}", .errors.join("; "))]
    InvalidBoundaries { errors: Vec<String> },

    #[error("invalid threshold configuration: {}", .errors.join("; "))]
    Invalid { errors: Vec<String> },

    #[error("risk score {score} is outside the scale [1, {max}]")]
    ScoreOutOfRange { score: i64, max: i64 },

    #[error("risk score must be a finite integer, got {0}")]
    NonIntegerScore(f64),

    #[error("risk score {0} is not covered by any threshold range")]
    ScoreNotCovered(i64),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankingError {
    #[error("invalid risk ranking: {}", .errors.join("; "))]
    FactorsOutOfRange { errors: Vec<String> },

    #[error("risk ranking needs a {expected} threshold configuration, got {actual}")]
    ScaleMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error(transparent)]
    Threshold(#[from] ThresholdError),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LopaError {
    #[error("PFD {pfd} is outside the creditable range [1e-5, 1]")]
    PfdOutOfRange { pfd: f64 },

    #[error("invalid LOPA input: {}", .violations.join("; "))]
    InvalidInput { violations: Vec<String> },
}
