//! Low/medium/high score bands for the two risk scoring scales.
//!
//! A configuration is valid when its three ranges are contiguous and cover the scale exactly:
//! `low.min = 1`, `medium.min = low.max + 1`, `high.min = medium.max + 1`, `high.max = scale max`.

use crate::error::ThresholdError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which product a score is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskScale {
    /// severity x likelihood x detectability, each 1..=5.
    Ranking,
    /// severity x likelihood, each 1..=5.
    Matrix,
}

impl RiskScale {
    pub fn max(self) -> i64 {
        match self {
            RiskScale::Ranking => 125,
            RiskScale::Matrix => 25,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskScale::Ranking => "ranking",
            RiskScale::Matrix => "matrix",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdPreset {
    Default,
    Conservative,
    Relaxed,
}

impl ThresholdPreset {
    pub const ALL: [ThresholdPreset; 3] = [
        ThresholdPreset::Default,
        ThresholdPreset::Conservative,
        ThresholdPreset::Relaxed,
    ];

    /// `(low/medium, medium/high)` boundaries: the last score of the lower band.
    pub fn boundaries(self, scale: RiskScale) -> (i64, i64) {
        match (self, scale) {
            (ThresholdPreset::Default, RiskScale::Ranking) => (20, 60),
            (ThresholdPreset::Default, RiskScale::Matrix) => (4, 14),
            (ThresholdPreset::Conservative, RiskScale::Ranking) => (10, 40),
            (ThresholdPreset::Conservative, RiskScale::Matrix) => (2, 8),
            (ThresholdPreset::Relaxed, RiskScale::Ranking) => (30, 80),
            (ThresholdPreset::Relaxed, RiskScale::Matrix) => (6, 16),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThresholdPreset::Default => "default",
            ThresholdPreset::Conservative => "conservative",
            ThresholdPreset::Relaxed => "relaxed",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ThresholdRange {
    pub min: i64,
    pub max: i64,
}

impl ThresholdRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, score: i64) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ThresholdConfig {
    pub scale: RiskScale,
    pub low: ThresholdRange,
    pub medium: ThresholdRange,
    pub high: ThresholdRange,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ThresholdValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ThresholdConfig {
    /// Build the bands from two boundaries and validate the result.
    ///
    /// `low_medium` is the last low score and `medium_high` the last medium score.
    pub fn create(
        scale: RiskScale,
        low_medium: i64,
        medium_high: i64,
    ) -> Result<Self, ThresholdError> {
        let max = scale.max();
        let mut errors = Vec::new();
        if low_medium < 1 {
            errors.push(format!("low/medium boundary {low_medium} must be at least 1"));
        }
        if low_medium >= medium_high {
            errors.push(format!(
                "low/medium boundary {low_medium} must be less than medium/high boundary {medium_high}"
            ));
        }
        if medium_high >= max {
            errors.push(format!(
                "medium/high boundary {medium_high} must be less than the scale maximum {max}"
            ));
        }
        if !errors.is_empty() {
            return Err(ThresholdError::InvalidBoundaries { errors });
        }

        let config = Self {
            scale,
            low: ThresholdRange::new(1, low_medium),
            medium: ThresholdRange::new(low_medium + 1, medium_high),
            high: ThresholdRange::new(medium_high + 1, max),
        };

        let validation = config.validate();
        if !validation.valid {
            return Err(ThresholdError::Invalid {
                errors: validation.errors,
            });
        }
        Ok(config)
    }

    pub fn preset(scale: RiskScale, preset: ThresholdPreset) -> Self {
        let (low_medium, medium_high) = preset.boundaries(scale);
        let max = scale.max();
        Self {
            scale,
            low: ThresholdRange::new(1, low_medium),
            medium: ThresholdRange::new(low_medium + 1, medium_high),
            high: ThresholdRange::new(medium_high + 1, max),
        }
    }

    /// Check bounds, full coverage of the scale and contiguity. All violations are reported.
    pub fn validate(&self) -> ThresholdValidation {
        let max = self.scale.max();
        let mut errors = Vec::new();

        for (name, range) in self.named_ranges() {
            for (end, value) in [("min", range.min), ("max", range.max)] {
                if !(1..=max).contains(&value) {
                    errors.push(format!("{name}.{end} {value} is outside [1, {max}]"));
                }
            }
            if range.min > range.max {
                errors.push(format!(
                    "{name} range is inverted: min {} > max {}",
                    range.min, range.max
                ));
            }
        }

        if self.low.min != 1 {
            errors.push(format!("low.min must be 1, got {}", self.low.min));
        }
        if self.high.max != max {
            errors.push(format!("high.max must be {max}, got {}", self.high.max));
        }
        check_adjacent("low", &self.low, "medium", &self.medium, &mut errors);
        check_adjacent("medium", &self.medium, "high", &self.high, &mut errors);

        ThresholdValidation {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Map an integer score onto its band: first match low, medium, high; bounds inclusive.
    pub fn determine_level(&self, score: i64) -> Result<RiskLevel, ThresholdError> {
        let max = self.scale.max();
        if !(1..=max).contains(&score) {
            return Err(ThresholdError::ScoreOutOfRange { score, max });
        }
        if self.low.contains(score) {
            Ok(RiskLevel::Low)
        } else if self.medium.contains(score) {
            Ok(RiskLevel::Medium)
        } else if self.high.contains(score) {
            Ok(RiskLevel::High)
        } else {
            Err(ThresholdError::ScoreNotCovered(score))
        }
    }

    fn named_ranges(&self) -> [(&'static str, &ThresholdRange); 3] {
        [
            ("low", &self.low),
            ("medium", &self.medium),
            ("high", &self.high),
        ]
    }
}

fn check_adjacent(
    lower_name: &str,
    lower: &ThresholdRange,
    upper_name: &str,
    upper: &ThresholdRange,
    errors: &mut Vec<String>,
) {
    let Some(expected) = lower.max.checked_add(1) else {
        errors.push(format!(
            "{lower_name} and {upper_name} overlap: {upper_name}.min {} <= {lower_name}.max {}",
            upper.min, lower.max
        ));
        return;
    };
    if upper.min > expected {
        errors.push(format!(
            "gap between {lower_name} and {upper_name}: scores {expected}..{} are uncovered",
            upper.min - 1
        ));
    } else if upper.min < expected {
        errors.push(format!(
            "{lower_name} and {upper_name} overlap: {upper_name}.min {} <= {lower_name}.max {}",
            upper.min, lower.max
        ));
    }
}

/// Accept a score supplied as a float only when it is a finite whole number.
pub fn score_from_f64(value: f64) -> Result<i64, ThresholdError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ThresholdError::NonIntegerScore(value));
    }
    Ok(value as i64)
}
