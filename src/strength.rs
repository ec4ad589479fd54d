//   ____             _____
//  |  _ \ __      __|  ___|  ___   _ __   __ _   ___
//  | |_) |\ \ /\ / /| |_    / _ \ | '__| / _` | / _ \
//  |  __/  \ V  V / |  _|  | (_) || |   | (_| ||  __/
//  |_|      \_/\_/  |_|     \___/ |_|    \__, | \___|
//                                        |___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength classifier

use std::fmt;
use zxcvbn::zxcvbn;
use zxcvbn::Score;
use crate::error::StrengthEvaluationError;

/// Anything that can rate a password on the 0-4 ordinal scale.
///
/// The generator only depends on this trait, so any estimation library
/// can be plugged in without touching the pool logic.
pub trait StrengthEstimator {
    fn estimate(&self, password: &str) -> Result<u8, StrengthEvaluationError>;
}

impl<F> StrengthEstimator for F
where
    F: Fn(&str) -> Result<u8, StrengthEvaluationError>,
{
    fn estimate(&self, password: &str) -> Result<u8, StrengthEvaluationError> {
        self(password)
    }
}

/// zxcvbn-backed estimator, the default oracle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnEstimator;

impl StrengthEstimator for ZxcvbnEstimator {
    fn estimate(&self, password: &str) -> Result<u8, StrengthEvaluationError> {
        let entropy = zxcvbn(password, &[]);
        match entropy.score() {
            Score::Zero => Ok(0),
            Score::One => Ok(1),
            Score::Two => Ok(2),
            Score::Three => Ok(3),
            Score::Four => Ok(4),
            #[allow(unreachable_patterns)]
            other => Err(StrengthEvaluationError::Oracle(format!("unknown zxcvbn score {:?}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Index = score.
    pub const ALL: [StrengthLabel; 5] = [
        StrengthLabel::VeryWeak,
        StrengthLabel::Weak,
        StrengthLabel::Fair,
        StrengthLabel::Strong,
        StrengthLabel::VeryStrong,
    ];

    pub fn from_score(score: u8) -> Option<Self> {
        Self::ALL.get(score as usize).copied()
    }

    pub fn score(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub label: StrengthLabel,
}

/// 评估密码强度
pub fn classify<E>(estimator: &E, password: &str) -> Result<Strength, StrengthEvaluationError>
where
    E: StrengthEstimator + ?Sized,
{
    let score = estimator.estimate(password)?;
    let label = StrengthLabel::from_score(score)
        .ok_or(StrengthEvaluationError::ScoreOutOfRange(score))?;
    Ok(Strength { score, label })
}

/// zxcvbn improvement suggestions, empty when it has none to offer.
pub fn suggestions(password: &str) -> Vec<String> {
    zxcvbn(password, &[]).feedback().map_or_else(
        Vec::new,
        |f| f.suggestions().iter().map(|s| s.to_string()).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_table() {
        let labels: Vec<&str> = (0..=4)
            .map(|s| StrengthLabel::from_score(s).unwrap().as_str())
            .collect();
        assert_eq!(labels, ["Very Weak", "Weak", "Fair", "Strong", "Very Strong"]);
        assert_eq!(StrengthLabel::from_score(5), None);
    }

    #[test]
    fn test_score_round_trips_through_label() {
        for label in StrengthLabel::ALL {
            assert_eq!(StrengthLabel::from_score(label.score()), Some(label));
        }
    }
}
