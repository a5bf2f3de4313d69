use crate::charset::CharacterClass;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest score reported for display, whatever the password.
pub const SCORE_FLOOR: u8 = 5;
pub const MAX_SCORE: u8 = 100;

const LENGTH_POINTS_CAP: usize = 40;
const POINTS_PER_CLASS: u8 = 15;
const SHORT_PASSWORD_LEN: usize = 8;
const SHORT_PASSWORD_CAP: u8 = 40;
const MEDIUM_THRESHOLD: u8 = 40;
const STRONG_THRESHOLD: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    fn from_raw_score(raw_score: u8) -> Self {
        if raw_score < MEDIUM_THRESHOLD {
            StrengthLabel::Weak
        } else if raw_score < STRONG_THRESHOLD {
            StrengthLabel::Medium
        } else {
            StrengthLabel::Strong
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthAssessment {
    /// Display score in `SCORE_FLOOR..=MAX_SCORE`, used for the meter width.
    pub score: u8,
    /// Score after the short-password cap but before the display floor.
    ///
    /// Passwords under eight characters are labelled weak even when this is 40.
    pub raw_score: u8,
    pub label: StrengthLabel,
}

/// Scores a password from its length and the character classes it uses.
///
/// Length is worth two points per character up to 40, and each class present
/// is worth 15. Passwords shorter than eight characters are capped at 40 and
/// always labelled weak.
pub fn score_strength(password: &str) -> StrengthAssessment {
    let len = password.chars().count();
    let length_points = len.saturating_mul(2).min(LENGTH_POINTS_CAP) as u8;

    let classes_present = CharacterClass::ALL
        .iter()
        .filter(|class| password.chars().any(|c| class.contains(c)))
        .count() as u8;
    let class_points = classes_present * POINTS_PER_CLASS;

    let mut raw_score = length_points + class_points;
    let label = if len < SHORT_PASSWORD_LEN {
        raw_score = raw_score.min(SHORT_PASSWORD_CAP);
        StrengthLabel::Weak
    } else {
        StrengthLabel::from_raw_score(raw_score)
    };

    debug!(
        "scored password of length {}: {} class(es), raw score {}",
        len, classes_present, raw_score
    );

    StrengthAssessment {
        score: raw_score.clamp(SCORE_FLOOR, MAX_SCORE),
        raw_score,
        label,
    }
}
