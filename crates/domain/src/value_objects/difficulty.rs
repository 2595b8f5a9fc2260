//! Trail difficulty rating

use std::fmt;

use serde::{Deserialize, Serialize};

/// Difficulty rating as produced by the video analysis backend
///
/// The backend emits either a number, a numeric string ("7") or a label such
/// as "Unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DifficultyRating {
    /// Numeric score
    Score(f64),
    /// Free-form label, usually a numeric string or "Unknown"
    Label(String),
}

impl DifficultyRating {
    /// Numeric score on the 1-10 scale, if one can be read
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        let score = match self {
            Self::Score(score) => *score,
            Self::Label(label) => leading_number(label)?,
        };
        score.is_finite().then_some(score)
    }

    /// Difficulty band for this rating
    #[must_use]
    pub fn band(&self) -> DifficultyBand {
        self.score()
            .map_or(DifficultyBand::Unrated, DifficultyBand::from_score)
    }
}

/// Parse the numeric prefix of a label, e.g. "7/10" or "6.5 (technical)"
fn leading_number(label: &str) -> Option<f64> {
    let trimmed = label.trim();
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..end].parse().ok()
}

impl fmt::Display for DifficultyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Score(score) => write!(f, "{score}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

/// Coarse difficulty band used to colour and filter trails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyBand {
    /// Score up to 3
    Easy,
    /// Score up to 5
    Moderate,
    /// Score up to 7
    Hard,
    /// Score above 7
    Extreme,
    /// No usable score
    Unrated,
}

impl DifficultyBand {
    /// Band for a 1-10 score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score <= 3.0 {
            Self::Easy
        } else if score <= 5.0 {
            Self::Moderate
        } else if score <= 7.0 {
            Self::Hard
        } else {
            Self::Extreme
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
            Self::Unrated => "Not rated",
        }
    }
}

impl fmt::Display for DifficultyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
