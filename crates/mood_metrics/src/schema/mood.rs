use crate::error::MoodLabelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five moods a record may carry, in rank order.
///
/// Ranks follow the chart scale the rest of the pipeline expects:
/// angry=1, anxious=2, neutral=3, happy=4, sad=5. Sad sits above happy on
/// this scale; the ordering is a fixed enumeration, not a valence axis, and
/// must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
	Angry,
	Anxious,
	Neutral,
	Happy,
	Sad,
}

/// Every label, rank 1 first.
pub const MOOD_LABELS: [MoodLabel; 5] = [MoodLabel::Angry, MoodLabel::Anxious, MoodLabel::Neutral, MoodLabel::Happy, MoodLabel::Sad];

impl MoodLabel {
	#[must_use]
	pub const fn rank(self) -> i64 {
		match self {
			Self::Angry => 1,
			Self::Anxious => 2,
			Self::Neutral => 3,
			Self::Happy => 4,
			Self::Sad => 5,
		}
	}

	/// Map a possibly fractional rank back to a label.
	///
	/// Rounds half-up to the nearest rank. Anything that does not land on
	/// the rank table after rounding, including non-finite input such as an
	/// average over empty history, falls back to `Neutral` rather than
	/// failing the caller.
	#[must_use]
	pub fn from_rank(rank: f64) -> Self {
		if !rank.is_finite() {
			return Self::Neutral;
		}

		match rank.round() as i64 {
			1 => Self::Angry,
			2 => Self::Anxious,
			4 => Self::Happy,
			5 => Self::Sad,
			_ => Self::Neutral,
		}
	}

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Angry => "angry",
			Self::Anxious => "anxious",
			Self::Neutral => "neutral",
			Self::Happy => "happy",
			Self::Sad => "sad",
		}
	}
}

impl fmt::Display for MoodLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for MoodLabel {
	type Err = MoodLabelError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"angry" => Ok(Self::Angry),
			"anxious" => Ok(Self::Anxious),
			"neutral" => Ok(Self::Neutral),
			"happy" => Ok(Self::Happy),
			"sad" => Ok(Self::Sad),
			_ => Err(MoodLabelError::unknown_label(s)),
		}
	}
}
