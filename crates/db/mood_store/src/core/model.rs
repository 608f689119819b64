use chrono::NaiveDateTime;
use mood_metrics::{MoodLabel, MoodRecord};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A mood row as stored, with the rank kept as the raw integer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct StoredMood {
	pub id: i64,
	pub recorded_at: NaiveDateTime,
	pub mood: i64,
}

impl StoredMood {
	/// View the row as an engine record.
	///
	/// An out-of-range stored rank degrades to `neutral` instead of failing
	/// the whole read.
	#[must_use]
	pub fn to_record(&self) -> MoodRecord {
		MoodRecord::new(self.recorded_at, MoodLabel::from_rank(self.mood as f64))
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMoodRecord {
	pub recorded_at: NaiveDateTime,
	pub mood: MoodLabel,
}
