use super::mood::MoodLabel;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single timestamped mood submission.
///
/// The calendar day a record belongs to is derived from the full timestamp;
/// when several records land on the same day, downstream aggregation keeps
/// the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
	pub recorded_at: NaiveDateTime,
	pub mood: MoodLabel,
}

impl MoodRecord {
	#[must_use]
	pub const fn new(recorded_at: NaiveDateTime, mood: MoodLabel) -> Self {
		Self { recorded_at, mood }
	}

	/// Calendar day this record lands on.
	#[must_use]
	pub fn date(&self) -> NaiveDate {
		self.recorded_at.date()
	}
}
