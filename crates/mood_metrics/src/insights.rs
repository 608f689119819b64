use crate::schema::{MoodLabel, MoodRecord, MOOD_LABELS};
use serde::{Deserialize, Serialize};

/// Summary projections over a full mood history.
///
/// Recomputed from the records on every fetch; nothing here is cached or
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodInsights {
	pub most_frequent_mood: Option<MoodLabel>,
	pub average_mood: Option<f64>,
}

impl MoodInsights {
	#[must_use]
	pub fn from_records(records: &[MoodRecord]) -> Self {
		Self {
			most_frequent_mood: most_frequent_mood(records),
			average_mood: average_rank(records),
		}
	}

	/// The average rank rendered as a label, `Neutral` when there is no
	/// history to average.
	#[must_use]
	pub fn average_label(&self) -> MoodLabel {
		self.average_mood.map_or(MoodLabel::Neutral, MoodLabel::from_rank)
	}
}

/// Mean rank over all records, `None` for an empty history.
#[must_use]
pub fn average_rank(records: &[MoodRecord]) -> Option<f64> {
	if records.is_empty() {
		return None;
	}

	let total: i64 = records.iter().map(|record| record.mood.rank()).sum();
	Some(total as f64 / records.len() as f64)
}

/// The label appearing most often in the history.
///
/// Ties break toward the lower rank so repeated calls over the same input
/// always pick the same label.
#[must_use]
pub fn most_frequent_mood(records: &[MoodRecord]) -> Option<MoodLabel> {
	if records.is_empty() {
		return None;
	}

	let mut counts = [0usize; 5];
	for record in records {
		counts[(record.mood.rank() - 1) as usize] += 1;
	}

	let mut best = MOOD_LABELS[0];
	let mut best_count = counts[0];
	for (i, label) in MOOD_LABELS.iter().enumerate().skip(1) {
		if counts[i] > best_count {
			best = *label;
			best_count = counts[i];
		}
	}

	Some(best)
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;

	fn history(moods: &[MoodLabel]) -> Vec<MoodRecord> {
		moods
			.iter()
			.enumerate()
			.map(|(i, mood)| {
				let day = i as u32 + 1;
				MoodRecord::new(NaiveDate::from_ymd_opt(2024, 4, day).unwrap().and_hms_opt(9, 0, 0).unwrap(), *mood)
			})
			.collect()
	}

	#[test]
	fn test_empty_history_has_no_insights() {
		let insights = MoodInsights::from_records(&[]);
		assert_eq!(insights.most_frequent_mood, None);
		assert_eq!(insights.average_mood, None);
		assert_eq!(insights.average_label(), MoodLabel::Neutral);
	}

	#[test]
	fn test_most_frequent_mood() {
		let records = history(&[MoodLabel::Happy, MoodLabel::Sad, MoodLabel::Happy, MoodLabel::Happy]);
		assert_eq!(most_frequent_mood(&records), Some(MoodLabel::Happy));
	}

	#[test]
	fn test_most_frequent_ties_break_toward_lower_rank() {
		let records = history(&[MoodLabel::Happy, MoodLabel::Angry, MoodLabel::Happy, MoodLabel::Angry]);
		assert_eq!(most_frequent_mood(&records), Some(MoodLabel::Angry));
	}

	#[test]
	fn test_average_rank() {
		let records = history(&[MoodLabel::Angry, MoodLabel::Happy]);
		assert_eq!(average_rank(&records), Some(2.5));
	}

	#[test]
	fn test_average_label_rounds_to_a_valid_rank() {
		let records = history(&[MoodLabel::Neutral, MoodLabel::Happy]);
		let insights = MoodInsights::from_records(&records);
		assert_eq!(insights.average_mood, Some(3.5));
		assert_eq!(insights.average_label(), MoodLabel::Happy);
	}

	#[test]
	fn test_insights_are_idempotent() {
		let records = history(&[MoodLabel::Sad, MoodLabel::Anxious, MoodLabel::Sad]);
		assert_eq!(MoodInsights::from_records(&records), MoodInsights::from_records(&records));
	}
}
