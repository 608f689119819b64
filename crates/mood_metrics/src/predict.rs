use crate::schema::{MoodLabel, MoodRecord};

/// Number of most recent records the prediction considers by default.
pub const DEFAULT_LOOKBACK: usize = 7;

/// Predict the upcoming mood from recent history.
///
/// Takes at most the last `lookback` records (oldest to newest), weights
/// each by its 1-based position in the window so the newest record counts
/// the most, and maps the weighted average rank back to a label. This is a
/// recency-weighted heuristic, not a fitted forecast. An empty window
/// yields `Neutral` unconditionally.
#[must_use]
pub fn predict_next_mood(records: &[MoodRecord], lookback: usize) -> MoodLabel {
	let start = records.len().saturating_sub(lookback);
	let window = &records[start..];
	if window.is_empty() {
		return MoodLabel::Neutral;
	}

	let mut weighted_sum = 0i64;
	let mut total_weight = 0i64;
	for (position, record) in window.iter().enumerate() {
		let weight = position as i64 + 1;
		weighted_sum += record.mood.rank() * weight;
		total_weight += weight;
	}

	MoodLabel::from_rank(weighted_sum as f64 / total_weight as f64)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::MOOD_LABELS;
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
	fn test_recent_records_dominate_the_prediction() {
		// 1*1 + 1*2 + 4*(3+4+5+6+7) = 103, total weight 28, average ~= 3.68
		let records = history(&[
			MoodLabel::Angry,
			MoodLabel::Angry,
			MoodLabel::Happy,
			MoodLabel::Happy,
			MoodLabel::Happy,
			MoodLabel::Happy,
			MoodLabel::Happy,
		]);

		assert_eq!(predict_next_mood(&records, DEFAULT_LOOKBACK), MoodLabel::Happy);
	}

	#[test]
	fn test_single_record_predicts_itself() {
		let records = history(&[MoodLabel::Sad]);
		assert_eq!(predict_next_mood(&records, DEFAULT_LOOKBACK), MoodLabel::Sad);
	}

	#[test]
	fn test_empty_history_defaults_to_neutral() {
		assert_eq!(predict_next_mood(&[], DEFAULT_LOOKBACK), MoodLabel::Neutral);
	}

	#[test]
	fn test_zero_lookback_defaults_to_neutral() {
		let records = history(&[MoodLabel::Sad, MoodLabel::Sad]);
		assert_eq!(predict_next_mood(&records, 0), MoodLabel::Neutral);
	}

	#[test]
	fn test_only_the_lookback_window_counts() {
		let mut moods = vec![MoodLabel::Sad; 10];
		moods.extend([MoodLabel::Happy, MoodLabel::Happy, MoodLabel::Happy]);
		let records = history(&moods);

		assert_eq!(predict_next_mood(&records, 3), MoodLabel::Happy);
	}

	#[test]
	fn test_always_returns_a_label_from_the_fixed_set() {
		for label in MOOD_LABELS {
			let records = history(&[label; 9]);
			assert_eq!(predict_next_mood(&records, DEFAULT_LOOKBACK), label);
		}
	}

	#[test]
	fn test_prediction_is_idempotent() {
		let records = history(&[MoodLabel::Anxious, MoodLabel::Neutral, MoodLabel::Happy]);
		let first = predict_next_mood(&records, DEFAULT_LOOKBACK);
		let second = predict_next_mood(&records, DEFAULT_LOOKBACK);
		assert_eq!(first, second);
	}
}
