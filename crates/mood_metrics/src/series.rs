use crate::error::SeriesError;
use crate::schema::{MoodLabel, MoodRecord};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One calendar day in a month series.
///
/// `mood` is `None` for days without a record so a plotting layer can skip
/// the point instead of drawing a false low value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySlot {
	pub day: u32,
	pub mood: Option<MoodLabel>,
}

impl DaySlot {
	#[must_use]
	pub fn rank(&self) -> Option<i64> {
		self.mood.map(MoodLabel::rank)
	}
}

/// Number of days in a calendar month, `None` when the month is invalid.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
	let first = NaiveDate::from_ymd_opt(year, month, 1)?;
	let next = if month == 12 {
		NaiveDate::from_ymd_opt(year + 1, 1, 1)?
	} else {
		NaiveDate::from_ymd_opt(year, month + 1, 1)?
	};

	Some(next.signed_duration_since(first).num_days() as u32)
}

/// Calendar-complete series for one month: exactly one slot per day, in
/// ascending day order.
///
/// The latest record per day wins, decided by the full timestamp rather
/// than the date alone; on an exact timestamp tie the earlier record in
/// input order is kept. Records outside the target month are ignored.
pub fn month_series(records: &[MoodRecord], year: i32, month: u32) -> Result<Vec<DaySlot>, SeriesError> {
	let days = days_in_month(year, month).ok_or(SeriesError::invalid_month(year, month))?;

	let mut latest: HashMap<u32, &MoodRecord> = HashMap::new();
	for record in records {
		let date = record.date();
		if date.year() != year || date.month() != month {
			continue;
		}

		let slot = latest.entry(date.day()).or_insert(record);
		if record.recorded_at > slot.recorded_at {
			*slot = record;
		}
	}

	Ok(
		(1..=days)
			.map(|day| DaySlot {
				day,
				mood: latest.get(&day).map(|record| record.mood),
			})
			.collect(),
	)
}
