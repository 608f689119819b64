use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoodLabelError {
	#[error("Unknown mood label: {input}")]
	UnknownLabel { input: String },
}

impl MoodLabelError {
	#[must_use]
	pub fn unknown_label(input: &str) -> Self {
		Self::UnknownLabel { input: input.to_string() }
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
	#[error("Invalid calendar month: year {year}, month {month}")]
	InvalidMonth { year: i32, month: u32 },
}

impl SeriesError {
	#[must_use]
	pub const fn invalid_month(year: i32, month: u32) -> Self {
		Self::InvalidMonth { year, month }
	}
}
