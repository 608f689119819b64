use chrono::{Datelike, Utc};
use mood_metrics::{month_series, predict_next_mood, MoodInsights, MoodLabel};
use mood_store::{CreateMoodRecord, MoodStoreRepository};
use std::str::FromStr;

pub async fn log_mood(repository: &MoodStoreRepository, mood: &str) -> anyhow::Result<()> {
	let mood = MoodLabel::from_str(mood)?;

	let stored = repository
		.create(CreateMoodRecord {
			recorded_at: Utc::now().naive_utc(),
			mood,
		})
		.await?;

	tracing::info!(id = stored.id, "recorded mood {mood}");
	println!("Your mood has been set to {mood}");
	Ok(())
}

pub async fn print_series(repository: &MoodStoreRepository, year: Option<i32>, month: Option<u32>, json: bool) -> anyhow::Result<()> {
	let today = Utc::now().date_naive();
	let year = year.unwrap_or_else(|| today.year());
	let month = month.unwrap_or_else(|| today.month());

	let history = repository.history().await?;
	let series = month_series(&history, year, month)?;

	if json {
		println!("{}", serde_json::to_string(&series)?);
		return Ok(());
	}

	println!("Mood for {year:04}-{month:02}");
	for slot in &series {
		match slot.mood {
			Some(mood) => println!("{:02}  {} ({})", slot.day, mood, mood.rank()),
			None => println!("{:02}  -", slot.day),
		}
	}
	Ok(())
}

pub async fn print_insights(repository: &MoodStoreRepository, json: bool) -> anyhow::Result<()> {
	let history = repository.history().await?;
	let insights = MoodInsights::from_records(&history);

	if json {
		println!("{}", serde_json::to_string(&insights)?);
		return Ok(());
	}

	match insights.most_frequent_mood {
		Some(mood) => println!("Most Frequent Mood: {mood}"),
		None => println!("Most Frequent Mood: no history yet"),
	}
	println!("Average Mood: {}", insights.average_label());
	Ok(())
}

pub async fn print_prediction(repository: &MoodStoreRepository, lookback: usize) -> anyhow::Result<()> {
	let history = repository.history().await?;
	let predicted = predict_next_mood(&history, lookback);

	println!("Predicted Mood For Tomorrow: {predicted}");
	Ok(())
}
