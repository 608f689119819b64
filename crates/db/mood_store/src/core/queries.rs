use super::model::StoredMood;
use chrono::NaiveDateTime;
use sqlx::{Error, Sqlite, SqlitePool, Transaction};

pub async fn insert_mood(tx: &mut Transaction<'_, Sqlite>, recorded_at: NaiveDateTime, rank: i64) -> Result<i64, Error> {
	let id = sqlx::query("INSERT INTO mood_records (recorded_at, mood) VALUES (?, ?)")
		.bind(recorded_at)
		.bind(rank)
		.execute(&mut **tx)
		.await?
		.last_insert_rowid();

	Ok(id)
}

pub async fn fetch_mood_by_id(pool: &SqlitePool, id: i64) -> Result<Option<StoredMood>, Error> {
	sqlx::query_as::<_, StoredMood>("SELECT id, recorded_at, mood FROM mood_records WHERE id = ?")
		.bind(id)
		.fetch_optional(pool)
		.await
}

pub async fn fetch_all_moods(pool: &SqlitePool) -> Result<Vec<StoredMood>, Error> {
	sqlx::query_as::<_, StoredMood>("SELECT id, recorded_at, mood FROM mood_records ORDER BY recorded_at ASC, id ASC")
		.fetch_all(pool)
		.await
}

pub async fn fetch_moods_in_month(pool: &SqlitePool, year: i32, month: u32) -> Result<Vec<StoredMood>, Error> {
	let month_key = format!("{year:04}-{month:02}");

	sqlx::query_as::<_, StoredMood>(
		r#"
        SELECT id, recorded_at, mood
        FROM mood_records
        WHERE strftime('%Y-%m', recorded_at) = ?
        ORDER BY recorded_at ASC, id ASC
        "#,
	)
	.bind(month_key)
	.fetch_all(pool)
	.await
}
