use super::model::{CreateMoodRecord, StoredMood};
use super::queries;
use super::schema;
use mood_metrics::MoodRecord;
use sqlx::{Error, Sqlite, SqlitePool, Transaction};

/// Sqlite-backed store for mood submissions.
pub struct MoodStoreRepository {
	pub pool: SqlitePool,
}

impl MoodStoreRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	pub async fn init_schema(&self) -> Result<(), Error> {
		schema::init_schema(&self.pool).await
	}

	pub async fn create(&self, record: CreateMoodRecord) -> Result<StoredMood, Error> {
		let mut tx = self.pool.begin().await?;
		let result = self.create_with_transaction(&mut tx, record).await?;
		tx.commit().await?;
		Ok(result)
	}

	pub async fn create_with_transaction(&self, tx: &mut Transaction<'_, Sqlite>, record: CreateMoodRecord) -> Result<StoredMood, Error> {
		let rank = record.mood.rank();
		let id = queries::insert_mood(tx, record.recorded_at, rank).await?;

		Ok(StoredMood {
			id,
			recorded_at: record.recorded_at,
			mood: rank,
		})
	}

	pub async fn batch_create(&self, records: Vec<CreateMoodRecord>) -> Result<Vec<StoredMood>, Error> {
		if records.is_empty() {
			return Ok(vec![]);
		}

		let mut tx = self.pool.begin().await?;
		let mut results = Vec::with_capacity(records.len());

		for record in records {
			let result = self.create_with_transaction(&mut tx, record).await?;
			results.push(result);
		}

		tx.commit().await?;
		Ok(results)
	}

	pub async fn get_by_id(&self, id: i64) -> Result<Option<StoredMood>, Error> {
		queries::fetch_mood_by_id(&self.pool, id).await
	}

	pub async fn get_all(&self) -> Result<Vec<StoredMood>, Error> {
		queries::fetch_all_moods(&self.pool).await
	}

	pub async fn get_month(&self, year: i32, month: u32) -> Result<Vec<StoredMood>, Error> {
		queries::fetch_moods_in_month(&self.pool, year, month).await
	}

	pub async fn delete(&self, id: i64) -> Result<bool, Error> {
		let rows_affected = sqlx::query("DELETE FROM mood_records WHERE id = ?").bind(id).execute(&self.pool).await?.rows_affected();

		Ok(rows_affected > 0)
	}

	/// Full chronological history as engine records.
	pub async fn history(&self) -> Result<Vec<MoodRecord>, Error> {
		let rows = queries::fetch_all_moods(&self.pool).await?;
		Ok(rows.iter().map(StoredMood::to_record).collect())
	}
}
