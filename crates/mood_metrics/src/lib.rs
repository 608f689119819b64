pub mod error;
pub mod insights;
pub mod predict;
pub mod schema;
pub mod series;

pub use error::{MoodLabelError, SeriesError};
pub use insights::{average_rank, most_frequent_mood, MoodInsights};
pub use predict::{predict_next_mood, DEFAULT_LOOKBACK};
pub use schema::{MoodLabel, MoodRecord, MOOD_LABELS};
pub use series::{days_in_month, month_series, DaySlot};
