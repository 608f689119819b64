pub mod mood;
pub mod record;

pub use mood::{MoodLabel, MOOD_LABELS};
pub use record::MoodRecord;
