use crate::config::Config;
use clap::{Parser, Subcommand};

#[derive(Parser)]
pub struct Cli {
	#[clap(flatten)]
	pub config: Config,

	#[clap(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Record a mood for right now.
	Log { mood: String },

	/// Print the calendar series for one month (the current month by default).
	Series {
		#[arg(long)]
		year: Option<i32>,

		#[arg(long)]
		month: Option<u32>,

		#[arg(long, default_value_t = false)]
		json: bool,
	},

	/// Summarize the full history.
	Insights {
		#[arg(long, default_value_t = false)]
		json: bool,
	},

	/// Predict the upcoming mood from recent history.
	Predict {
		#[arg(long, default_value_t = mood_metrics::DEFAULT_LOOKBACK)]
		lookback: usize,
	},
}
