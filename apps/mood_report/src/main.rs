mod cli;
mod config;
mod report;

use anyhow::Context;
use clap::Parser;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, util::SubscriberInitExt, Layer};

use cli::{Cli, Commands};
use config::Config;
use mood_store::MoodStoreRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let cli = Cli::parse();
	init_tracing(&cli.config);

	let pool = SqlitePoolOptions::new()
		.max_connections(5)
		.connect(&cli.config.database_url)
		.await
		.context(format!("could not connect to {}", cli.config.database_url))?;

	let repository = MoodStoreRepository::new(pool);
	repository.init_schema().await.context("could not initialize the mood_records schema")?;
	tracing::debug!("connected to {}", cli.config.database_url);

	match cli.command {
		Commands::Log { mood } => report::log_mood(&repository, &mood).await?,
		Commands::Series { year, month, json } => report::print_series(&repository, year, month, json).await?,
		Commands::Insights { json } => report::print_insights(&repository, json).await?,
		Commands::Predict { lookback } => report::print_prediction(&repository, lookback).await?,
	}

	Ok(())
}

pub fn init_tracing(config: &Config) -> Option<()> {
	use std::str::FromStr;
	use tracing_subscriber::layer::SubscriberExt;

	let filter = EnvFilter::from_str(config.rust_log.as_deref()?).ok()?;

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(
				tracing_subscriber::fmt::layer()
					.event_format(tracing_subscriber::fmt::format().pretty())
					.with_filter(filter),
			)
		})
		.init();
	None
}
