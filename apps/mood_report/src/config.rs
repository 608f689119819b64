use clap::Parser;

#[derive(Parser, Debug, Clone)]
pub struct Config {
	#[arg(long, env = "DATABASE_URL")]
	pub database_url: String,

	#[arg(long, env = "RUST_LOG")]
	pub rust_log: Option<String>,

	/// Emit logs as JSON instead of the pretty format.
	#[arg(long, default_value_t = false)]
	pub log_json: bool,
}
