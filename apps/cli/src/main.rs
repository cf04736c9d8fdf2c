use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use nd_core::AppConfig;

mod context;
mod domains;
mod logging;
mod ui;
mod util;

use context::{Context, OutputFormat};
use domains::{authors::AuthorsCmd, config::ConfigCmd, news::NewsCmd, search::SearchArgs};

#[derive(Parser, Debug)]
#[command(name = "nd", about = "Newsdesk: manage news articles and authors from the terminal")]
struct Cli {
	/// Base URL of the newsdesk API (overrides the configured one)
	#[arg(long, env = "NEWSDESK_API_URL", global = true)]
	api_url: Option<String>,

	/// Path to the newsdesk data directory
	#[arg(long, global = true)]
	data_dir: Option<PathBuf>,

	/// Output format
	#[arg(long, value_enum, default_value = "human", global = true)]
	format: OutputFormat,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Open a view by path, e.g. `/list/news?q=rust` or `/edit/authors/a1`
	///
	/// Views are read-only; edit routes show the entity and the command that edits it.
	Open {
		path: String,
	},
	/// News articles
	#[command(subcommand)]
	News(NewsCmd),
	/// Authors
	#[command(subcommand)]
	Authors(AuthorsCmd),
	/// Full-text search over articles and authors
	Search(SearchArgs),
	/// Autocomplete suggestions for a prefix
	Suggest {
		query: String,
	},
	/// Show or change configuration
	#[command(subcommand)]
	Config(ConfigCmd),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
	if let Err(e) = run(Cli::parse()).await {
		eprintln!("{} {e:#}", "error:".red().bold());
		if e.downcast_ref::<nd_core::Error>().is_some_and(nd_core::Error::is_retryable) {
			eprintln!("{}", "The request may succeed if retried.".dimmed());
		}
		std::process::exit(1);
	}
}

async fn run(cli: Cli) -> Result<()> {
	let data_dir = match cli.data_dir {
		Some(dir) => dir,
		None => nd_core::config::default_data_dir()?,
	};
	let config = AppConfig::load_from(&data_dir)?;
	let _guard = logging::init(&config.logs_dir(), &config.log_level)?;

	let connect = |config: AppConfig| Context::new(config, cli.api_url.as_deref(), cli.format);

	match cli.command {
		Commands::Config(cmd) => domains::config::run(config, cli.format, cmd),
		Commands::Open { path } => domains::open::run(&connect(config)?, &path).await,
		Commands::News(cmd) => domains::news::run(&connect(config)?, cmd).await,
		Commands::Authors(cmd) => domains::authors::run(&connect(config)?, cmd).await,
		Commands::Search(args) => domains::search::run(&connect(config)?, args).await,
		Commands::Suggest { query } => domains::search::suggest(&connect(config)?, &query).await,
	}
}
