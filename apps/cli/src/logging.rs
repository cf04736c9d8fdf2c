//! Tracing setup: stderr plus a daily log file under `{data_dir}/logs`.

use std::path::Path;

use anyhow::{anyhow, Result};
use tracing_appender::{
	non_blocking::WorkerGuard,
	rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
	filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

const CRATES: [&str; 3] = ["nd_cli", "nd_core", "nd_client"];

/// Installs the global subscriber. Keep the guard alive until exit so the file gets flushed.
pub fn init(logs_dir: &Path, level: &str) -> Result<WorkerGuard> {
	std::fs::create_dir_all(logs_dir)?;

	let file_appender = RollingFileAppender::new(Rotation::DAILY, logs_dir, "nd.log");
	let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

	// The terminal only shows problems unless RUST_LOG asks for more
	let stderr_level = if std::env::var_os("RUST_LOG").is_some() {
		LevelFilter::TRACE
	} else {
		LevelFilter::WARN
	};

	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level))))
		.with(
			fmt::layer()
				.with_target(false)
				.without_time()
				.with_writer(std::io::stderr)
				.with_filter(stderr_level),
		)
		.with(
			fmt::layer()
				.with_target(true)
				.with_ansi(false) // No ANSI colors in log files
				.with_writer(non_blocking),
		)
		.try_init()
		.map_err(|e| anyhow!("Failed to initialize tracing: {e}"))?;

	Ok(guard)
}

/// Expands a bare level such as `debug` to our crates; full directives pass through.
fn directives(level: &str) -> String {
	let level = level.trim();
	if level.is_empty() {
		return directives("info");
	}

	if level.contains('=') || level.contains(',') {
		return level.to_string();
	}

	CRATES
		.iter()
		.map(|krate| format!("{krate}={level}"))
		.collect::<Vec<_>>()
		.join(",")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bare_levels_apply_to_our_crates() {
		assert_eq!(
			directives("info"),
			"nd_cli=info,nd_core=info,nd_client=info"
		);
		assert_eq!(directives(""), directives("info"));
		assert_eq!(directives("nd_client=trace"), "nd_client=trace");
	}
}
