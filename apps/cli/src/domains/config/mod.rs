use anyhow::Result;
use clap::Subcommand;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Table};
use nd_core::AppConfig;

use crate::context::OutputFormat;
use crate::util::output::print_json;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
	/// Show all configuration
	Show,
	/// Get a configuration value
	Get {
		/// Configuration key (e.g., "api_url", "username")
		key: String,
	},
	/// Set a configuration value
	Set {
		/// Configuration key
		key: String,
		/// Configuration value
		value: String,
	},
}

pub fn run(mut config: AppConfig, format: OutputFormat, cmd: ConfigCmd) -> Result<()> {
	match cmd {
		ConfigCmd::Show => match format {
			OutputFormat::Json => print_json(&config),
			OutputFormat::Human => {
				let mut table = Table::new();
				table.load_preset(UTF8_BORDERS_ONLY);
				table.set_header(vec!["Key", "Value"]);

				for key in AppConfig::KEYS {
					let value = config.get(key)?;
					let value = if value.is_empty() {
						"(not set)".to_string()
					} else {
						value
					};
					table.add_row(vec![key.to_string(), value]);
				}

				println!("{}", table);
				println!();
				println!("Config file: {}", config.config_path().display());
			}
		},
		ConfigCmd::Get { key } => {
			println!("{}", config.get(&key)?);
		}
		ConfigCmd::Set { key, value } => {
			config.set(&key, &value)?;
			config.save()?;
			println!("Set {} = {}", key, config.get(&key)?);
		}
	}

	Ok(())
}
