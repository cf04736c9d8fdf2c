//! Application configuration

use super::default_data_dir;
use anyhow::{anyhow, bail, Result};
use nd_client::UsernamePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const CONFIG_FILE: &str = "newsdesk.json";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
	/// Config schema version
	pub version: u32,

	/// Base URL of the newsdesk API
	pub api_url: String,

	/// Username sent with searches when none is given
	#[serde(default)]
	pub username: Option<String>,

	/// Whether searches must name a user
	#[serde(default = "default_true")]
	pub require_username: bool,

	/// Logging level
	pub log_level: String,

	/// Data directory path, resolved at load time
	#[serde(skip)]
	pub data_dir: PathBuf,
}

fn default_true() -> bool {
	true
}

impl AppConfig {
	/// Keys accepted by [`Self::get`] and [`Self::set`]
	pub const KEYS: &'static [&'static str] =
		&["api_url", "username", "require_username", "log_level"];

	/// Load configuration from the default location
	pub fn load() -> Result<Self> {
		let data_dir = default_data_dir()?;
		Self::load_from(&data_dir)
	}

	/// Load configuration from a specific data directory, creating a default one if missing
	pub fn load_from(data_dir: &Path) -> Result<Self> {
		let config_path = data_dir.join(CONFIG_FILE);

		if config_path.exists() {
			info!("Loading config from {:?}", config_path);
			let json = fs::read_to_string(&config_path)?;
			let mut config: AppConfig = serde_json::from_str(&json)?;
			config.data_dir = data_dir.to_path_buf();

			if config.version < Self::target_version() {
				info!(
					"Migrating config from v{} to v{}",
					config.version,
					Self::target_version()
				);
				config.version = Self::target_version();
				config.save()?;
			}

			Ok(config)
		} else {
			warn!("No config found, creating default at {:?}", config_path);
			let config = Self::default_with_dir(data_dir.to_path_buf());
			config.save()?;
			Ok(config)
		}
	}

	/// Create default configuration with specific data directory
	pub fn default_with_dir(data_dir: PathBuf) -> Self {
		Self {
			version: Self::target_version(),
			api_url: "http://localhost:8080".to_string(),
			username: None,
			require_username: true,
			log_level: "info".to_string(),
			data_dir,
		}
	}

	pub fn target_version() -> u32 {
		1
	}

	/// Save configuration to disk
	pub fn save(&self) -> Result<()> {
		// Ensure directory exists
		fs::create_dir_all(&self.data_dir)?;

		let config_path = self.config_path();
		let json = serde_json::to_string_pretty(self)?;
		fs::write(&config_path, json)?;
		info!("Saved config to {:?}", config_path);
		Ok(())
	}

	pub fn config_path(&self) -> PathBuf {
		self.data_dir.join(CONFIG_FILE)
	}

	/// Get the path for logs directory
	pub fn logs_dir(&self) -> PathBuf {
		self.data_dir.join("logs")
	}

	pub fn username_policy(&self) -> UsernamePolicy {
		if self.require_username {
			UsernamePolicy::Required
		} else {
			UsernamePolicy::Optional
		}
	}

	pub fn get(&self, key: &str) -> Result<String> {
		Ok(match key {
			"api_url" => self.api_url.clone(),
			"username" => self.username.clone().unwrap_or_default(),
			"require_username" => self.require_username.to_string(),
			"log_level" => self.log_level.clone(),
			other => bail!("Unknown config key: {other}"),
		})
	}

	/// Update a single key; call [`Self::save`] to persist it
	pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
		match key {
			"api_url" => {
				url::Url::parse(value).map_err(|e| anyhow!("Invalid api_url {value:?}: {e}"))?;
				self.api_url = value.to_string();
			}
			"username" => {
				self.username = (!value.trim().is_empty()).then(|| value.trim().to_string());
			}
			"require_username" => {
				self.require_username = value
					.parse()
					.map_err(|_| anyhow!("require_username must be true or false"))?;
			}
			"log_level" => self.log_level = value.to_string(),
			other => bail!("Unknown config key: {other}"),
		}
		Ok(())
	}
}

impl Default for AppConfig {
	fn default() -> Self {
		let data_dir = default_data_dir().unwrap_or_else(|_| PathBuf::from("."));
		Self::default_with_dir(data_dir)
	}
}
