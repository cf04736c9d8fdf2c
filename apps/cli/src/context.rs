use anyhow::{Context as _, Result};
use nd_client::{Backend, HttpBackend, RequestConfig};
use nd_core::AppConfig;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
	Human,
	Json,
}

pub struct Context {
	pub backend: HttpBackend,
	pub config: AppConfig,
	pub format: OutputFormat,
}

impl Context {
	/// `api_url` wins over the configured URL when given.
	pub fn new(config: AppConfig, api_url: Option<&str>, format: OutputFormat) -> Result<Self> {
		let api_url = api_url.unwrap_or(&config.api_url);
		let request = RequestConfig::new(api_url)
			.with_context(|| format!("Invalid API URL {api_url:?}"))?;

		tracing::debug!(api_url = %request.api_url, "using backend");

		Ok(Self {
			backend: HttpBackend::new(request),
			config,
			format,
		})
	}

	pub fn backend(&self) -> &dyn Backend {
		&self.backend
	}

	pub fn is_human(&self) -> bool {
		matches!(self.format, OutputFormat::Human)
	}
}
