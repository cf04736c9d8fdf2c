//! Typed wrappers around the newsdesk REST API.
//!
//! Every operation is a single round trip: no retries, no timeout policy and no caching.
//! Each one either yields the decoded response body or an [`Error`] carrying what went wrong,
//! including the HTTP status and body when the backend rejected the request.

#![warn(
	clippy::all,
	clippy::correctness,
	clippy::perf,
	clippy::style,
	clippy::suspicious,
	clippy::complexity,
	clippy::unwrap_used,
	unused_qualifications,
	rust_2018_idioms,
	trivial_casts,
	trivial_numeric_casts,
	clippy::dbg_macro,
	deprecated
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

mod backend;
mod error;
mod models;

pub mod authors;
pub mod news;
pub mod search;
pub mod suggest;

pub use backend::{Backend, HttpBackend};
pub use error::Error;
pub use models::{Author, News, ResultKind, SearchResult, Suggestion};
pub use search::{SearchParams, UsernamePolicy};

pub use reqwest::StatusCode;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

pub struct RequestConfig {
	pub client: reqwest::Client,
	pub api_url: Url,
}

impl RequestConfig {
	pub fn new(api_url: &str) -> Result<Self, Error> {
		Self::with_client(reqwest::Client::new(), api_url)
	}

	pub fn with_client(client: reqwest::Client, api_url: &str) -> Result<Self, Error> {
		let api_url = Url::parse(api_url)?;
		if api_url.cannot_be_a_base() {
			return Err(Error::InvalidUrl(api_url.to_string()));
		}

		Ok(Self { client, api_url })
	}

	/// Builds `{api_url}/{segments...}`, percent-encoding each segment.
	pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
		let mut url = self.api_url.clone();
		url.path_segments_mut()
			.map_err(|()| Error::InvalidUrl(self.api_url.to_string()))?
			.pop_if_empty()
			.extend(segments);
		Ok(url)
	}
}

async fn checked(request: RequestBuilder) -> Result<reqwest::Response, Error> {
	let response = request.send().await.map_err(Error::Network)?;
	let status = response.status();

	if status.is_success() {
		return Ok(response);
	}

	let body = response.text().await.unwrap_or_default();
	warn!(%status, %body, "backend rejected request");
	Err(Error::Http { status, body })
}

/// Sends the request and decodes a JSON body.
pub(crate) async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, Error> {
	let bytes = checked(request)
		.await?
		.bytes()
		.await
		.map_err(Error::Network)?;

	serde_json::from_slice(&bytes).map_err(Error::Decode)
}

/// Sends the request and ignores whatever body came back.
pub(crate) async fn execute_empty(request: RequestBuilder) -> Result<(), Error> {
	checked(request).await.map(|_| ())
}

/// Generic CRUD calls shared by the `news` and `authors` resources.
pub(crate) mod rest {
	use super::{execute, execute_empty, Error, RequestConfig};

	use serde::{de::DeserializeOwned, Serialize};
	use tracing::debug;

	pub async fn get<T: DeserializeOwned>(
		config: &RequestConfig,
		collection: &str,
		id: &str,
	) -> Result<T, Error> {
		let url = config.endpoint(&["api", collection, id])?;
		debug!(%url, "GET");
		execute(config.client.get(url)).await
	}

	pub async fn list<T: DeserializeOwned>(
		config: &RequestConfig,
		collection: &str,
	) -> Result<Vec<T>, Error> {
		let url = config.endpoint(&["api", collection])?;
		debug!(%url, "GET");
		// An empty collection may come back as `null`
		execute::<Option<Vec<T>>>(config.client.get(url))
			.await
			.map(Option::unwrap_or_default)
	}

	pub async fn create<T: Serialize + DeserializeOwned + Sync>(
		config: &RequestConfig,
		collection: &str,
		entity: &T,
	) -> Result<T, Error> {
		let url = config.endpoint(&["api", collection])?;
		debug!(%url, "POST");
		execute(config.client.post(url).json(entity)).await
	}

	pub async fn update<T: Serialize + DeserializeOwned + Sync>(
		config: &RequestConfig,
		collection: &str,
		id: &str,
		entity: &T,
	) -> Result<T, Error> {
		let url = config.endpoint(&["api", collection, id])?;
		debug!(%url, "PUT");
		execute(config.client.put(url).json(entity)).await
	}

	pub async fn delete(config: &RequestConfig, collection: &str, id: &str) -> Result<(), Error> {
		let url = config.endpoint(&["api", collection, id])?;
		debug!(%url, "DELETE");
		execute_empty(config.client.delete(url)).await
	}
}
