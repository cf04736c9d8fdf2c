//! `/api/search`

use serde::Serialize;
use tracing::debug;

use super::{execute, Error, RequestConfig, SearchResult};

/// Whether a search must name the user whose articles get boosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsernamePolicy {
	#[default]
	Required,
	Optional,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
	pub q: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub username: Option<String>,
}

impl SearchParams {
	pub fn new(q: impl Into<String>) -> Self {
		Self {
			q: q.into(),
			username: None,
		}
	}

	#[must_use]
	pub fn with_username(mut self, username: impl Into<String>) -> Self {
		let username = username.into();
		self.username = (!username.trim().is_empty()).then_some(username);
		self
	}

	/// Checks the parameters the policy demands, before anything hits the network.
	pub fn validate(&self, policy: UsernamePolicy) -> Result<(), Error> {
		let has_username = self
			.username
			.as_deref()
			.is_some_and(|u| !u.trim().is_empty());

		if policy == UsernamePolicy::Required && !has_username {
			return Err(Error::Validation("username is required".to_string()));
		}

		Ok(())
	}
}

pub async fn exec(
	config: &RequestConfig,
	params: &SearchParams,
	policy: UsernamePolicy,
) -> Result<Response, Error> {
	params.validate(policy)?;

	let url = config.endpoint(&["api", "search"])?;
	debug!(%url, q = %params.q, username = ?params.username, "searching");

	// The service answers `null` when nothing matched
	execute::<Option<Response>>(config.client.get(url).query(params))
		.await
		.map(Option::unwrap_or_default)
}

pub type Response = Vec<SearchResult>;
