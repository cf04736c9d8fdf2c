//! `/api/suggest`

use tracing::debug;

use super::{execute, Error, RequestConfig, Suggestion};

pub async fn exec(config: &RequestConfig, query: &str) -> Result<Response, Error> {
	let url = config.endpoint(&["api", "suggest"])?;
	debug!(%url, q = query, "fetching suggestions");

	execute::<Option<Response>>(config.client.get(url).query(&[("q", query)]))
		.await
		.map(Option::unwrap_or_default)
}

pub type Response = Vec<Suggestion>;
