use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	/// The request never produced a response (connection refused, DNS, reset...).
	#[error("request could not complete: {0}")]
	Network(#[source] reqwest::Error),
	/// The backend answered with a non-2xx status.
	#[error("request failed with status {status}: {body}")]
	Http { status: StatusCode, body: String },
	#[error("failed to decode response body: {0}")]
	Decode(#[source] serde_json::Error),
	/// A required parameter is missing; no request was issued.
	#[error("{0}")]
	Validation(String),
	#[error("invalid api url <url='{0}'>")]
	InvalidUrl(String),
}

impl Error {
	/// HTTP status carried by the error, if the backend answered at all.
	#[must_use]
	pub const fn status(&self) -> Option<StatusCode> {
		match self {
			Self::Http { status, .. } => Some(*status),
			_ => None,
		}
	}

	#[must_use]
	pub fn is_not_found(&self) -> bool {
		self.status() == Some(StatusCode::NOT_FOUND)
	}
}

impl From<url::ParseError> for Error {
	fn from(e: url::ParseError) -> Self {
		Self::InvalidUrl(e.to_string())
	}
}
