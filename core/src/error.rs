use std::{fmt::Display, sync::Arc};

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Error)]
pub enum Error {
	#[error(transparent)]
	Request(Arc<nd_client::Error>),
	#[error("required field is empty <field='{0}'>")]
	MissingField(&'static str),
	#[error("unknown field <field='{0}'>")]
	UnknownField(String),
	#[error("unknown entity type <type='{0}'>")]
	UnknownEntityType(String),
	#[error("the view was closed before the request completed")]
	Cancelled,
}

/// Coarse classification the shell uses to decide how to present a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// The request could not complete.
	NetworkFailure,
	/// The backend answered with a non-2xx status.
	HttpError { status: u16 },
	/// The backend answered 2xx with something that is not the expected payload.
	MalformedResponse,
	/// Something required was missing and was caught before any request.
	ValidationGap,
	Cancelled,
}

impl Error {
	#[must_use]
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Request(e) => match e.as_ref() {
				nd_client::Error::Network(_) => ErrorKind::NetworkFailure,
				nd_client::Error::Http { status, .. } => ErrorKind::HttpError {
					status: status.as_u16(),
				},
				nd_client::Error::Decode(_) => ErrorKind::MalformedResponse,
				nd_client::Error::Validation(_) | nd_client::Error::InvalidUrl(_) => {
					ErrorKind::ValidationGap
				}
			},
			Self::MissingField(_) | Self::UnknownField(_) | Self::UnknownEntityType(_) => {
				ErrorKind::ValidationGap
			}
			Self::Cancelled => ErrorKind::Cancelled,
		}
	}

	/// Whether retrying the same action could succeed without the user changing anything.
	#[must_use]
	pub fn is_retryable(&self) -> bool {
		match self.kind() {
			ErrorKind::NetworkFailure => true,
			ErrorKind::HttpError { status } => status >= 500,
			_ => false,
		}
	}

	#[must_use]
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::Request(e) if e.is_not_found())
	}
}

impl From<nd_client::Error> for Error {
	fn from(e: nd_client::Error) -> Self {
		Self::Request(Arc::new(e))
	}
}

/// Logs an error the view decided to swallow.
pub fn report_error<T>(context: &str, res: &Result<T, impl Display>) {
	if let Err(e) = res {
		warn!(%e, "{context}");
	}
}
