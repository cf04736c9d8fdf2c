use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::Error;

/// Cancellation scope of a mounted view.
///
/// Every request a view issues runs inside its lifetime; closing the view (or superseding a
/// load) resolves the request with [`Error::Cancelled`] instead of letting a late response
/// land on state that moved on.
#[derive(Debug, Clone, Default)]
pub struct ViewLifetime {
	token: CancellationToken,
}

impl ViewLifetime {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// A nested scope, closed together with its parent or on its own.
	#[must_use]
	pub fn child(&self) -> Self {
		Self {
			token: self.token.child_token(),
		}
	}

	pub fn close(&self) {
		self.token.cancel();
	}

	#[must_use]
	pub fn is_closed(&self) -> bool {
		self.token.is_cancelled()
	}

	pub async fn run<T, E>(&self, request: impl Future<Output = Result<T, E>>) -> Result<T, Error>
	where
		Error: From<E>,
	{
		tokio::select! {
			biased;

			() = self.token.cancelled() => Err(Error::Cancelled),
			res = request => res.map_err(Error::from),
		}
	}
}
