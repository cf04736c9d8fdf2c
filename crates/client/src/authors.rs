//! `/api/authors`

use super::{rest, Author, Error, RequestConfig};

const COLLECTION: &str = "authors";

pub use get::exec as get;
pub mod get {
	use super::*;

	pub async fn exec(config: &RequestConfig, id: &str) -> Result<Response, Error> {
		rest::get(config, COLLECTION, id).await
	}

	pub type Response = Author;
}

pub use list::exec as list;
pub mod list {
	use super::*;

	pub async fn exec(config: &RequestConfig) -> Result<Response, Error> {
		rest::list(config, COLLECTION).await
	}

	pub type Response = Vec<Author>;
}

pub use create::exec as create;
pub mod create {
	use super::*;

	pub async fn exec(config: &RequestConfig, author: &Author) -> Result<Response, Error> {
		rest::create(config, COLLECTION, author).await
	}

	pub type Response = Author;
}

pub use update::exec as update;
pub mod update {
	use super::*;

	pub async fn exec(
		config: &RequestConfig,
		id: &str,
		author: &Author,
	) -> Result<Response, Error> {
		rest::update(config, COLLECTION, id, author).await
	}

	pub type Response = Author;
}

pub use delete::exec as delete;
pub mod delete {
	use super::*;

	pub async fn exec(config: &RequestConfig, id: &str) -> Result<(), Error> {
		rest::delete(config, COLLECTION, id).await
	}
}
