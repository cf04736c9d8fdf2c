//! `/api/news`

use super::{rest, Error, News, RequestConfig};

const COLLECTION: &str = "news";

pub use get::exec as get;
pub mod get {
	use super::*;

	pub async fn exec(config: &RequestConfig, id: &str) -> Result<Response, Error> {
		rest::get(config, COLLECTION, id).await
	}

	pub type Response = News;
}

pub use list::exec as list;
pub mod list {
	use super::*;

	pub async fn exec(config: &RequestConfig) -> Result<Response, Error> {
		rest::list(config, COLLECTION).await
	}

	pub type Response = Vec<News>;
}

pub use create::exec as create;
pub mod create {
	use super::*;

	pub async fn exec(config: &RequestConfig, news: &News) -> Result<Response, Error> {
		rest::create(config, COLLECTION, news).await
	}

	pub type Response = News;
}

pub use update::exec as update;
pub mod update {
	use super::*;

	pub async fn exec(config: &RequestConfig, id: &str, news: &News) -> Result<Response, Error> {
		rest::update(config, COLLECTION, id, news).await
	}

	pub type Response = News;
}

pub use delete::exec as delete;
pub mod delete {
	use super::*;

	pub async fn exec(config: &RequestConfig, id: &str) -> Result<(), Error> {
		rest::delete(config, COLLECTION, id).await
	}
}
