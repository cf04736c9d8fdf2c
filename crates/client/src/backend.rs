use async_trait::async_trait;

use super::{
	authors, news, search, suggest, Author, Error, News, RequestConfig, SearchParams, SearchResult,
	Suggestion, UsernamePolicy,
};

/// Everything the views need from the remote service.
///
/// [`HttpBackend`] talks to the real API; tests substitute an in-memory implementation.
#[async_trait]
pub trait Backend: Send + Sync {
	async fn get_news(&self, id: &str) -> Result<News, Error>;
	async fn create_news(&self, news: &News) -> Result<News, Error>;
	async fn update_news(&self, id: &str, news: &News) -> Result<News, Error>;
	async fn list_news(&self) -> Result<Vec<News>, Error>;
	async fn delete_news(&self, id: &str) -> Result<(), Error>;

	async fn get_author(&self, id: &str) -> Result<Author, Error>;
	async fn create_author(&self, author: &Author) -> Result<Author, Error>;
	async fn update_author(&self, id: &str, author: &Author) -> Result<Author, Error>;
	async fn list_authors(&self) -> Result<Vec<Author>, Error>;
	async fn delete_author(&self, id: &str) -> Result<(), Error>;

	/// Runs a search whose parameters already passed validation.
	async fn fetch_search(&self, params: &SearchParams) -> Result<Vec<SearchResult>, Error>;

	async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, Error>;

	/// Validates `params` against `policy` and only then runs the search.
	async fn search(
		&self,
		params: &SearchParams,
		policy: UsernamePolicy,
	) -> Result<Vec<SearchResult>, Error> {
		params.validate(policy)?;
		self.fetch_search(params).await
	}
}

pub struct HttpBackend {
	config: RequestConfig,
}

impl HttpBackend {
	#[must_use]
	pub const fn new(config: RequestConfig) -> Self {
		Self { config }
	}

	#[must_use]
	pub const fn config(&self) -> &RequestConfig {
		&self.config
	}
}

#[async_trait]
impl Backend for HttpBackend {
	async fn get_news(&self, id: &str) -> Result<News, Error> {
		news::get(&self.config, id).await
	}

	async fn create_news(&self, news: &News) -> Result<News, Error> {
		news::create(&self.config, news).await
	}

	async fn update_news(&self, id: &str, news: &News) -> Result<News, Error> {
		news::update(&self.config, id, news).await
	}

	async fn list_news(&self) -> Result<Vec<News>, Error> {
		news::list(&self.config).await
	}

	async fn delete_news(&self, id: &str) -> Result<(), Error> {
		news::delete(&self.config, id).await
	}

	async fn get_author(&self, id: &str) -> Result<Author, Error> {
		authors::get(&self.config, id).await
	}

	async fn create_author(&self, author: &Author) -> Result<Author, Error> {
		authors::create(&self.config, author).await
	}

	async fn update_author(&self, id: &str, author: &Author) -> Result<Author, Error> {
		authors::update(&self.config, id, author).await
	}

	async fn list_authors(&self) -> Result<Vec<Author>, Error> {
		authors::list(&self.config).await
	}

	async fn delete_author(&self, id: &str) -> Result<(), Error> {
		authors::delete(&self.config, id).await
	}

	async fn fetch_search(&self, params: &SearchParams) -> Result<Vec<SearchResult>, Error> {
		// Validation already happened in `Backend::search`
		search::exec(&self.config, params, UsernamePolicy::Optional).await
	}

	async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, Error> {
		suggest::exec(&self.config, query).await
	}
}
