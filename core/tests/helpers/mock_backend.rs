//! In-memory backend that records every call.

use std::{
	collections::HashSet,
	sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use nd_client::{
	Author, Backend, Error, News, SearchParams, SearchResult, StatusCode, Suggestion,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
	GetNews(String),
	CreateNews(News),
	UpdateNews(String, News),
	ListNews,
	DeleteNews(String),
	GetAuthor(String),
	CreateAuthor(Author),
	UpdateAuthor(String, Author),
	ListAuthors,
	DeleteAuthor(String),
	Search(SearchParams),
	Suggest(String),
}

#[derive(Default)]
struct Store {
	news: Vec<News>,
	authors: Vec<Author>,
	results: Option<Vec<SearchResult>>,
	suggestions: Vec<Suggestion>,
	failing: HashSet<&'static str>,
	calls: Vec<Call>,
	next_id: u32,
}

#[derive(Default)]
pub struct MockBackend {
	store: Mutex<Store>,
}

impl MockBackend {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_news(self, news: Vec<News>) -> Self {
		self.store().news = news;
		self
	}

	pub fn with_authors(self, authors: Vec<Author>) -> Self {
		self.store().authors = authors;
		self
	}

	/// `None` plays the part of a `null` body, which the client turns into an empty list.
	pub fn with_results(self, results: Option<Vec<SearchResult>>) -> Self {
		self.store().results = results;
		self
	}

	pub fn with_suggestions(self, suggestions: Vec<Suggestion>) -> Self {
		self.store().suggestions = suggestions;
		self
	}

	/// Makes the named operation (e.g. `"delete_news"`) answer with a 500.
	pub fn fail(&self, op: &'static str) {
		self.store().failing.insert(op);
	}

	pub fn calls(&self) -> Vec<Call> {
		self.store().calls.clone()
	}

	pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
		self.store().calls.iter().filter(|call| pred(call)).count()
	}

	pub fn news(&self) -> Vec<News> {
		self.store().news.clone()
	}

	fn store(&self) -> MutexGuard<'_, Store> {
		self.store.lock().unwrap()
	}

	fn record(&self, op: &'static str, call: Call) -> Result<MutexGuard<'_, Store>, Error> {
		let mut store = self.store();
		store.calls.push(call);

		if store.failing.contains(op) {
			return Err(Error::Http {
				status: StatusCode::INTERNAL_SERVER_ERROR,
				body: format!("{op} failed"),
			});
		}

		Ok(store)
	}

	fn next_id(store: &mut Store, prefix: &str) -> String {
		store.next_id += 1;
		format!("{prefix}{}", store.next_id + 100)
	}
}

fn not_found(what: &str) -> Error {
	Error::Http {
		status: StatusCode::NOT_FOUND,
		body: format!(r#"{{"error":"{what} not found"}}"#),
	}
}

#[async_trait]
impl Backend for MockBackend {
	async fn get_news(&self, id: &str) -> Result<News, Error> {
		let store = self.record("get_news", Call::GetNews(id.to_string()))?;
		store
			.news
			.iter()
			.find(|n| n.id.as_deref() == Some(id))
			.cloned()
			.ok_or_else(|| not_found("News"))
	}

	async fn create_news(&self, news: &News) -> Result<News, Error> {
		let mut store = self.record("create_news", Call::CreateNews(news.clone()))?;
		let mut created = news.clone();
		created.id = Some(Self::next_id(&mut store, "n"));
		store.news.push(created.clone());
		Ok(created)
	}

	async fn update_news(&self, id: &str, news: &News) -> Result<News, Error> {
		let mut store = self.record(
			"update_news",
			Call::UpdateNews(id.to_string(), news.clone()),
		)?;
		let slot = store
			.news
			.iter_mut()
			.find(|n| n.id.as_deref() == Some(id))
			.ok_or_else(|| not_found("News"))?;
		*slot = News {
			id: Some(id.to_string()),
			..news.clone()
		};
		Ok(slot.clone())
	}

	async fn list_news(&self) -> Result<Vec<News>, Error> {
		let store = self.record("list_news", Call::ListNews)?;
		Ok(store.news.clone())
	}

	async fn delete_news(&self, id: &str) -> Result<(), Error> {
		let mut store = self.record("delete_news", Call::DeleteNews(id.to_string()))?;
		store.news.retain(|n| n.id.as_deref() != Some(id));
		Ok(())
	}

	async fn get_author(&self, id: &str) -> Result<Author, Error> {
		let store = self.record("get_author", Call::GetAuthor(id.to_string()))?;
		store
			.authors
			.iter()
			.find(|a| a.id.as_deref() == Some(id))
			.cloned()
			.ok_or_else(|| not_found("Author"))
	}

	async fn create_author(&self, author: &Author) -> Result<Author, Error> {
		let mut store = self.record("create_author", Call::CreateAuthor(author.clone()))?;
		let mut created = author.clone();
		created.id = Some(Self::next_id(&mut store, "a"));
		store.authors.push(created.clone());
		Ok(created)
	}

	async fn update_author(&self, id: &str, author: &Author) -> Result<Author, Error> {
		let mut store = self.record(
			"update_author",
			Call::UpdateAuthor(id.to_string(), author.clone()),
		)?;
		let slot = store
			.authors
			.iter_mut()
			.find(|a| a.id.as_deref() == Some(id))
			.ok_or_else(|| not_found("Author"))?;
		*slot = Author {
			id: Some(id.to_string()),
			..author.clone()
		};
		Ok(slot.clone())
	}

	async fn list_authors(&self) -> Result<Vec<Author>, Error> {
		let store = self.record("list_authors", Call::ListAuthors)?;
		Ok(store.authors.clone())
	}

	async fn delete_author(&self, id: &str) -> Result<(), Error> {
		let mut store = self.record("delete_author", Call::DeleteAuthor(id.to_string()))?;
		store.authors.retain(|a| a.id.as_deref() != Some(id));
		Ok(())
	}

	async fn fetch_search(&self, params: &SearchParams) -> Result<Vec<SearchResult>, Error> {
		let store = self.record("search", Call::Search(params.clone()))?;
		Ok(store.results.clone().unwrap_or_default())
	}

	async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, Error> {
		let store = self.record("suggest", Call::Suggest(query.to_string()))?;
		Ok(store.suggestions.clone())
	}
}
