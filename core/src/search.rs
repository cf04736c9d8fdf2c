//! Full-text search over articles and authors.

use nd_client::{Backend, SearchParams, SearchResult, Suggestion, UsernamePolicy};
use tracing::{debug, warn};

use crate::{EntityKind, Error, Route, ViewLifetime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
	#[default]
	Idle,
	Searching,
	Done,
	Failed,
}

pub struct SearchView {
	query: String,
	username: String,
	policy: UsernamePolicy,
	results: Vec<SearchResult>,
	/// Query of the last search that reached the backend.
	searched: Option<String>,
	state: SearchState,
	last_error: Option<Error>,
	lifetime: ViewLifetime,
}

impl SearchView {
	#[must_use]
	pub fn new(policy: UsernamePolicy) -> Self {
		Self {
			query: String::new(),
			username: String::new(),
			policy,
			results: Vec::new(),
			searched: None,
			state: SearchState::Idle,
			last_error: None,
			lifetime: ViewLifetime::new(),
		}
	}

	/// Prefills query and username from a `/?q=&username=` route.
	#[must_use]
	pub fn from_route(route: &Route, policy: UsernamePolicy) -> Self {
		let mut view = Self::new(policy);
		if let Route::Search { query, username } = route {
			view.query = query.clone().unwrap_or_default();
			view.username = username.clone().unwrap_or_default();
		}
		view
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
	}

	pub fn set_username(&mut self, username: impl Into<String>) {
		self.username = username.into();
	}

	/// Runs the search.
	///
	/// A missing required username fails before any request is made and leaves previous
	/// results in place. A failed request clears them.
	pub async fn submit(&mut self, backend: &dyn Backend) -> Result<&[SearchResult], Error> {
		let params = SearchParams::new(self.query.trim()).with_username(self.username.trim());

		if let Err(e) = params.validate(self.policy) {
			let e = Error::from(e);
			debug!(%e, "search blocked");
			self.last_error = Some(e.clone());
			return Err(e);
		}

		self.state = SearchState::Searching;

		match self.lifetime.run(backend.search(&params, self.policy)).await {
			Ok(results) => {
				debug!(q = %params.q, count = results.len(), "search finished");
				self.results = results;
				self.searched = Some(params.q);
				self.last_error = None;
				self.state = SearchState::Done;
				Ok(&self.results)
			}
			Err(e) => {
				warn!(q = %params.q, %e, "search failed");
				self.results.clear();
				self.searched = None;
				self.last_error = Some(e.clone());
				self.state = SearchState::Failed;
				Err(e)
			}
		}
	}

	/// Autocomplete entries for a prefix; blank prefixes make no request.
	pub async fn suggestions(
		&self,
		backend: &dyn Backend,
		prefix: &str,
	) -> Result<Vec<Suggestion>, Error> {
		let prefix = prefix.trim();
		if prefix.is_empty() {
			return Ok(Vec::new());
		}

		self.lifetime.run(backend.suggest(prefix)).await
	}

	/// True only after a non-empty query came back empty.
	#[must_use]
	pub fn no_results(&self) -> bool {
		self.state == SearchState::Done
			&& self.results.is_empty()
			&& self.searched.as_deref().is_some_and(|q| !q.is_empty())
	}

	#[must_use]
	pub fn route(&self) -> Route {
		let non_empty = |s: &str| (!s.trim().is_empty()).then(|| s.trim().to_string());
		Route::Search {
			query: non_empty(&self.query),
			username: non_empty(&self.username),
		}
	}

	pub fn unmount(&self) {
		self.lifetime.close();
	}

	#[must_use]
	pub fn results(&self) -> &[SearchResult] {
		&self.results
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn username(&self) -> &str {
		&self.username
	}

	#[must_use]
	pub const fn policy(&self) -> UsernamePolicy {
		self.policy
	}

	#[must_use]
	pub const fn state(&self) -> SearchState {
		self.state
	}

	#[must_use]
	pub const fn last_error(&self) -> Option<&Error> {
		self.last_error.as_ref()
	}
}

/// How a search result is presented.
pub trait ResultDisplay {
	/// Title for articles, author name otherwise.
	fn headline(&self) -> Option<&str>;

	/// First highlighted content fragment, falling back to the plain content.
	fn body_fragment(&self) -> Option<&str>;

	/// Highlight fragments of every field other than `content`.
	fn other_highlights(&self) -> Vec<(&str, &[String])>;

	/// Edit form the result opens, if its type has one.
	fn edit_route(&self) -> Option<Route>;
}

impl ResultDisplay for SearchResult {
	fn headline(&self) -> Option<&str> {
		self.title
			.as_deref()
			.filter(|title| !title.is_empty())
			.or(self.author.as_deref())
	}

	fn body_fragment(&self) -> Option<&str> {
		self.highlights
			.as_ref()
			.and_then(|highlights| highlights.get("content"))
			.and_then(|fragments| fragments.first())
			.map(String::as_str)
			.or(self.content.as_deref())
	}

	fn other_highlights(&self) -> Vec<(&str, &[String])> {
		self.highlights
			.iter()
			.flatten()
			.filter(|(field, fragments)| field.as_str() != "content" && !fragments.is_empty())
			.map(|(field, fragments)| (field.as_str(), fragments.as_slice()))
			.collect()
	}

	fn edit_route(&self) -> Option<Route> {
		let Some(kind) = EntityKind::from_result(self.kind) else {
			warn!(id = %self.id, kind = ?self.kind, "search result has no edit view");
			return None;
		};

		Some(Route::edit(kind, &self.id))
	}
}
