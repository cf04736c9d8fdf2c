use nd_client::{Author, Backend, News};
use tracing::debug;

use super::{FormState, TagInput, UpsertForm};
use crate::{report_error, Error, Route, ViewLifetime};

/// Article form: the upsert form plus the author picklist and tag input.
pub struct NewsForm {
	form: UpsertForm<News>,
	authors: Vec<Author>,
	tags: TagInput,
}

impl NewsForm {
	#[must_use]
	pub fn new(id: Option<String>) -> Self {
		Self::with_lifetime(id, ViewLifetime::new())
	}

	#[must_use]
	pub fn with_lifetime(id: Option<String>, lifetime: ViewLifetime) -> Self {
		Self {
			form: UpsertForm::with_lifetime(id, lifetime),
			authors: Vec::new(),
			tags: TagInput::default(),
		}
	}

	pub fn from_route(route: &Route) -> Result<Self, Error> {
		UpsertForm::from_route(route).map(|form| Self {
			form,
			authors: Vec::new(),
			tags: TagInput::default(),
		})
	}

	/// Loads the article and the author picklist concurrently.
	///
	/// Either may fail without affecting the other; a failed picklist leaves it empty.
	pub async fn mount(&mut self, backend: &dyn Backend) {
		let lifetime = self.form.lifetime().clone();

		let (authors, ()) = futures::join!(
			lifetime.run(backend.list_authors()),
			self.form.mount(backend)
		);

		report_error("failed to load authors for picklist", &authors);
		if let Ok(authors) = authors {
			debug!(count = authors.len(), "loaded author picklist");
			self.authors = authors;
		}

		self.tags = TagInput::new(self.form.draft().tags.clone().unwrap_or_default());
	}

	pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), Error> {
		self.form.set_field(name, value)
	}

	/// Picks an author from the loaded picklist by id.
	pub fn select_author(&mut self, id: &str) -> Result<&Author, Error> {
		let author = self
			.authors
			.iter()
			.find(|author| author.id.as_deref() == Some(id))
			.ok_or_else(|| Error::UnknownField(format!("authorId={id}")))?;

		self.form.draft_mut().author_id = id.to_string();
		Ok(author)
	}

	/// `(id, name)` pairs for the author select box.
	pub fn author_options(&self) -> impl Iterator<Item = (&str, &str)> {
		self.authors
			.iter()
			.filter_map(|author| Some((author.id.as_deref()?, author.name.as_str())))
	}

	pub fn tags_mut(&mut self) -> &mut TagInput {
		&mut self.tags
	}

	#[must_use]
	pub const fn tags(&self) -> &TagInput {
		&self.tags
	}

	pub async fn submit(&mut self, backend: &dyn Backend) -> Result<Route, Error> {
		self.form.draft_mut().tags = self.tags.to_field();
		self.form.submit(backend).await
	}

	pub fn cancel(&mut self) -> Route {
		self.form.cancel()
	}

	pub fn unmount(&self) {
		self.form.unmount();
	}

	#[must_use]
	pub fn authors(&self) -> &[Author] {
		&self.authors
	}

	#[must_use]
	pub const fn form(&self) -> &UpsertForm<News> {
		&self.form
	}

	#[must_use]
	pub const fn state(&self) -> &FormState {
		self.form.state()
	}

	#[must_use]
	pub const fn last_error(&self) -> Option<&Error> {
		self.form.last_error()
	}
}
