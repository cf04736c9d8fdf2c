//! Create-or-update forms.
//!
//! A form mounted with an id loads that entity and submits an update; mounted without one it
//! starts from defaults and submits a create. The lifecycle is
//!
//! ```text
//! Idle -> Loading -> Editing -> Submitting -> Success(list route)
//!                       ^            |
//!                       +-- error ---+
//! ```

use async_trait::async_trait;
use nd_client::{Author, Backend, News};
use tracing::{debug, info, warn};

use crate::{EntityKind, Error, Route, ViewLifetime};

mod news;
mod tags;

pub use news::NewsForm;
pub use tags::TagInput;

pub type AuthorForm = UpsertForm<Author>;

/// An entity that can be edited field by field and stored through a [`Backend`].
#[async_trait]
pub trait Draft: Clone + Default + Send + Sync + 'static {
	const KIND: EntityKind;
	/// Editable field names, in display order.
	const FIELDS: &'static [&'static str];
	/// Fields that must be non-blank before a submit is attempted.
	const REQUIRED: &'static [&'static str];

	fn id(&self) -> Option<&str>;

	fn field(&self, name: &str) -> Result<&str, Error>;

	fn set_field(&mut self, name: &str, value: String) -> Result<(), Error>;

	async fn fetch(backend: &dyn Backend, id: &str) -> Result<Self, nd_client::Error>;

	async fn create(&self, backend: &dyn Backend) -> Result<Self, nd_client::Error>;

	async fn update(&self, backend: &dyn Backend, id: &str) -> Result<Self, nd_client::Error>;

	/// First required field left blank, if any.
	fn missing_required(&self) -> Option<&'static str> {
		Self::REQUIRED.iter().copied().find(|name| {
			self.field(name)
				.map_or(true, |value| value.trim().is_empty())
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
	#[default]
	Idle,
	Loading,
	Editing,
	Submitting,
	/// Stored; holds where the shell should navigate next.
	Success(Route),
}

pub struct UpsertForm<D: Draft> {
	id: Option<String>,
	draft: D,
	state: FormState,
	last_error: Option<Error>,
	lifetime: ViewLifetime,
}

impl<D: Draft> UpsertForm<D> {
	/// A blank `id` is treated like no id at all.
	#[must_use]
	pub fn new(id: Option<String>) -> Self {
		Self::with_lifetime(id, ViewLifetime::new())
	}

	#[must_use]
	pub fn with_lifetime(id: Option<String>, lifetime: ViewLifetime) -> Self {
		Self {
			id: id.filter(|id| !id.trim().is_empty()),
			draft: D::default(),
			state: FormState::Idle,
			last_error: None,
			lifetime,
		}
	}

	/// Builds the form an `/edit/{type}[/{id}]` route points at.
	pub fn from_route(route: &Route) -> Result<Self, Error> {
		match route {
			Route::Edit { kind, id } if *kind == D::KIND => Ok(Self::new(id.clone())),
			other => Err(Error::UnknownEntityType(other.to_path())),
		}
	}

	/// Loads the entity when the form edits one, otherwise goes straight to editing.
	///
	/// A failed load is not fatal: the form stays editable with default fields and the error
	/// is kept in [`Self::last_error`].
	pub async fn mount(&mut self, backend: &dyn Backend) {
		let Some(id) = self.id.clone() else {
			debug!(kind = %D::KIND, "mounting empty form");
			self.state = FormState::Editing;
			return;
		};

		self.state = FormState::Loading;

		match self.lifetime.run(D::fetch(backend, &id)).await {
			Ok(draft) => {
				debug!(kind = %D::KIND, %id, "loaded entity");
				self.draft = draft;
				self.last_error = None;
				self.state = FormState::Editing;
			}
			Err(Error::Cancelled) => {
				debug!(kind = %D::KIND, %id, "form closed while loading");
				self.state = FormState::Idle;
			}
			Err(e) => {
				warn!(kind = %D::KIND, %id, %e, "failed to load entity, editing defaults");
				self.draft = D::default();
				self.last_error = Some(e);
				self.state = FormState::Editing;
			}
		}
	}

	pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), Error> {
		self.draft.set_field(name, value.into())
	}

	pub fn field(&self, name: &str) -> Result<&str, Error> {
		self.draft.field(name)
	}

	/// Creates or updates the entity, never both.
	///
	/// On success the returned route is the entity list; on failure the form stays editable
	/// and nothing navigates.
	pub async fn submit(&mut self, backend: &dyn Backend) -> Result<Route, Error> {
		if let Some(field) = self.draft.missing_required() {
			let e = Error::MissingField(field);
			debug!(kind = %D::KIND, %e, "submit blocked");
			self.last_error = Some(e.clone());
			return Err(e);
		}

		self.state = FormState::Submitting;

		let res = match self.id.as_deref() {
			None => self.lifetime.run(self.draft.create(backend)).await,
			Some(id) => self.lifetime.run(self.draft.update(backend, id)).await,
		};

		match res {
			Ok(saved) => {
				info!(kind = %D::KIND, id = ?saved.id(), "saved entity");
				self.draft = saved;
				self.last_error = None;

				let route = Route::list(D::KIND);
				self.state = FormState::Success(route.clone());
				Ok(route)
			}
			Err(e) => {
				warn!(kind = %D::KIND, %e, "failed to save entity");
				self.state = FormState::Editing;
				self.last_error = Some(e.clone());
				Err(e)
			}
		}
	}

	/// Abandons the form; the caller navigates to the returned list route.
	pub fn cancel(&mut self) -> Route {
		self.lifetime.close();
		Route::list(D::KIND)
	}

	pub fn unmount(&self) {
		self.lifetime.close();
	}

	#[must_use]
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	#[must_use]
	pub fn is_new(&self) -> bool {
		self.id.is_none()
	}

	#[must_use]
	pub const fn draft(&self) -> &D {
		&self.draft
	}

	pub fn draft_mut(&mut self) -> &mut D {
		&mut self.draft
	}

	#[must_use]
	pub const fn state(&self) -> &FormState {
		&self.state
	}

	#[must_use]
	pub const fn last_error(&self) -> Option<&Error> {
		self.last_error.as_ref()
	}

	#[must_use]
	pub const fn lifetime(&self) -> &ViewLifetime {
		&self.lifetime
	}
}

fn optional(value: String) -> Option<String> {
	(!value.trim().is_empty()).then_some(value)
}

#[async_trait]
impl Draft for News {
	const KIND: EntityKind = EntityKind::News;
	const FIELDS: &'static [&'static str] = &["title", "content", "authorId", "imageUrl"];
	const REQUIRED: &'static [&'static str] = &["title", "authorId"];

	fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	fn field(&self, name: &str) -> Result<&str, Error> {
		match name {
			"title" => Ok(&self.title),
			"content" => Ok(&self.content),
			"authorId" => Ok(&self.author_id),
			"imageUrl" => Ok(self.image_url.as_deref().unwrap_or_default()),
			other => Err(Error::UnknownField(other.to_string())),
		}
	}

	fn set_field(&mut self, name: &str, value: String) -> Result<(), Error> {
		match name {
			"title" => self.title = value,
			"content" => self.content = value,
			"authorId" => self.author_id = value,
			"imageUrl" => self.image_url = optional(value),
			other => return Err(Error::UnknownField(other.to_string())),
		}
		Ok(())
	}

	async fn fetch(backend: &dyn Backend, id: &str) -> Result<Self, nd_client::Error> {
		backend.get_news(id).await
	}

	async fn create(&self, backend: &dyn Backend) -> Result<Self, nd_client::Error> {
		backend.create_news(self).await
	}

	async fn update(&self, backend: &dyn Backend, id: &str) -> Result<Self, nd_client::Error> {
		backend.update_news(id, self).await
	}
}

#[async_trait]
impl Draft for Author {
	const KIND: EntityKind = EntityKind::Authors;
	const FIELDS: &'static [&'static str] = &["name", "bio", "imageUrl"];
	const REQUIRED: &'static [&'static str] = &["name"];

	fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	fn field(&self, name: &str) -> Result<&str, Error> {
		match name {
			"name" => Ok(&self.name),
			"bio" => Ok(self.bio.as_deref().unwrap_or_default()),
			"imageUrl" => Ok(self.image_url.as_deref().unwrap_or_default()),
			other => Err(Error::UnknownField(other.to_string())),
		}
	}

	fn set_field(&mut self, name: &str, value: String) -> Result<(), Error> {
		match name {
			"name" => self.name = value,
			"bio" => self.bio = optional(value),
			"imageUrl" => self.image_url = optional(value),
			other => return Err(Error::UnknownField(other.to_string())),
		}
		Ok(())
	}

	async fn fetch(backend: &dyn Backend, id: &str) -> Result<Self, nd_client::Error> {
		backend.get_author(id).await
	}

	async fn create(&self, backend: &dyn Backend) -> Result<Self, nd_client::Error> {
		backend.create_author(self).await
	}

	async fn update(&self, backend: &dyn Backend, id: &str) -> Result<Self, nd_client::Error> {
		backend.update_author(id, self).await
	}
}
