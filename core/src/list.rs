//! Collection view for one entity type, filtered client-side.

use nd_client::Backend;
use tracing::{debug, info, warn};

use crate::{Entity, EntityKind, Error, Route, ViewLifetime};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this item?";

/// Blocking yes/no question asked before destructive actions.
pub trait Confirm {
	fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
	F: Fn(&str) -> bool,
{
	fn confirm(&self, prompt: &str) -> bool {
		self(prompt)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
	#[default]
	Idle,
	Loading,
	Ready,
	Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
	Deleted,
	Declined,
}

/// Identifies one load. Only the ticket of the latest load gets applied.
#[derive(Debug)]
pub struct LoadTicket {
	generation: u64,
	kind: EntityKind,
	lifetime: ViewLifetime,
}

impl LoadTicket {
	#[must_use]
	pub const fn generation(&self) -> u64 {
		self.generation
	}
}

pub struct ListView {
	kind: EntityKind,
	query: Option<String>,
	items: Vec<Entity>,
	state: ListState,
	last_error: Option<Error>,
	generation: u64,
	in_flight: Option<ViewLifetime>,
	lifetime: ViewLifetime,
}

impl ListView {
	#[must_use]
	pub fn new(kind: EntityKind, query: Option<String>) -> Self {
		Self::with_lifetime(kind, query, ViewLifetime::new())
	}

	#[must_use]
	pub fn with_lifetime(kind: EntityKind, query: Option<String>, lifetime: ViewLifetime) -> Self {
		Self {
			kind,
			query: normalize(query),
			items: Vec::new(),
			state: ListState::Idle,
			last_error: None,
			generation: 0,
			in_flight: None,
			lifetime,
		}
	}

	pub fn from_route(route: &Route) -> Result<Self, Error> {
		match route {
			Route::List { kind, query } => Ok(Self::new(*kind, query.clone())),
			other => Err(Error::UnknownEntityType(other.to_path())),
		}
	}

	/// Starts a new load, cancelling the one still in flight.
	pub fn begin_load(&mut self) -> LoadTicket {
		if let Some(previous) = self.in_flight.take() {
			previous.close();
		}

		self.generation += 1;
		self.state = ListState::Loading;

		let lifetime = self.lifetime.child();
		self.in_flight = Some(lifetime.clone());

		LoadTicket {
			generation: self.generation,
			kind: self.kind,
			lifetime,
		}
	}

	/// Fetches the whole collection the ticket was issued for.
	pub async fn fetch(backend: &dyn Backend, ticket: &LoadTicket) -> Result<Vec<Entity>, Error> {
		ticket.lifetime.run(ticket.kind.list(backend)).await
	}

	/// Applies the outcome of a load. Returns `Ok(false)` when a newer load superseded it.
	pub fn apply(
		&mut self,
		ticket: LoadTicket,
		res: Result<Vec<Entity>, Error>,
	) -> Result<bool, Error> {
		if ticket.generation != self.generation || ticket.kind != self.kind {
			debug!(
				stale = ticket.generation,
				current = self.generation,
				"discarding superseded load"
			);
			return Ok(false);
		}

		self.in_flight = None;

		match res {
			Ok(items) => {
				debug!(kind = %self.kind, count = items.len(), "loaded list");
				self.items = items;
				self.last_error = None;
				self.state = ListState::Ready;
				Ok(true)
			}
			Err(Error::Cancelled) => {
				self.state = ListState::Idle;
				Err(Error::Cancelled)
			}
			Err(e) => {
				warn!(kind = %self.kind, %e, "failed to load list");
				self.last_error = Some(e.clone());
				self.state = ListState::Failed;
				Err(e)
			}
		}
	}

	pub async fn load(&mut self, backend: &dyn Backend) -> Result<(), Error> {
		let ticket = self.begin_load();
		let res = Self::fetch(backend, &ticket).await;
		self.apply(ticket, res).map(|_| ())
	}

	/// Follows a route parameter change. Returns whether the list needs reloading.
	pub fn set_route(&mut self, kind: EntityKind, query: Option<String>) -> bool {
		let query = normalize(query);
		if kind == self.kind && query == self.query && self.state != ListState::Idle {
			return false;
		}

		if let Some(previous) = self.in_flight.take() {
			debug!(kind = %self.kind, "route changed, cancelling load in flight");
			previous.close();
			self.state = ListState::Idle;
		}
		self.generation += 1;

		if kind != self.kind {
			self.items.clear();
		}
		self.kind = kind;
		self.query = query;
		true
	}

	/// Items matching the query term, or all of them without one.
	#[must_use]
	pub fn visible(&self) -> Vec<&Entity> {
		match &self.query {
			Some(query) => {
				let needle = query.to_lowercase();
				self.items
					.iter()
					.filter(|item| item.matches(&needle))
					.collect()
			}
			None => self.items.iter().collect(),
		}
	}

	/// Deletes after confirmation, then reloads from the server.
	///
	/// A declined prompt still reloads. A failed delete keeps the list as it is.
	pub async fn delete(
		&mut self,
		backend: &dyn Backend,
		id: &str,
		confirm: &dyn Confirm,
	) -> Result<DeleteOutcome, Error> {
		if !confirm.confirm(DELETE_PROMPT) {
			debug!(kind = %self.kind, %id, "delete declined");
			self.load(backend).await?;
			return Ok(DeleteOutcome::Declined);
		}

		if let Err(e) = self.lifetime.run(self.kind.delete(backend, id)).await {
			warn!(kind = %self.kind, %id, %e, "failed to delete");
			self.last_error = Some(e.clone());
			return Err(e);
		}

		info!(kind = %self.kind, %id, "deleted");
		self.load(backend).await?;
		Ok(DeleteOutcome::Deleted)
	}

	#[must_use]
	pub const fn create_route(&self) -> Route {
		Route::create(self.kind)
	}

	#[must_use]
	pub fn edit_route(&self, id: &str) -> Route {
		Route::edit(self.kind, id)
	}

	#[must_use]
	pub fn route(&self) -> Route {
		Route::List {
			kind: self.kind,
			query: self.query.clone(),
		}
	}

	pub fn unmount(&mut self) {
		self.lifetime.close();
		self.in_flight = None;
	}

	#[must_use]
	pub const fn kind(&self) -> EntityKind {
		self.kind
	}

	#[must_use]
	pub fn query(&self) -> Option<&str> {
		self.query.as_deref()
	}

	#[must_use]
	pub fn items(&self) -> &[Entity] {
		&self.items
	}

	#[must_use]
	pub const fn state(&self) -> ListState {
		self.state
	}

	#[must_use]
	pub const fn last_error(&self) -> Option<&Error> {
		self.last_error.as_ref()
	}
}

fn normalize(query: Option<String>) -> Option<String> {
	query.filter(|q| !q.trim().is_empty())
}
