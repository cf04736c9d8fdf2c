//! View state for the newsdesk shell: upsert forms, list and search views, routing.
//!
//! Views talk to the service through [`nd_client::Backend`] and never render anything
//! themselves; the shell drives them and draws their state.

#![warn(
	clippy::all,
	clippy::correctness,
	clippy::perf,
	clippy::style,
	clippy::suspicious,
	clippy::complexity,
	clippy::unwrap_used,
	unused_qualifications,
	rust_2018_idioms,
	trivial_casts,
	trivial_numeric_casts,
	clippy::dbg_macro,
	deprecated
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod config;
pub mod form;
pub mod list;
pub mod search;

mod entity;
mod error;
mod lifetime;
mod router;

pub use config::AppConfig;
pub use entity::{Entity, EntityKind, PREVIEW_CHARS};
pub use error::{report_error, Error, ErrorKind};
pub use form::{AuthorForm, Draft, FormState, NewsForm, TagInput, UpsertForm};
pub use lifetime::ViewLifetime;
pub use list::{Confirm, DeleteOutcome, ListState, ListView};
pub use router::{Navigator, Route};
pub use search::{ResultDisplay, SearchState, SearchView};
