//! Maps URL-style paths to views.
//!
//! | Path                 | View                                   |
//! |----------------------|----------------------------------------|
//! | `/`                  | search (`?q=&username=`)               |
//! | `/list/{type}`       | list of news or authors (`?q=` filter) |
//! | `/edit/{type}`       | create form                            |
//! | `/edit/{type}/{id}`  | edit form                              |
//!
//! Anything else, including an unknown `{type}`, redirects to `/`.

use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::{debug, info};
use url::Url;

use crate::EntityKind;

// Path segment set: everything that would change how the path splits or parses
const SEGMENT: &AsciiSet = &CONTROLS
	.add(b' ')
	.add(b'"')
	.add(b'#')
	.add(b'%')
	.add(b'/')
	.add(b'?')
	.add(b'<')
	.add(b'>')
	.add(b'`')
	.add(b'{')
	.add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
	Search {
		query: Option<String>,
		username: Option<String>,
	},
	List {
		kind: EntityKind,
		query: Option<String>,
	},
	/// `id` absent means the form creates a new entity.
	Edit {
		kind: EntityKind,
		id: Option<String>,
	},
}

impl Default for Route {
	fn default() -> Self {
		Self::home()
	}
}

impl Route {
	#[must_use]
	pub const fn home() -> Self {
		Self::Search {
			query: None,
			username: None,
		}
	}

	#[must_use]
	pub const fn list(kind: EntityKind) -> Self {
		Self::List { kind, query: None }
	}

	#[must_use]
	pub const fn create(kind: EntityKind) -> Self {
		Self::Edit { kind, id: None }
	}

	#[must_use]
	pub fn edit(kind: EntityKind, id: impl Into<String>) -> Self {
		Self::Edit {
			kind,
			id: Some(id.into()),
		}
	}

	/// Resolves a path such as `/edit/news/n1` or `/list/authors?q=ada`.
	///
	/// Never fails: unresolvable paths redirect home.
	#[must_use]
	pub fn parse(path: &str) -> Self {
		let Ok(url) = Url::parse("nd://app/").and_then(|base| base.join(path.trim())) else {
			debug!(path, "unparseable route, redirecting home");
			return Self::home();
		};

		let param = |name: &str| {
			url.query_pairs()
				.find(|(key, _)| key == name)
				.map(|(_, value)| value.into_owned())
				.filter(|value| !value.is_empty())
		};

		let segments = url
			.path_segments()
			.map(|segments| {
				segments
					.filter(|segment| !segment.is_empty())
					.map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
					.collect::<Vec<_>>()
			})
			.unwrap_or_default();

		let segments = segments.iter().map(String::as_str).collect::<Vec<_>>();

		let route = match segments.as_slice() {
			[] => Some(Self::Search {
				query: param("q"),
				username: param("username"),
			}),
			["list", kind] => kind.parse().ok().map(|kind| Self::List {
				kind,
				query: param("q"),
			}),
			["edit", kind] => kind.parse().ok().map(Self::create),
			["edit", kind, id] => kind.parse().ok().map(|kind| Self::edit(kind, *id)),
			_ => None,
		};

		route.unwrap_or_else(|| {
			debug!(path, "no view for route, redirecting home");
			Self::home()
		})
	}

	#[must_use]
	pub fn to_path(&self) -> String {
		let encode = |s: &str| utf8_percent_encode(s, SEGMENT).to_string();
		let with_query = |path: String, params: &[(&str, &Option<String>)]| {
			let pairs = params
				.iter()
				.filter_map(|(key, value)| value.as_deref().map(|value| (*key, value)))
				.collect::<Vec<_>>();

			if pairs.is_empty() {
				path
			} else {
				let query = url::form_urlencoded::Serializer::new(String::new())
					.extend_pairs(pairs)
					.finish();
				format!("{path}?{query}")
			}
		};

		match self {
			Self::Search { query, username } => {
				with_query("/".to_string(), &[("q", query), ("username", username)])
			}
			Self::List { kind, query } => with_query(format!("/list/{kind}"), &[("q", query)]),
			Self::Edit { kind, id: None } => format!("/edit/{kind}"),
			Self::Edit { kind, id: Some(id) } => format!("/edit/{kind}/{}", encode(id)),
		}
	}
}

impl fmt::Display for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_path())
	}
}

/// Current route plus a back-history.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
	current: Route,
	history: Vec<Route>,
}

impl Navigator {
	#[must_use]
	pub const fn new(start: Route) -> Self {
		Self {
			current: start,
			history: Vec::new(),
		}
	}

	#[must_use]
	pub const fn current(&self) -> &Route {
		&self.current
	}

	pub fn navigate(&mut self, route: Route) {
		if route == self.current {
			return;
		}

		info!(from = %self.current, to = %route, "navigating");
		let previous = std::mem::replace(&mut self.current, route);
		self.history.push(previous);
	}

	/// Swaps the current route without recording history (redirects).
	pub fn replace(&mut self, route: Route) {
		self.current = route;
	}

	pub fn back(&mut self) -> Option<&Route> {
		let previous = self.history.pop()?;
		self.current = previous;
		Some(&self.current)
	}

	#[must_use]
	pub fn can_go_back(&self) -> bool {
		!self.history.is_empty()
	}
}
