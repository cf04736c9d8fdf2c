use std::{fmt, str::FromStr};

use nd_client::{Author, Backend, News, ResultKind};
use serde::Serialize;

use crate::Error;

/// Number of characters shown in list previews.
pub const PREVIEW_CHARS: usize = 150;

/// The `news` | `authors` route parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
	News,
	Authors,
}

impl EntityKind {
	pub const ALL: [Self; 2] = [Self::News, Self::Authors];

	/// Path segment used in routes and API paths.
	#[must_use]
	pub const fn segment(self) -> &'static str {
		match self {
			Self::News => "news",
			Self::Authors => "authors",
		}
	}

	/// Human label for a single item of this kind.
	#[must_use]
	pub const fn noun(self) -> &'static str {
		match self {
			Self::News => "article",
			Self::Authors => "author",
		}
	}

	/// Kind a search result should be edited as, if it maps to one at all.
	#[must_use]
	pub const fn from_result(kind: ResultKind) -> Option<Self> {
		match kind {
			ResultKind::News => Some(Self::News),
			ResultKind::Author => Some(Self::Authors),
			ResultKind::Unknown => None,
		}
	}

	pub async fn list(self, backend: &dyn Backend) -> Result<Vec<Entity>, nd_client::Error> {
		Ok(match self {
			Self::News => backend
				.list_news()
				.await?
				.into_iter()
				.map(Entity::News)
				.collect(),
			Self::Authors => backend
				.list_authors()
				.await?
				.into_iter()
				.map(Entity::Author)
				.collect(),
		})
	}

	pub async fn delete(self, backend: &dyn Backend, id: &str) -> Result<(), nd_client::Error> {
		match self {
			Self::News => backend.delete_news(id).await,
			Self::Authors => backend.delete_author(id).await,
		}
	}
}

impl fmt::Display for EntityKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.segment())
	}
}

impl FromStr for EntityKind {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"news" => Ok(Self::News),
			"authors" => Ok(Self::Authors),
			other => Err(Error::UnknownEntityType(other.to_string())),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entity {
	News(News),
	Author(Author),
}

impl Entity {
	#[must_use]
	pub const fn kind(&self) -> EntityKind {
		match self {
			Self::News(_) => EntityKind::News,
			Self::Author(_) => EntityKind::Authors,
		}
	}

	#[must_use]
	pub fn id(&self) -> Option<&str> {
		match self {
			Self::News(news) => news.id.as_deref(),
			Self::Author(author) => author.id.as_deref(),
		}
	}

	/// Title of an article, name of an author.
	#[must_use]
	pub fn label(&self) -> &str {
		match self {
			Self::News(news) => &news.title,
			Self::Author(author) => &author.name,
		}
	}

	/// Markdown body: article content or author bio.
	#[must_use]
	pub fn body(&self) -> &str {
		match self {
			Self::News(news) => &news.content,
			Self::Author(author) => author.bio.as_deref().unwrap_or_default(),
		}
	}

	#[must_use]
	pub fn image_url(&self) -> Option<&str> {
		match self {
			Self::News(news) => news.image_url.as_deref(),
			Self::Author(author) => author.image_url.as_deref(),
		}
	}

	/// Case-insensitive substring match over label and body.
	///
	/// `needle` must already be lowercase.
	#[must_use]
	pub fn matches(&self, needle: &str) -> bool {
		self.label().to_lowercase().contains(needle) || self.body().to_lowercase().contains(needle)
	}

	/// First [`PREVIEW_CHARS`] characters of the body.
	#[must_use]
	pub fn preview(&self) -> String {
		let body = self.body();
		match body.char_indices().nth(PREVIEW_CHARS) {
			Some((cut, _)) => format!("{}...", &body[..cut]),
			None => body.to_string(),
		}
	}
}
