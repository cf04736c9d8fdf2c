use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A news article.
///
/// `id` is absent on objects that have never been stored and present on everything fetched
/// from the backend; it is the only thing that tells a create apart from an update.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct News {
	#[serde(
		default,
		deserialize_with = "empty_as_none",
		skip_serializing_if = "Option::is_none"
	)]
	pub id: Option<String>,
	#[serde(default)]
	pub title: String,
	/// Markdown body.
	#[serde(default)]
	pub content: String,
	// The backend writes `authorID`, older payloads `authorId`.
	#[serde(default, alias = "authorID")]
	pub author_id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tags: Option<Vec<String>>,
	#[serde(
		default,
		deserialize_with = "empty_as_none",
		skip_serializing_if = "Option::is_none"
	)]
	pub image_url: Option<String>,
	#[serde(default, skip_serializing)]
	pub created_at: Option<DateTime<Utc>>,
	#[serde(default, skip_serializing)]
	pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
	#[serde(
		default,
		deserialize_with = "empty_as_none",
		skip_serializing_if = "Option::is_none"
	)]
	pub id: Option<String>,
	#[serde(default)]
	pub name: String,
	/// Markdown biography.
	#[serde(
		default,
		deserialize_with = "empty_as_none",
		skip_serializing_if = "Option::is_none"
	)]
	pub bio: Option<String>,
	#[serde(
		default,
		deserialize_with = "empty_as_none",
		skip_serializing_if = "Option::is_none"
	)]
	pub image_url: Option<String>,
	#[serde(default, skip_serializing)]
	pub created_at: Option<DateTime<Utc>>,
	#[serde(default, skip_serializing)]
	pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
	News,
	Author,
	#[serde(other)]
	Unknown,
}

/// Read-only projection returned by `/api/search`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
	pub id: String,
	#[serde(rename = "type")]
	pub kind: ResultKind,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub content: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub author: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub score: Option<f64>,
	/// Field name to pre-rendered HTML fragments. The service sanitizes these.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub highlights: Option<BTreeMap<String, Vec<String>>>,
}

/// Autocomplete entry returned by `/api/suggest`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
	pub text: String,
	#[serde(rename = "type", default)]
	pub kind: String,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
