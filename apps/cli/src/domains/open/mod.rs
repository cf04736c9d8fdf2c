//! `nd open <path>`: resolves a route path and renders its view.

use anyhow::Result;
use colored::Colorize;
use nd_client::{Author, News};
use nd_core::{Draft, EntityKind, Navigator, Route};
use tracing::info;

use crate::context::Context;
use crate::domains::{entity, search};

pub async fn run(ctx: &Context, path: &str) -> Result<()> {
	let mut nav = Navigator::default();
	let route = Route::parse(path);

	if route == Route::home() && !is_home_path(path) {
		info!(path, "no view for path, redirecting home");
		if ctx.is_human() {
			println!("{}", format!("No view for {path}, showing search").dimmed());
		}
	}

	nav.navigate(route);
	render(ctx, nav.current()).await
}

fn is_home_path(path: &str) -> bool {
	let path = path.trim();
	path.is_empty() || path == "/" || path.starts_with("/?")
}

pub async fn render(ctx: &Context, route: &Route) -> Result<()> {
	match route {
		Route::Search {
			query: Some(query),
			username,
		} => search::search(ctx, query.clone(), username.clone()).await,
		Route::Search { query: None, .. } => {
			println!("Search articles and authors with {}", "nd open '/?q=<query>&username=<user>'".cyan());
			Ok(())
		}
		Route::List { kind, query } => {
			entity::list(ctx, *kind, entity::ListArgs { query: query.clone() }).await
		}
		Route::Edit { kind, id: Some(id) } => {
			entity::show(ctx, *kind, id).await?;
			if ctx.is_human() {
				println!();
				println!("Edit with {}", edit_command(*kind, id).cyan());
			}
			Ok(())
		}
		Route::Edit { kind, id: None } => {
			describe_form(*kind);
			Ok(())
		}
	}
}

fn edit_command(kind: EntityKind, id: &str) -> String {
	format!("nd {kind} edit {id} --help")
}

/// Lists the fields of an empty create form and how to fill them in.
fn describe_form(kind: EntityKind) {
	let (fields, required) = match kind {
		EntityKind::News => (News::FIELDS, News::REQUIRED),
		EntityKind::Authors => (Author::FIELDS, Author::REQUIRED),
	};

	println!("New {}", kind.noun().bold());
	for field in fields {
		if required.contains(field) {
			println!("  {field} {}", "(required)".yellow());
		} else {
			println!("  {field}");
		}
	}
	println!();
	println!("Create with {}", format!("nd {kind} create --help").cyan());
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn home_paths_are_not_redirects() {
		assert!(is_home_path("/"));
		assert!(is_home_path("/?q=rust"));
		assert!(!is_home_path("/list/podcasts"));
	}

	#[test]
	fn edit_routes_point_at_the_edit_command() {
		assert_eq!(edit_command(EntityKind::News, "n1"), "nd news edit n1 --help");
		assert_eq!(edit_command(EntityKind::Authors, "a1"), "nd authors edit a1 --help");
	}
}
