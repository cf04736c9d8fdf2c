//! Commands shared by articles and authors.

use std::{
	io::IsTerminal,
	path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;
use dialoguer::Editor;
use nd_core::{DeleteOutcome, Entity, EntityKind, ListView, Route};

use crate::{
	context::Context,
	domains::open,
	ui,
	util::{output::print_json, prelude::*},
};

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
	/// Case-insensitive filter over title and content (articles) or name and bio (authors)
	#[arg(long, short)]
	pub query: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
	pub id: String,
	/// Skip confirmation prompt
	#[arg(long, short)]
	pub yes: bool,
}

/// Where a markdown body comes from when creating or editing.
#[derive(Args, Debug, Clone, Default)]
pub struct BodyArgs {
	/// Read the markdown body from a file (`-` for stdin)
	#[arg(long, value_name = "PATH")]
	pub body_file: Option<PathBuf>,
	/// Edit the markdown body in $EDITOR
	#[arg(long)]
	pub edit: bool,
}

impl BodyArgs {
	/// Resolves the body from a file or the editor. `None` keeps the current one.
	pub fn resolve(&self, current: &str) -> Result<Option<String>> {
		if let Some(path) = &self.body_file {
			return read_body(path).map(Some);
		}

		if self.edit {
			return Editor::new()
				.extension(".md")
				.edit(current)
				.context("Failed to run the editor");
		}

		Ok(None)
	}
}

fn read_body(path: &Path) -> Result<String> {
	if path == Path::new("-") {
		return std::io::read_to_string(std::io::stdin()).context("Failed to read stdin");
	}

	std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn interactive() -> bool {
	std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

pub async fn list(ctx: &Context, kind: EntityKind, args: ListArgs) -> Result<()> {
	let mut view = ListView::new(kind, args.query);
	view.load(ctx.backend()).await?;
	render_list(ctx, &view);
	Ok(())
}

pub fn render_list(ctx: &Context, view: &ListView) {
	let kind = view.kind();
	let items = view.visible();

	print_output!(ctx, &items, |items: &Vec<&Entity>| {
		if items.is_empty() {
			match view.query() {
				Some(query) => println!("No {}s matching {query:?}", kind.noun()),
				None => println!("No {}s found", kind.noun()),
			}
			return;
		}

		println!("{}", ui::table::entities(kind, items));
		println!();
		println!(
			"{} shown · create with {}",
			items.len(),
			format!("nd open {}", view.create_route()).cyan()
		);
	});
}

pub async fn show(ctx: &Context, kind: EntityKind, id: &str) -> Result<()> {
	let backend = ctx.backend();
	let entity = match kind {
		EntityKind::News => Entity::News(backend.get_news(id).await?),
		EntityKind::Authors => Entity::Author(backend.get_author(id).await?),
	};

	print_output!(ctx, &entity, |entity: &Entity| {
		println!("{}", ui::table::details(entity));

		let body = entity.body();
		if !body.is_empty() {
			println!();
			println!("{body}");
		}
	});

	Ok(())
}

pub async fn delete(ctx: &Context, kind: EntityKind, args: DeleteArgs) -> Result<()> {
	let mut view = ListView::new(kind, None);
	let confirm = PromptConfirm::new(args.yes);

	match view.delete(ctx.backend(), &args.id, &confirm).await? {
		DeleteOutcome::Deleted => {
			if ctx.is_human() {
				println!("{} {} {}", "Deleted".green(), kind.noun(), args.id.bright_yellow());
			}
		}
		DeleteOutcome::Declined => {
			if ctx.is_human() {
				println!("Operation cancelled");
			}
		}
	}

	render_list(ctx, &view);
	Ok(())
}

/// Reports a saved entity and moves on to the route the form returned.
pub async fn finish_upsert(ctx: &Context, entity: Entity, route: Route) -> Result<()> {
	if !ctx.is_human() {
		print_json(&entity);
		return Ok(());
	}

	println!(
		"{} {} {}",
		"Saved".green(),
		entity.kind().noun(),
		entity.id().unwrap_or_default().bright_yellow()
	);
	println!();

	open::render(ctx, &route).await
}
