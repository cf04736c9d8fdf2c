mod args;

use anyhow::{bail, Context as _, Result};
use clap::Subcommand;
use dialoguer::Select;
use nd_core::{Entity, EntityKind, NewsForm};
use tracing::debug;

use crate::context::Context;
use crate::domains::entity::{self, interactive, DeleteArgs, ListArgs};

use self::args::NewsFields;

#[derive(Subcommand, Debug)]
pub enum NewsCmd {
	/// List articles
	List(ListArgs),
	/// Show an article with its markdown content
	Show { id: String },
	/// Create an article
	Create(NewsFields),
	/// Edit an article
	Edit {
		id: String,
		#[command(flatten)]
		fields: NewsFields,
	},
	/// Delete an article
	Delete(DeleteArgs),
}

pub async fn run(ctx: &Context, cmd: NewsCmd) -> Result<()> {
	match cmd {
		NewsCmd::List(args) => entity::list(ctx, EntityKind::News, args).await,
		NewsCmd::Show { id } => entity::show(ctx, EntityKind::News, &id).await,
		NewsCmd::Create(fields) => upsert(ctx, None, fields).await,
		NewsCmd::Edit { id, fields } => upsert(ctx, Some(id), fields).await,
		NewsCmd::Delete(args) => entity::delete(ctx, EntityKind::News, args).await,
	}
}

async fn upsert(ctx: &Context, id: Option<String>, fields: NewsFields) -> Result<()> {
	let backend = ctx.backend();
	let mut form = NewsForm::new(id.clone());

	form.mount(backend).await;
	if let (Some(id), Some(e)) = (&id, form.last_error()) {
		if e.is_not_found() {
			bail!("No article with id {id}");
		}
		bail!("Could not load article {id}: {e}");
	}

	fields.apply(&mut form)?;

	if form.form().draft().author_id.is_empty() && interactive() {
		pick_author(&mut form)?;
	}

	let route = form.submit(backend).await?;
	let saved = form.form().draft().clone();

	entity::finish_upsert(ctx, Entity::News(saved), route).await
}

fn pick_author(form: &mut NewsForm) -> Result<()> {
	let (ids, names): (Vec<String>, Vec<String>) = form
		.author_options()
		.map(|(id, name)| (id.to_string(), format!("{name} ({id})")))
		.unzip();

	if ids.is_empty() {
		debug!("no authors to pick from");
		return Ok(());
	}

	let picked = Select::new()
		.with_prompt("Author")
		.items(&names)
		.default(0)
		.interact()
		.context("Failed to read author selection")?;

	form.select_author(&ids[picked])?;
	Ok(())
}
