mod args;

use anyhow::{bail, Result};
use clap::Subcommand;
use nd_core::{AuthorForm, Entity, EntityKind};

use crate::context::Context;
use crate::domains::entity::{self, DeleteArgs, ListArgs};

use self::args::AuthorFields;

#[derive(Subcommand, Debug)]
pub enum AuthorsCmd {
	/// List authors
	List(ListArgs),
	/// Show an author with their markdown bio
	Show { id: String },
	/// Create an author
	Create(AuthorFields),
	/// Edit an author
	Edit {
		id: String,
		#[command(flatten)]
		fields: AuthorFields,
	},
	/// Delete an author
	Delete(DeleteArgs),
}

pub async fn run(ctx: &Context, cmd: AuthorsCmd) -> Result<()> {
	match cmd {
		AuthorsCmd::List(args) => entity::list(ctx, EntityKind::Authors, args).await,
		AuthorsCmd::Show { id } => entity::show(ctx, EntityKind::Authors, &id).await,
		AuthorsCmd::Create(fields) => upsert(ctx, None, fields).await,
		AuthorsCmd::Edit { id, fields } => upsert(ctx, Some(id), fields).await,
		AuthorsCmd::Delete(args) => entity::delete(ctx, EntityKind::Authors, args).await,
	}
}

async fn upsert(ctx: &Context, id: Option<String>, fields: AuthorFields) -> Result<()> {
	let backend = ctx.backend();
	let mut form = AuthorForm::new(id.clone());

	form.mount(backend).await;
	if let (Some(id), Some(e)) = (&id, form.last_error()) {
		if e.is_not_found() {
			bail!("No author with id {id}");
		}
		bail!("Could not load author {id}: {e}");
	}

	fields.apply(&mut form)?;

	let route = form.submit(backend).await?;
	let saved = form.draft().clone();

	entity::finish_upsert(ctx, Entity::Author(saved), route).await
}
