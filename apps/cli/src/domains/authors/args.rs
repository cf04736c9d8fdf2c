use anyhow::Result;
use clap::Args;
use nd_core::AuthorForm;

use crate::domains::entity::BodyArgs;

#[derive(Args, Debug, Clone, Default)]
pub struct AuthorFields {
	/// Author name
	#[arg(long)]
	pub name: Option<String>,

	/// Markdown biography, empty to clear
	#[arg(long, conflicts_with_all = ["body_file", "edit"])]
	pub bio: Option<String>,

	#[command(flatten)]
	pub body: BodyArgs,

	/// Image URL, empty to clear
	#[arg(long)]
	pub image_url: Option<String>,
}

impl AuthorFields {
	pub fn apply(&self, form: &mut AuthorForm) -> Result<()> {
		if let Some(name) = &self.name {
			form.set_field("name", name.as_str())?;
		}

		if let Some(bio) = &self.bio {
			form.set_field("bio", bio.as_str())?;
		} else if let Some(bio) = self.body.resolve(form.field("bio")?)? {
			form.set_field("bio", bio)?;
		}

		if let Some(image_url) = &self.image_url {
			form.set_field("imageUrl", image_url.as_str())?;
		}

		Ok(())
	}
}
