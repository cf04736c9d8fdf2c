use anyhow::Result;
use clap::Args;
use nd_core::NewsForm;

use crate::domains::entity::BodyArgs;

#[derive(Args, Debug, Clone, Default)]
pub struct NewsFields {
	/// Article title
	#[arg(long)]
	pub title: Option<String>,

	/// Markdown content
	#[arg(long, conflicts_with_all = ["body_file", "edit"])]
	pub content: Option<String>,

	#[command(flatten)]
	pub body: BodyArgs,

	/// ID of the article's author (prompted for when omitted on a terminal)
	#[arg(long = "author")]
	pub author_id: Option<String>,

	/// Tag to add (repeatable)
	#[arg(long = "tag", value_name = "TAG")]
	pub tags: Vec<String>,

	/// Tag to remove (repeatable)
	#[arg(long = "untag", value_name = "TAG")]
	pub untags: Vec<String>,

	/// Image URL, empty to clear
	#[arg(long)]
	pub image_url: Option<String>,
}

impl NewsFields {
	pub fn apply(&self, form: &mut NewsForm) -> Result<()> {
		if let Some(title) = &self.title {
			form.set_field("title", title.as_str())?;
		}

		if let Some(content) = &self.content {
			form.set_field("content", content.as_str())?;
		} else if let Some(content) = self.body.resolve(&form.form().draft().content)? {
			form.set_field("content", content)?;
		}

		if let Some(author_id) = &self.author_id {
			form.set_field("authorId", author_id.as_str())?;
		}

		if let Some(image_url) = &self.image_url {
			form.set_field("imageUrl", image_url.as_str())?;
		}

		let tags = form.tags_mut();
		for tag in &self.tags {
			tags.set_buffer(tag.as_str());
			tags.commit();
		}
		for tag in &self.untags {
			tags.remove(tag);
		}

		Ok(())
	}
}
