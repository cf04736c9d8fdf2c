use comfy_table::{presets::UTF8_BORDERS_ONLY, ContentArrangement, Table};
use nd_core::{Entity, EntityKind};

pub fn entities(kind: EntityKind, items: &[&Entity]) -> Table {
	let mut table = Table::new();
	table
		.load_preset(UTF8_BORDERS_ONLY)
		.set_content_arrangement(ContentArrangement::Dynamic);

	let label = match kind {
		EntityKind::News => "Title",
		EntityKind::Authors => "Name",
	};
	table.set_header(vec!["ID", label, "Preview"]);

	for item in items {
		table.add_row(vec![
			item.id().unwrap_or("-").to_string(),
			item.label().to_string(),
			item.preview().replace('\n', " "),
		]);
	}

	table
}

/// Key/value rows describing a single entity, body excluded.
pub fn details(entity: &Entity) -> Table {
	let mut table = Table::new();
	table.load_preset(UTF8_BORDERS_ONLY);

	let mut row = |key: &str, value: Option<String>| {
		table.add_row(vec![key.to_string(), value.unwrap_or_else(|| "(not set)".into())]);
	};

	match entity {
		Entity::News(news) => {
			row("id", news.id.clone());
			row("title", Some(news.title.clone()));
			row("authorId", Some(news.author_id.clone()));
			row("tags", news.tags.as_ref().map(|tags| tags.join(", ")));
			row("createdAt", news.created_at.map(|at| at.to_rfc3339()));
			row("updatedAt", news.updated_at.map(|at| at.to_rfc3339()));
		}
		Entity::Author(author) => {
			row("id", author.id.clone());
			row("name", Some(author.name.clone()));
			row("createdAt", author.created_at.map(|at| at.to_rfc3339()));
			row("updatedAt", author.updated_at.map(|at| at.to_rfc3339()));
		}
	}
	row("imageUrl", entity.image_url().map(str::to_string));

	table
}

#[cfg(test)]
mod tests {
	use super::*;

	use nd_client::{Author, News};

	#[test]
	fn author_rows_show_unset_fields() {
		let author = Entity::Author(Author {
			id: Some("a1".into()),
			name: "Ada".into(),
			..Default::default()
		});

		let rendered = details(&author).to_string();

		assert!(rendered.contains("Ada"));
		assert!(rendered.contains("(not set)"));
	}

	#[test]
	fn image_url_is_listed_for_both_kinds() {
		let article = Entity::News(News {
			title: "Launch".into(),
			image_url: Some("https://img.test/launch.png".into()),
			..Default::default()
		});
		let author = Entity::Author(Author {
			name: "Ada".into(),
			image_url: Some("https://img.test/ada.png".into()),
			..Default::default()
		});

		assert!(details(&article).to_string().contains("https://img.test/launch.png"));
		assert!(details(&author).to_string().contains("https://img.test/ada.png"));
	}
}
