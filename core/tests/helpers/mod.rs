//! Test helper modules for integration tests

#![allow(dead_code)]

pub mod mock_backend;

pub use mock_backend::*;

use nd_client::{Author, News};

pub fn article(id: &str, title: &str, content: &str) -> News {
	News {
		id: Some(id.to_string()),
		title: title.to_string(),
		content: content.to_string(),
		author_id: "a1".to_string(),
		..Default::default()
	}
}

pub fn author(id: &str, name: &str, bio: Option<&str>) -> Author {
	Author {
		id: Some(id.to_string()),
		name: name.to_string(),
		bio: bio.map(str::to_string),
		..Default::default()
	}
}
