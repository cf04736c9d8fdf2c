/// Free-text tag entry: type into the buffer, commit with Enter, remove by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInput {
	tags: Vec<String>,
	buffer: String,
}

impl TagInput {
	#[must_use]
	pub fn new(tags: Vec<String>) -> Self {
		let mut input = Self::default();
		for tag in tags {
			input.add(&tag);
		}
		input
	}

	pub fn set_buffer(&mut self, text: impl Into<String>) {
		self.buffer = text.into();
	}

	#[must_use]
	pub fn buffer(&self) -> &str {
		&self.buffer
	}

	/// Commits the buffer as a tag and clears it. Returns whether a new tag was added.
	pub fn commit(&mut self) -> bool {
		let text = std::mem::take(&mut self.buffer);
		self.add(&text)
	}

	/// Adds a tag directly. Blank and already present tags are ignored.
	pub fn add(&mut self, tag: &str) -> bool {
		let tag = tag.trim();
		if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
			return false;
		}

		self.tags.push(tag.to_string());
		true
	}

	pub fn remove(&mut self, tag: &str) -> bool {
		match self.tags.iter().position(|t| t == tag) {
			Some(idx) => {
				self.tags.remove(idx);
				true
			}
			None => false,
		}
	}

	#[must_use]
	pub fn tags(&self) -> &[String] {
		&self.tags
	}

	/// The tag list as stored on an article, absent when empty.
	#[must_use]
	pub fn to_field(&self) -> Option<Vec<String>> {
		(!self.tags.is_empty()).then(|| self.tags.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn commit_trims_and_clears_the_buffer() {
		let mut input = TagInput::default();

		input.set_buffer("  rust ");
		assert!(input.commit());

		assert_eq!(input.tags(), ["rust"]);
		assert_eq!(input.buffer(), "");
	}

	#[test]
	fn blank_buffer_is_ignored() {
		let mut input = TagInput::default();

		input.set_buffer("   ");

		assert!(!input.commit());
		assert!(input.tags().is_empty());
		assert_eq!(input.buffer(), "");
	}

	#[test]
	fn repeated_insertions_do_not_duplicate() {
		let mut input = TagInput::default();

		for _ in 0..3 {
			input.set_buffer("release");
			input.commit();
		}
		input.add("release ");

		assert_eq!(input.tags(), ["release"]);
	}

	#[test]
	fn remove_takes_out_exactly_one_tag() {
		let mut input = TagInput::new(vec!["a".into(), "b".into(), "c".into(), "b".into()]);

		assert!(input.remove("b"));

		assert_eq!(input.tags(), ["a", "c"]);
		assert!(!input.remove("b"));
		assert!(!input.remove("missing"));
	}

	#[test]
	fn empty_list_is_not_sent() {
		let mut input = TagInput::default();
		assert_eq!(input.to_field(), None);

		input.add("x");
		assert_eq!(input.to_field(), Some(vec!["x".to_string()]));
	}
}
