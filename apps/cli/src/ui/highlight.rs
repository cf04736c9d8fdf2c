//! Renders search highlight fragments.
//!
//! Fragments arrive as small HTML snippets from the search service, which sanitizes them.
//! Emphasis tags become terminal colors and every other tag is dropped.

use colored::Colorize;

const EMPHASIS: [&str; 4] = ["em", "mark", "b", "strong"];

pub fn render(fragment: &str) -> String {
	let mut out = String::with_capacity(fragment.len());
	let mut emphasized = false;
	let mut rest = fragment;

	while let Some(start) = rest.find('<') {
		push_text(&mut out, &rest[..start], emphasized);

		let Some(len) = rest[start..].find('>') else {
			// Unterminated tag, keep it as text
			push_text(&mut out, &rest[start..], emphasized);
			return out;
		};

		let tag = &rest[start + 1..start + len];
		let closing = tag.starts_with('/');
		let name = tag
			.trim_start_matches('/')
			.split(|c: char| c.is_whitespace() || c == '/')
			.next()
			.unwrap_or_default()
			.to_ascii_lowercase();

		if EMPHASIS.contains(&name.as_str()) {
			emphasized = !closing;
		}

		rest = &rest[start + len + 1..];
	}

	push_text(&mut out, rest, emphasized);
	out
}

fn push_text(out: &mut String, text: &str, emphasized: bool) {
	if text.is_empty() {
		return;
	}

	let text = decode_entities(text);
	if emphasized {
		out.push_str(&text.yellow().bold().to_string());
	} else {
		out.push_str(&text);
	}
}

fn decode_entities(text: &str) -> String {
	text.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&#39;", "'")
		.replace("&apos;", "'")
		.replace("&nbsp;", " ")
		.replace("&amp;", "&")
}
