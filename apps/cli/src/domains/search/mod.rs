use anyhow::Result;
use clap::Args;
use colored::Colorize;
use nd_client::{SearchResult, Suggestion};
use nd_core::{ResultDisplay, SearchView};

use crate::context::Context;
use crate::ui::highlight;
use crate::util::prelude::*;

#[derive(Args, Debug)]
pub struct SearchArgs {
	/// Search query
	pub query: String,

	/// User whose articles get boosted (defaults to the configured username)
	#[arg(long, short)]
	pub username: Option<String>,
}

pub async fn run(ctx: &Context, args: SearchArgs) -> Result<()> {
	search(ctx, args.query, args.username).await
}

pub async fn search(ctx: &Context, query: String, username: Option<String>) -> Result<()> {
	let mut view = SearchView::new(ctx.config.username_policy());
	view.set_query(query);
	view.set_username(
		username
			.or_else(|| ctx.config.username.clone())
			.unwrap_or_default(),
	);

	view.submit(ctx.backend()).await?;

	print_output!(ctx, view.results(), |results: &[SearchResult]| {
		if view.no_results() {
			println!("No results found");
			return;
		}

		for (i, result) in results.iter().enumerate() {
			render_result(i + 1, result);
		}
	});

	Ok(())
}

fn render_result(position: usize, result: &SearchResult) {
	let headline = result.headline().unwrap_or("(untitled)");
	let score = result
		.score
		.map(|score| format!(" (score: {score:.2})"))
		.unwrap_or_default();

	println!("{position}. {}{}", headline.bold(), score.dimmed());

	if let Some(fragment) = result.body_fragment() {
		println!("   {}", highlight::render(fragment));
	}

	for (field, fragments) in result.other_highlights() {
		let rendered = fragments
			.iter()
			.map(|fragment| highlight::render(fragment))
			.collect::<Vec<_>>()
			.join(" … ");
		println!("   {}: {rendered}", field.dimmed());
	}

	if let Some(route) = result.edit_route() {
		println!("   {}", format!("nd open {route}").cyan());
	}

	println!();
}

pub async fn suggest(ctx: &Context, query: &str) -> Result<()> {
	let view = SearchView::new(ctx.config.username_policy());
	let suggestions = view.suggestions(ctx.backend(), query).await?;

	print_output!(ctx, &suggestions, |suggestions: &Vec<Suggestion>| {
		if suggestions.is_empty() {
			println!("No suggestions");
			return;
		}

		for suggestion in suggestions {
			if suggestion.kind.is_empty() {
				println!("{}", suggestion.text);
			} else {
				println!("{} {}", suggestion.text, format!("({})", suggestion.kind).dimmed());
			}
		}
	});

	Ok(())
}
