use dialoguer::Confirm as Prompt;
use nd_core::Confirm;
use tracing::warn;

/// Asks on the terminal, or answers yes straight away for `--yes`.
pub struct PromptConfirm {
	assume_yes: bool,
}

impl PromptConfirm {
	pub fn new(assume_yes: bool) -> Self {
		Self { assume_yes }
	}
}

impl Confirm for PromptConfirm {
	fn confirm(&self, prompt: &str) -> bool {
		if self.assume_yes {
			return true;
		}

		Prompt::new()
			.with_prompt(prompt)
			.default(false)
			.interact()
			.unwrap_or_else(|e| {
				warn!(%e, "confirmation prompt failed, treating as no");
				false
			})
	}
}
