pub use crate::print_output;
pub use crate::util::confirm::PromptConfirm;
