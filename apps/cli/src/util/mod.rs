pub mod confirm;
pub mod macros;
pub mod output;
pub mod prelude;
