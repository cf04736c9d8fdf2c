//! Terminal rendering helpers

pub mod highlight;
pub mod table;
