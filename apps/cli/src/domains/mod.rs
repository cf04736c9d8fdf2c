pub mod authors;
pub mod config;
pub mod entity;
pub mod news;
pub mod open;
pub mod search;
