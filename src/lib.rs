//! Searches marktplaats for second hand board games
//! and keeps the listings that are actually about them.

mod command;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod listing;
pub mod query;
pub mod report;
pub mod scrape;
mod scraper_utils;

#[doc(hidden)]
pub use command::Bordspel;

/// The games every run searches for.
pub const BOARD_GAMES: &[&str] = &["Gesjaakt"];
