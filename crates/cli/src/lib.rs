//! Inventory query demo: builds the sample list, runs every query and
//! round-trips the list through the JSON interchange file.

pub mod config;
pub mod pipeline;

pub use config::Config;
pub use pipeline::run;
