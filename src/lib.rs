pub mod browser;
pub mod client;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod fixtures;
pub mod formatting;
pub mod query;
pub mod render;
pub mod tui;
pub mod types;

#[cfg(any(test, feature = "development"))]
pub mod dev;
