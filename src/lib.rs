pub mod client;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod date_cursor;
pub mod dev;
pub mod error;
pub mod fixtures;
pub mod status;
pub mod team_directory;
pub mod tui;
pub mod types;
